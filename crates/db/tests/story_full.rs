//! Integration tests for the story aggregation.

use storyforge_db::aggregates::load_story_full;
use storyforge_db::memory::MemoryDocumentStore;
use storyforge_db::models::character::CreateCharacter;
use storyforge_db::models::story::CreateStory;
use storyforge_db::models::world::CreateWorld;
use storyforge_db::repositories::{CharacterRepo, StoryRepo, WorldRepo};

#[tokio::test]
async fn missing_story_returns_none() {
    let store = MemoryDocumentStore::new();
    assert!(load_story_full(&store, "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn assembles_story_characters_and_world() {
    let store = MemoryDocumentStore::new();
    let world = WorldRepo::create(
        &store,
        CreateWorld {
            name: "Emberfall".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let story = StoryRepo::create(
        &store,
        CreateStory {
            title: "Ashes".into(),
            world_id: Some(world.id.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let rae = CharacterRepo::create(
        &store,
        CreateCharacter {
            name: "Rae".into(),
            story_id: Some(story.id.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    CharacterRepo::create(
        &store,
        CreateCharacter {
            name: "Elsewhere".into(),
            story_id: Some("other".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let full = load_story_full(&store, &story.id).await.unwrap().unwrap();
    assert_eq!(full.story, story);
    assert_eq!(full.characters, vec![rae]);
    assert_eq!(full.world, Some(world));
}

#[tokio::test]
async fn dangling_world_reference_yields_no_world() {
    let store = MemoryDocumentStore::new();
    let world = WorldRepo::create(
        &store,
        CreateWorld {
            name: "Emberfall".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let story = StoryRepo::create(
        &store,
        CreateStory {
            title: "Ashes".into(),
            world_id: Some(world.id.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(WorldRepo::delete(&store, &world.id).await.unwrap());

    let full = load_story_full(&store, &story.id).await.unwrap().unwrap();
    assert!(full.world.is_none());
    assert_eq!(full.story.world_id.as_deref(), Some(world.id.as_str()));
    assert!(full.characters.is_empty());
}
