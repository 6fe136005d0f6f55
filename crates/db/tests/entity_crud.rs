//! Integration tests for the generic entity repository.
//!
//! Exercises create / find / list / update / delete for every entity type
//! against the in-memory document store.

use std::collections::HashSet;

use assert_matches::assert_matches;
use storyforge_db::memory::MemoryDocumentStore;
use storyforge_db::models::character::{CharacterPsychology, CreateCharacter, UpdateCharacter};
use storyforge_db::models::story::{CreateStory, StoryPlot, StoryStructure, UpdateStory};
use storyforge_db::models::world::{CreateWorld, UpdateWorld, WorldGeography};
use storyforge_db::repositories::{CharacterRepo, StoryRepo, WorldRepo};
use storyforge_db::{Collection, DocumentStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_character(name: &str, story_id: Option<&str>) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        story_id: story_id.map(str::to_string),
        ..Default::default()
    }
}

fn new_world(name: &str) -> CreateWorld {
    CreateWorld {
        name: name.to_string(),
        ..Default::default()
    }
}

fn new_story(title: &str) -> CreateStory {
    CreateStory {
        title: title.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_unique_ids_and_equal_timestamps() {
    let store = MemoryDocumentStore::new();

    let mut ids = HashSet::new();
    for i in 0..20 {
        let c = CharacterRepo::create(&store, new_character(&format!("C{i}"), None))
            .await
            .unwrap();
        assert_eq!(c.created_at, c.updated_at);
        assert!(ids.insert(c.id), "identifier issued twice");
    }
    assert_eq!(store.len(Collection::Characters).await, 20);
}

#[tokio::test]
async fn create_fills_omitted_subgroups_with_defaults() {
    let store = MemoryDocumentStore::new();

    let story = StoryRepo::create(&store, new_story("Ashes")).await.unwrap();
    assert_eq!(story.status, "planning");
    assert_eq!(story.structure, StoryStructure::default());
    assert_eq!(story.plot, StoryPlot::default());
    assert!(story.character_ids.is_empty());

    let world = WorldRepo::create(&store, new_world("Emberfall")).await.unwrap();
    assert_eq!(world.geography, WorldGeography::default());
    assert_eq!(world.details.street_sounds_smells, "");

    let character = CharacterRepo::create(&store, new_character("Rae", None))
        .await
        .unwrap();
    assert_eq!(character.psychology, CharacterPsychology::default());
    assert_eq!(character.narrative.ending_feeling, "");
    assert!(character.story_id.is_none());
}

#[tokio::test]
async fn create_persists_what_it_returns() {
    let store = MemoryDocumentStore::new();

    let created = CharacterRepo::create(&store, new_character("Rae", Some("dangling")))
        .await
        .unwrap();
    let found = CharacterRepo::find_by_id(&store, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
    // Weak references are stored verbatim without any existence check.
    assert_eq!(found.story_id.as_deref(), Some("dangling"));
}

// ---------------------------------------------------------------------------
// Find / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_missing_returns_none() {
    let store = MemoryDocumentStore::new();
    let found = WorldRepo::find_by_id(&store, "missing").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn list_filters_by_story_reference() {
    let store = MemoryDocumentStore::new();

    let a = CharacterRepo::create(&store, new_character("A", Some("S1")))
        .await
        .unwrap();
    CharacterRepo::create(&store, new_character("B", Some("S2")))
        .await
        .unwrap();
    CharacterRepo::create(&store, new_character("C", None))
        .await
        .unwrap();
    let d = CharacterRepo::create(&store, new_character("D", Some("S1")))
        .await
        .unwrap();

    let listed = CharacterRepo::list(&store, Some("S1")).await.unwrap();
    let ids: HashSet<_> = listed.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, HashSet::from([a.id, d.id]));

    let all = CharacterRepo::list(&store, None).await.unwrap();
    assert_eq!(all.len(), 4);

    // An empty filter value means "no filter".
    let unfiltered = CharacterRepo::list(&store, Some("")).await.unwrap();
    assert_eq!(unfiltered.len(), 4);
}

#[tokio::test]
async fn list_on_empty_collection_is_empty() {
    let store = MemoryDocumentStore::new();
    assert!(StoryRepo::list(&store, None).await.unwrap().is_empty());
    assert!(WorldRepo::list(&store, Some("S1")).await.unwrap().is_empty());
}

#[tokio::test]
async fn stories_filter_by_world_reference() {
    let store = MemoryDocumentStore::new();
    let linked = StoryRepo::create(
        &store,
        CreateStory {
            title: "Linked".into(),
            world_id: Some("W1".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    StoryRepo::create(&store, new_story("Unlinked")).await.unwrap();

    let listed = StoryRepo::list(&store, Some("W1")).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, linked.id);
}

#[tokio::test]
async fn list_is_capped() {
    let store = MemoryDocumentStore::new();
    for i in 0..1005 {
        WorldRepo::create(&store, new_world(&format!("W{i}")))
            .await
            .unwrap();
    }
    let listed = WorldRepo::list(&store, None).await.unwrap();
    assert_eq!(listed.len(), 1000);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_present_fields_and_bumps_updated_at() {
    let store = MemoryDocumentStore::new();
    let story = StoryRepo::create(
        &store,
        CreateStory {
            title: "Ashes".into(),
            author: "M. Vale".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = StoryRepo::update(
        &store,
        &story.id,
        &UpdateStory {
            status: Some("writing".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, "writing");
    assert_eq!(updated.title, "Ashes");
    assert_eq!(updated.author, "M. Vale");
    assert_eq!(updated.created_at, story.created_at);
    assert!(updated.updated_at > story.updated_at);

    let reread = StoryRepo::find_by_id(&store, &story.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread, updated);
}

#[tokio::test]
async fn update_replaces_subgroup_wholesale() {
    let store = MemoryDocumentStore::new();
    let story = StoryRepo::create(
        &store,
        CreateStory {
            title: "Ashes".into(),
            plot: Some(StoryPlot {
                premise: "A city burns".into(),
                climax: "The bell tower falls".into(),
                ..Default::default()
            }),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = StoryRepo::update(
        &store,
        &story.id,
        &UpdateStory {
            plot: Some(StoryPlot {
                premise: "A city floods".into(),
                ..Default::default()
            }),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.plot.premise, "A city floods");
    // Not merged with the previous sub-group.
    assert_eq!(updated.plot.climax, "");
}

#[tokio::test]
async fn empty_update_on_existing_entity_succeeds() {
    let store = MemoryDocumentStore::new();
    let world = WorldRepo::create(&store, new_world("Emberfall")).await.unwrap();

    let updated = WorldRepo::update(&store, &world.id, &UpdateWorld::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Emberfall");
    assert!(updated.updated_at > world.updated_at);

    let again = WorldRepo::update(&store, &world.id, &UpdateWorld::default())
        .await
        .unwrap()
        .unwrap();
    assert!(again.updated_at > updated.updated_at);
}

#[tokio::test]
async fn update_missing_returns_none() {
    let store = MemoryDocumentStore::new();
    let result = CharacterRepo::update(
        &store,
        "missing",
        &UpdateCharacter {
            name: Some("Nobody".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
    assert_eq!(store.len(Collection::Characters).await, 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_entity() {
    let store = MemoryDocumentStore::new();
    let c = CharacterRepo::create(&store, new_character("Rae", None))
        .await
        .unwrap();

    assert!(CharacterRepo::delete(&store, &c.id).await.unwrap());
    assert!(CharacterRepo::find_by_id(&store, &c.id)
        .await
        .unwrap()
        .is_none());
    assert!(!CharacterRepo::delete(&store, &c.id).await.unwrap());
}

#[tokio::test]
async fn delete_does_not_cascade() {
    let store = MemoryDocumentStore::new();
    let story = StoryRepo::create(&store, new_story("Ashes")).await.unwrap();
    let c = CharacterRepo::create(&store, new_character("Rae", Some(&story.id)))
        .await
        .unwrap();

    assert!(StoryRepo::delete(&store, &story.id).await.unwrap());

    let orphan = CharacterRepo::find_by_id(&store, &c.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(orphan.story_id.as_deref(), Some(story.id.as_str()));
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_stored_document_surfaces_serialization_error() {
    let store = MemoryDocumentStore::new();
    let mut doc = storyforge_db::Document::new();
    doc.insert("id".into(), "broken".into());
    store
        .insert(Collection::Worlds, "broken", doc)
        .await
        .unwrap();

    let err = WorldRepo::find_by_id(&store, "broken").await.unwrap_err();
    assert_matches!(err, StoreError::Serialization(_));
}
