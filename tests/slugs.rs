mod support;

use std::collections::HashSet;

use storyhub_core::application::commands::stories::UpdateStoryCommand;
use support::{TestApp, story_command};

#[tokio::test]
async fn same_title_gets_numbered_suffixes() {
    let app = TestApp::new();
    let author = app.writer(10);

    let first = app.draft(&author, "Merhaba Dünya").await;
    let second = app.draft(&author, "Merhaba Dünya").await;
    let third = app.draft(&author, "Merhaba Dünya").await;

    assert_eq!(first.slug, "merhaba-dunya");
    assert_eq!(second.slug, "merhaba-dunya-1");
    assert_eq!(third.slug, "merhaba-dunya-2");
}

#[tokio::test]
async fn title_without_slug_characters_uses_fallback() {
    let app = TestApp::new();
    let author = app.writer(10);

    let story = app.draft(&author, "!!!").await;
    assert!(story.slug.starts_with("story-"), "got {}", story.slug);
}

#[tokio::test]
async fn lost_insert_race_reprobes_once() {
    let app = TestApp::new();
    let author = app.writer(10);
    app.store.claim_slug_concurrently("race-day");

    let story = app.draft(&author, "Race Day").await;
    assert_eq!(story.slug, "race-day-1");
}

#[tokio::test]
async fn lost_rename_race_reprobes_once() {
    let app = TestApp::new();
    let author = app.writer(10);
    let draft = app.draft(&author, "Before").await;
    app.store.claim_slug_concurrently("after");

    let renamed = app
        .services
        .story_commands
        .update_story(
            &author,
            UpdateStoryCommand {
                id: draft.id,
                title: Some("After".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "after-1");
}

#[tokio::test]
async fn concurrent_creations_yield_distinct_slugs() {
    let app = TestApp::new();
    let author = app.writer(10);
    let commands = &app.services.story_commands;

    let (a, b, c) = tokio::join!(
        commands.create_story(&author, story_command("Parallel")),
        commands.create_story(&author, story_command("Parallel")),
        commands.create_story(&author, story_command("Parallel")),
    );
    let slugs: HashSet<String> = [a, b, c].into_iter().map(|s| s.unwrap().slug).collect();

    assert_eq!(slugs.len(), 3);
    assert!(slugs.contains("parallel"));
}

#[tokio::test]
async fn renaming_to_own_slug_is_not_a_collision() {
    let app = TestApp::new();
    let author = app.writer(10);
    let draft = app.draft(&author, "Echo").await;

    let renamed = app
        .services
        .story_commands
        .update_story(
            &author,
            UpdateStoryCommand {
                id: draft.id,
                title: Some("ECHO".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "ECHO");
    assert_eq!(renamed.slug, "echo");
}
