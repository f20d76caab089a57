mod support;

use storyhub_core::application::ErrorKind;
use storyhub_core::application::services::notifier::NotificationDraft;
use storyhub_core::domain::notification::NotificationType;
use storyhub_core::domain::user::UserId;
use support::{TestApp, UserBuilder};

fn uid(id: i64) -> UserId {
    UserId::new(id).unwrap()
}

fn draft_for(recipient: i64, title: &str) -> NotificationDraft {
    NotificationDraft::new(
        uid(recipient),
        NotificationType::NewFollower,
        title,
        format!("{title} body"),
    )
}

#[tokio::test]
async fn dispatch_stores_an_unread_notification() {
    let app = TestApp::new();
    app.writer(10);
    let notifier = app.services.notifier();

    notifier.dispatch(draft_for(10, "hello")).await.unwrap();

    let stored = app.store.notifications_for(uid(10));
    assert_eq!(stored.len(), 1);
    assert!(!stored[0].is_read);
    assert_eq!(stored[0].title, "hello");
}

#[tokio::test]
async fn dispatch_to_unknown_or_inactive_recipient_is_not_found() {
    let app = TestApp::new();
    app.add_user(UserBuilder::new(12).inactive().build());
    let notifier = app.services.notifier();

    let err = notifier.dispatch(draft_for(99, "ghost")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let err = notifier.dispatch(draft_for(12, "asleep")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert!(!notifier.notify(draft_for(99, "ghost")).await);
    assert_eq!(app.store.notification_count(), 0);
}

#[tokio::test]
async fn fan_out_reports_each_recipient() {
    let app = TestApp::new();
    for id in 10..=13 {
        app.writer(id);
    }
    app.store.fail_notifications_for(uid(11));
    let notifier = app.services.notifier();

    let report = notifier
        .fan_out([10, 11, 12, 13, 99].map(uid), |recipient| {
            draft_for(i64::from(recipient), "broadcast")
        })
        .await;

    assert_eq!(report.delivered, 3);
    assert_eq!(report.failed, 2);
    for id in [10, 12, 13] {
        assert_eq!(app.store.notifications_for(uid(id)).len(), 1);
    }
}

#[tokio::test]
async fn recipients_only_see_their_own_notifications() {
    let app = TestApp::new();
    let owner = app.writer(10);
    let stranger = app.writer(11);
    let notifier = app.services.notifier();
    notifier.dispatch(draft_for(10, "private")).await.unwrap();
    let queries = &app.services.notification_queries;
    let commands = &app.services.notification_commands;

    let err = queries.list_for_user(&stranger, 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    let err = queries.count_unread(&stranger, 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    let err = commands.mark_all_read(&stranger, 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let id = queries.list_for_user(&owner, 10).await.unwrap()[0].id;
    let err = commands.mark_read(&stranger, id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(!app.store.notifications_for(uid(10))[0].is_read);

    let err = commands.mark_read(&owner, 4040).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn read_state_round_trip() {
    let app = TestApp::new();
    let owner = app.writer(10);
    let notifier = app.services.notifier();
    for title in ["one", "two", "three"] {
        notifier.dispatch(draft_for(10, title)).await.unwrap();
    }
    let queries = &app.services.notification_queries;
    let commands = &app.services.notification_commands;

    let listed = queries.list_for_user(&owner, 10).await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["three", "two", "one"]);
    assert_eq!(queries.count_unread(&owner, 10).await.unwrap().unread, 3);

    commands.mark_read(&owner, listed[0].id).await.unwrap();
    commands.mark_read(&owner, listed[0].id).await.unwrap();
    assert_eq!(queries.count_unread(&owner, 10).await.unwrap().unread, 2);
    let unread = queries.list_unread_for_user(&owner, 10).await.unwrap();
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|n| !n.is_read));

    assert_eq!(commands.mark_all_read(&owner, 10).await.unwrap(), 2);
    assert_eq!(commands.mark_all_read(&owner, 10).await.unwrap(), 0);
    assert_eq!(queries.count_unread(&owner, 10).await.unwrap().unread, 0);
}

#[tokio::test]
async fn dto_serializes_type_field() {
    let app = TestApp::new();
    let owner = app.writer(10);
    app.services
        .notifier()
        .dispatch(draft_for(10, "wire"))
        .await
        .unwrap();

    let listed = app
        .services
        .notification_queries
        .list_for_user(&owner, 10)
        .await
        .unwrap();
    let json = serde_json::to_value(&listed[0]).unwrap();
    assert_eq!(json["type"], "NEW_FOLLOWER");
    assert_eq!(json["is_read"], false);
}
