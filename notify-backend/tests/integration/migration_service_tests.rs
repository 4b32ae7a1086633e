// tests/integration/migration_service_tests.rs

use notify_backend::service::migration_service::MigrationService;

use crate::common::db::TestDatabase;

#[tokio::test]
async fn test_apply_pending_on_empty_database() {
    let db = TestDatabase::empty().await;
    let service = MigrationService::new(db.connection.clone());

    let applied = service.apply_pending().await.unwrap();

    assert_eq!(
        applied,
        vec![
            "m20190101_000001_create_notification_tables",
            "m20190530_000001_add_origin_to_unified_jobs",
            "m20190530_000002_add_notify_on_start",
        ]
    );
    assert!(service.pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_apply_pending_twice_applies_nothing() {
    let db = TestDatabase::empty().await;
    let service = MigrationService::new(db.connection.clone());

    service.apply_pending().await.unwrap();
    let second = service.apply_pending().await.unwrap();

    assert!(second.is_empty());
}

#[tokio::test]
async fn test_only_split_step_is_pending_after_predecessor() {
    let db = TestDatabase::before_notify_split().await;
    let service = MigrationService::new(db.connection.clone());

    assert_eq!(
        service.pending().await.unwrap(),
        vec!["m20190530_000002_add_notify_on_start"]
    );

    let applied = service.apply_pending().await.unwrap();
    assert_eq!(applied, vec!["m20190530_000002_add_notify_on_start"]);
}
