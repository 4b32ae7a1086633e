// tests/common/test_data.rs

use migration::notifiable::{NotifiableKind, Trigger, TARGET_COLUMN};
use migration::relation_splitter::member_ids;
use migration::SchemaManager;
use notify_backend::domain::{
    notification_target_model, organization_model, unified_job_template_model,
};
use sea_orm::sea_query::{Alias, Query};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Set};
use std::collections::BTreeSet;

pub async fn create_organization(db: &DatabaseConnection, name: &str) -> i32 {
    organization_model::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn create_job_template(
    db: &DatabaseConnection,
    name: &str,
    organization_id: Option<i32>,
) -> i32 {
    unified_job_template_model::ActiveModel {
        name: Set(name.to_string()),
        organization_id: Set(organization_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn create_target(db: &DatabaseConnection, name: &str) -> i32 {
    notification_target_model::ActiveModel {
        name: Set(name.to_string()),
        notification_type: Set("email".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn create_owner(db: &DatabaseConnection, kind: NotifiableKind, name: &str) -> i32 {
    match kind {
        NotifiableKind::Organization => create_organization(db, name).await,
        NotifiableKind::UnifiedJobTemplate => create_job_template(db, name, None).await,
    }
}

/// リレーションテーブルへ直接メンバーを追加する (notify_on_any を含む)
pub async fn add_member(
    db: &DatabaseConnection,
    kind: NotifiableKind,
    trigger: Trigger,
    owner_id: i32,
    target_id: i32,
) {
    let insert = Query::insert()
        .into_table(Alias::new(kind.relation_table(trigger)))
        .columns([Alias::new(kind.owner_column()), Alias::new(TARGET_COLUMN)])
        .values_panic([owner_id.into(), target_id.into()])
        .to_owned();

    db.execute(db.get_database_backend().build(&insert))
        .await
        .unwrap();
}

pub async fn add_members(
    db: &DatabaseConnection,
    kind: NotifiableKind,
    trigger: Trigger,
    owner_id: i32,
    target_ids: &[i32],
) {
    for &target_id in target_ids {
        add_member(db, kind, trigger, owner_id, target_id).await;
    }
}

pub async fn members(
    db: &DatabaseConnection,
    kind: NotifiableKind,
    trigger: Trigger,
    owner_id: i32,
) -> BTreeSet<i32> {
    member_ids(&SchemaManager::new(db), kind, trigger, owner_id)
        .await
        .unwrap()
        .into_iter()
        .collect()
}

pub fn set(ids: &[i32]) -> BTreeSet<i32> {
    ids.iter().copied().collect()
}
