//! Adds `notify_on_start`, splits `notify_on_any` into success / error and
//! removes `notify_on_any`.
//!
//! Irreversible. On PostgreSQL the runner executes the whole step inside one
//! transaction; any failure leaves the store as it was before.

use crate::notifiable::{create_relation_table, drop_relation_table, NotifiableKind, Trigger};
use crate::relation_splitter::{split_any_relations, SplitReport};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

pub const PREDECESSOR: Option<&str> = Some("m20190530_000001_add_origin_to_unified_jobs");

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ensure_transactional_ddl(manager.get_database_backend())?;

        add_start_relations(manager).await?;

        // any を削除する前に success / error へ分割しておく
        split_all(manager).await?;

        remove_any_relations(manager).await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Migration(format!(
            "{} is irreversible: notify_on_any memberships cannot be recovered",
            self.name()
        )))
    }
}

/// Structural changes and data rewrite must share one transaction; MySQL
/// commits DDL implicitly, so a failure half-way could not be undone.
pub fn ensure_transactional_ddl(backend: DatabaseBackend) -> Result<(), DbErr> {
    if backend == DatabaseBackend::MySql {
        return Err(DbErr::Migration(
            "notify_on_any split requires a backend with transactional DDL".to_string(),
        ));
    }
    Ok(())
}

/// notify_on_start を追加 (Organization → Unified Job Template の順)
pub async fn add_start_relations(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for kind in NotifiableKind::ALL {
        create_relation_table(manager, kind, Trigger::Start).await?;
    }
    Ok(())
}

/// Runs the splitter for every kind and returns one report per kind.
pub async fn split_all(
    manager: &SchemaManager<'_>,
) -> Result<Vec<(NotifiableKind, SplitReport)>, DbErr> {
    let mut reports = Vec::with_capacity(NotifiableKind::ALL.len());
    for kind in NotifiableKind::ALL {
        reports.push((kind, split_any_relations(manager, kind).await?));
    }
    Ok(reports)
}

/// レガシーな notify_on_any を削除
pub async fn remove_any_relations(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for kind in NotifiableKind::ALL {
        drop_relation_table(manager, kind, Trigger::Any).await?;
    }
    Ok(())
}
