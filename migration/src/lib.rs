// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

use std::collections::HashSet;
use thiserror::Error;

pub mod notifiable;
pub mod relation_splitter;

// ベーススキーマ
mod m20190101_000001_create_notification_tables;
// ジョブ起動元トラッキング
mod m20190530_000001_add_origin_to_unified_jobs;
// 通知トリガーの分割 (any -> success / error) と notify_on_start の追加
pub mod m20190530_000002_add_notify_on_start;

/// A migration paired with the name of the migration it depends on.
pub struct Step {
    pub migration: Box<dyn MigrationTrait>,
    pub predecessor: Option<&'static str>,
}

impl Step {
    fn new<M: MigrationTrait + 'static>(migration: M, predecessor: Option<&'static str>) -> Self {
        Self {
            migration: Box::new(migration),
            predecessor,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("{migration} declares predecessor {declared:?} but is ordered after {actual:?}")]
    PredecessorMismatch {
        migration: String,
        declared: Option<String>,
        actual: Option<String>,
    },

    #[error("Duplicate migration name: {0}")]
    Duplicate(String),
}

pub struct Migrator;

impl Migrator {
    pub fn steps() -> Vec<Step> {
        vec![
            // 1. 基本テーブル作成
            Step::new(
                m20190101_000001_create_notification_tables::Migration,
                m20190101_000001_create_notification_tables::PREDECESSOR,
            ),
            // 2. unified_jobs.origin 追加
            Step::new(
                m20190530_000001_add_origin_to_unified_jobs::Migration,
                m20190530_000001_add_origin_to_unified_jobs::PREDECESSOR,
            ),
            // 3. notify_on_any の分割
            Step::new(
                m20190530_000002_add_notify_on_start::Migration,
                m20190530_000002_add_notify_on_start::PREDECESSOR,
            ),
        ]
    }

    /// 各ステップの宣言した前提マイグレーションが直前のステップと一致するか検証
    pub fn check_chain() -> Result<(), ChainError> {
        let declared: Vec<(String, Option<&'static str>)> = Self::steps()
            .iter()
            .map(|step| (step.migration.name().to_string(), step.predecessor))
            .collect();

        verify_chain(
            declared
                .iter()
                .map(|(name, predecessor)| (name.as_str(), *predecessor)),
        )
    }
}

fn verify_chain<'a, I>(steps: I) -> Result<(), ChainError>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut seen = HashSet::new();
    let mut previous: Option<&str> = None;

    for (name, predecessor) in steps {
        if !seen.insert(name) {
            return Err(ChainError::Duplicate(name.to_string()));
        }
        if predecessor != previous {
            return Err(ChainError::PredecessorMismatch {
                migration: name.to_string(),
                declared: predecessor.map(str::to_string),
                actual: previous.map(str::to_string),
            });
        }
        previous = Some(name);
    }

    Ok(())
}

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        Self::steps().into_iter().map(|step| step.migration).collect()
    }
}
