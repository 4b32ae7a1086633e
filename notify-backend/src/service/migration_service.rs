// src/service/migration_service.rs

use crate::db::DbPool;
use crate::error::AppResult;
use crate::log_with_context;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

/// 未適用マイグレーションの確認と適用
pub struct MigrationService {
    db: DbPool,
}

impl MigrationService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 未適用マイグレーション名の一覧
    pub async fn pending(&self) -> AppResult<Vec<String>> {
        let pending = Migrator::get_pending_migrations(&self.db).await?;
        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    }

    /// Applies every pending migration and returns the names applied.
    ///
    /// The predecessor chain is verified first; a broken chain applies nothing.
    pub async fn apply_pending(&self) -> AppResult<Vec<String>> {
        Migrator::check_chain()?;

        let pending = self.pending().await?;
        if pending.is_empty() {
            tracing::info!("No pending migrations");
            return Ok(pending);
        }

        for name in &pending {
            log_with_context!(tracing::Level::INFO, "Pending migration", "name" => name);
        }

        if let Err(e) = Migrator::up(&self.db, None).await {
            log_with_context!(
                tracing::Level::ERROR,
                "Migration failed",
                "error" => &e,
                "pending" => &pending,
            );
            return Err(e.into());
        }

        tracing::info!(count = pending.len(), "Migrations applied");
        Ok(pending)
    }
}
