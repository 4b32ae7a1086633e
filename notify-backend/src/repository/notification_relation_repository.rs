// notify-backend/src/repository/notification_relation_repository.rs

use crate::domain::notification_trigger::NotificationTrigger;
use crate::domain::{
    notification_target_model, organization_model, unified_job_template_model, NotifiableKind,
};
use crate::error::{AppError, AppResult};
use migration::notifiable::TARGET_COLUMN;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Order, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait};

/// トリガー別の通知先ID一覧
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationTargets {
    pub start: Vec<i32>,
    pub success: Vec<i32>,
    pub error: Vec<i32>,
}

#[derive(Clone)]
pub struct NotificationRelationRepository {
    db: DatabaseConnection,
}

impl NotificationRelationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 指定トリガーの通知先IDを昇順で取得
    pub async fn find_targets(
        &self,
        kind: NotifiableKind,
        owner_id: i32,
        trigger: NotificationTrigger,
    ) -> AppResult<Vec<i32>> {
        let query = Query::select()
            .column(Alias::new(TARGET_COLUMN))
            .from(Alias::new(kind.relation_table(trigger.into())))
            .and_where(Expr::col(Alias::new(kind.owner_column())).eq(owner_id))
            .order_by(Alias::new(TARGET_COLUMN), Order::Asc)
            .to_owned();

        let rows = self
            .db
            .query_all(self.db.get_database_backend().build(&query))
            .await?;

        rows.iter()
            .map(|row| row.try_get::<i32>("", TARGET_COLUMN).map_err(AppError::from))
            .collect()
    }

    /// start / success / error をまとめて取得
    pub async fn find_all_targets(
        &self,
        kind: NotifiableKind,
        owner_id: i32,
    ) -> AppResult<NotificationTargets> {
        Ok(NotificationTargets {
            start: self
                .find_targets(kind, owner_id, NotificationTrigger::Start)
                .await?,
            success: self
                .find_targets(kind, owner_id, NotificationTrigger::Success)
                .await?,
            error: self
                .find_targets(kind, owner_id, NotificationTrigger::Error)
                .await?,
        })
    }

    /// 通知先を追加
    ///
    /// Returns `false` when the pair was already present.
    pub async fn attach(
        &self,
        kind: NotifiableKind,
        owner_id: i32,
        trigger: NotificationTrigger,
        target_id: i32,
    ) -> AppResult<bool> {
        self.ensure_owner_exists(kind, owner_id).await?;
        if notification_target_model::Entity::find_by_id(target_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Notification target {} not found",
                target_id
            )));
        }

        let owner_column = Alias::new(kind.owner_column());
        let target_column = Alias::new(TARGET_COLUMN);
        let insert = Query::insert()
            .into_table(Alias::new(kind.relation_table(trigger.into())))
            .columns([owner_column.clone(), target_column.clone()])
            .values_panic([owner_id.into(), target_id.into()])
            .on_conflict(
                OnConflict::columns([owner_column, target_column])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let result = self
            .db
            .execute(self.db.get_database_backend().build(&insert))
            .await?;

        let attached = result.rows_affected() > 0;
        if attached {
            tracing::debug!(
                kind = kind.label(),
                owner_id,
                target_id,
                trigger = trigger.as_str(),
                "Notification target attached"
            );
        }
        Ok(attached)
    }

    /// 通知先を外す。存在しなかった場合は false
    pub async fn detach(
        &self,
        kind: NotifiableKind,
        owner_id: i32,
        trigger: NotificationTrigger,
        target_id: i32,
    ) -> AppResult<bool> {
        let delete = Query::delete()
            .from_table(Alias::new(kind.relation_table(trigger.into())))
            .and_where(Expr::col(Alias::new(kind.owner_column())).eq(owner_id))
            .and_where(Expr::col(Alias::new(TARGET_COLUMN)).eq(target_id))
            .to_owned();

        let result = self
            .db
            .execute(self.db.get_database_backend().build(&delete))
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ensure_owner_exists(&self, kind: NotifiableKind, owner_id: i32) -> AppResult<()> {
        let exists = match kind {
            NotifiableKind::Organization => organization_model::Entity::find_by_id(owner_id)
                .one(&self.db)
                .await?
                .is_some(),
            NotifiableKind::UnifiedJobTemplate => {
                unified_job_template_model::Entity::find_by_id(owner_id)
                    .one(&self.db)
                    .await?
                    .is_some()
            }
        };

        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "{} {} not found",
                kind.label(),
                owner_id
            )))
        }
    }
}
