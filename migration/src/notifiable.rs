// migration/src/notifiable.rs

//! Notifiable entity kinds and their notification relation tables.
//!
//! Each relation field (`notify_on_any`, `notify_on_start`, ...) is stored as a
//! join table `<kind>_notify_on_<trigger>` between the owner table and
//! `notification_targets`. Names are frozen here so that migrations keep
//! working even after the application schema moves on.

use sea_orm_migration::prelude::*;

/// 通知先テーブルのカラム名 (全リレーションテーブル共通)
pub const TARGET_COLUMN: &str = "notification_target_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifiableKind {
    Organization,
    UnifiedJobTemplate,
}

impl NotifiableKind {
    pub const ALL: [NotifiableKind; 2] =
        [NotifiableKind::Organization, NotifiableKind::UnifiedJobTemplate];

    /// ログ出力用の表示名
    pub fn label(self) -> &'static str {
        match self {
            NotifiableKind::Organization => "Organization",
            NotifiableKind::UnifiedJobTemplate => "Unified Job Template",
        }
    }

    /// オーナーエンティティのテーブル名
    pub fn table(self) -> &'static str {
        match self {
            NotifiableKind::Organization => "organizations",
            NotifiableKind::UnifiedJobTemplate => "unified_job_templates",
        }
    }

    /// リレーションテーブル側のオーナー参照カラム名
    pub fn owner_column(self) -> &'static str {
        match self {
            NotifiableKind::Organization => "organization_id",
            NotifiableKind::UnifiedJobTemplate => "unified_job_template_id",
        }
    }

    fn relation_prefix(self) -> &'static str {
        match self {
            NotifiableKind::Organization => "organization",
            NotifiableKind::UnifiedJobTemplate => "unified_job_template",
        }
    }

    pub fn relation_table(self, trigger: Trigger) -> String {
        format!("{}_notify_on_{}", self.relation_prefix(), trigger.as_str())
    }
}

/// Trigger condition keying a relation set.
///
/// `Any` only exists up to `m20190530_000002_add_notify_on_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Any,
    Start,
    Success,
    Error,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::Any => "any",
            Trigger::Start => "start",
            Trigger::Success => "success",
            Trigger::Error => "error",
        }
    }
}

#[derive(Iden)]
pub enum NotificationTargets {
    Table,
    Id,
    Name,
    NotificationType,
}

/// リレーションテーブルを作成する
///
/// `if_not_exists` は付けない。既存テーブルとの衝突はマイグレーション全体の失敗として扱う。
pub async fn create_relation_table(
    manager: &SchemaManager<'_>,
    kind: NotifiableKind,
    trigger: Trigger,
) -> Result<(), DbErr> {
    let table = kind.relation_table(trigger);

    manager
        .create_table(
            Table::create()
                .table(Alias::new(table.as_str()))
                .col(
                    ColumnDef::new(Alias::new("id"))
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(Alias::new(kind.owner_column()))
                        .integer()
                        .not_null(),
                )
                .col(ColumnDef::new(Alias::new(TARGET_COLUMN)).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name(format!("fk_{}_owner", table))
                        .from(Alias::new(table.as_str()), Alias::new(kind.owner_column()))
                        .to(Alias::new(kind.table()), Alias::new("id"))
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name(format!("fk_{}_target", table))
                        .from(Alias::new(table.as_str()), Alias::new(TARGET_COLUMN))
                        .to(NotificationTargets::Table, NotificationTargets::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    // 同じ (オーナー, 通知先) の組は一度だけ
    manager
        .create_index(
            Index::create()
                .name(format!("idx_{}_owner_target", table))
                .table(Alias::new(table.as_str()))
                .col(Alias::new(kind.owner_column()))
                .col(Alias::new(TARGET_COLUMN))
                .unique()
                .to_owned(),
        )
        .await
}

pub async fn drop_relation_table(
    manager: &SchemaManager<'_>,
    kind: NotifiableKind,
    trigger: Trigger,
) -> Result<(), DbErr> {
    manager
        .drop_table(
            Table::drop()
                .table(Alias::new(kind.relation_table(trigger)))
                .to_owned(),
        )
        .await
}
