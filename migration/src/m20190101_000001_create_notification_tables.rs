use crate::notifiable::{
    create_relation_table, drop_relation_table, NotifiableKind, NotificationTargets, Trigger,
};
use sea_orm_migration::prelude::*;

pub const PREDECESSOR: Option<&str> = None;

/// notify_on_start 導入前のトリガー
const INITIAL_TRIGGERS: [Trigger; 3] = [Trigger::Any, Trigger::Success, Trigger::Error];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationTargets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NotificationTargets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NotificationTargets::Name).string().not_null())
                    .col(
                        ColumnDef::new(NotificationTargets::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Organizations::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UnifiedJobTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnifiedJobTemplates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UnifiedJobTemplates::Name)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UnifiedJobTemplates::OrganizationId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_unified_job_templates_organization_id")
                            .from(
                                UnifiedJobTemplates::Table,
                                UnifiedJobTemplates::OrganizationId,
                            )
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UnifiedJobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnifiedJobs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UnifiedJobs::UnifiedJobTemplateId).integer())
                    .col(
                        ColumnDef::new(UnifiedJobs::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_unified_jobs_unified_job_template_id")
                            .from(UnifiedJobs::Table, UnifiedJobs::UnifiedJobTemplateId)
                            .to(UnifiedJobTemplates::Table, UnifiedJobTemplates::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 通知リレーション (any / success / error)
        for kind in NotifiableKind::ALL {
            for trigger in INITIAL_TRIGGERS {
                create_relation_table(manager, kind, trigger).await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for kind in NotifiableKind::ALL {
            for trigger in INITIAL_TRIGGERS {
                drop_relation_table(manager, kind, trigger).await?;
            }
        }

        manager
            .drop_table(Table::drop().table(UnifiedJobs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnifiedJobTemplates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NotificationTargets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Organizations {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum UnifiedJobTemplates {
    Table,
    Id,
    Name,
    OrganizationId,
}

#[derive(Iden)]
enum UnifiedJobs {
    Table,
    Id,
    UnifiedJobTemplateId,
    Status,
}
