use sea_orm_migration::prelude::*;

pub const PREDECESSOR: Option<&str> = Some("m20190101_000001_create_notification_tables");

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ジョブの起動元 (manual / scheduled / webhook ...) を記録するカラム
        manager
            .alter_table(
                Table::alter()
                    .table(UnifiedJobs::Table)
                    .add_column(ColumnDef::new(UnifiedJobs::Origin).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(UnifiedJobs::Table)
                    .drop_column(UnifiedJobs::Origin)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum UnifiedJobs {
    Table,
    Origin,
}
