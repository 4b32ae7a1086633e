// migration/src/relation_splitter.rs

//! Copies legacy `notify_on_any` memberships into `notify_on_success` and
//! `notify_on_error`.
//!
//! The rewrite is additive: nothing is removed from any relation set, and
//! every insert is `ON CONFLICT DO NOTHING`, so running it again over the same
//! data adds nothing.

use crate::notifiable::{NotifiableKind, Trigger, TARGET_COLUMN};
use sea_orm_migration::prelude::*;

/// 1種別分の分割結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub entities_visited: u64,
    pub memberships_read: u64,
    pub success_added: u64,
    pub error_added: u64,
}

/// 指定種別の全エンティティについて `notify_on_any` を success / error に複製する
///
/// Both legacy and new relation tables must exist when this runs. Each pass is
/// a single `INSERT … SELECT` over the whole legacy table, so every owner is
/// covered without loading owners or memberships into memory.
pub async fn split_any_relations(
    manager: &SchemaManager<'_>,
    kind: NotifiableKind,
) -> Result<SplitReport, DbErr> {
    let entities_visited = count_rows(manager, kind.table()).await?;
    let memberships_read = count_rows(manager, &kind.relation_table(Trigger::Any)).await?;

    // success と error は独立した2パスで処理する
    let success_added = copy_members(manager, kind, Trigger::Any, Trigger::Success).await?;
    let error_added = copy_members(manager, kind, Trigger::Any, Trigger::Error).await?;

    let report = SplitReport {
        entities_visited,
        memberships_read,
        success_added,
        error_added,
    };

    tracing::info!(
        kind = kind.label(),
        entities = report.entities_visited,
        memberships = report.memberships_read,
        success_added = report.success_added,
        error_added = report.error_added,
        "Split notify_on_any relations"
    );

    Ok(report)
}

/// `from` の全ペアを `to` へ集合和で追加し、新たに追加された行数を返す
async fn copy_members(
    manager: &SchemaManager<'_>,
    kind: NotifiableKind,
    from: Trigger,
    to: Trigger,
) -> Result<u64, DbErr> {
    let owner = Alias::new(kind.owner_column());
    let target = Alias::new(TARGET_COLUMN);

    // SQLite は INSERT … SELECT … ON CONFLICT の構文曖昧さ回避に WHERE が必要
    let source = Query::select()
        .columns([owner.clone(), target.clone()])
        .from(Alias::new(kind.relation_table(from)))
        .and_where(Expr::col(owner.clone()).is_not_null())
        .to_owned();

    let insert = Query::insert()
        .into_table(Alias::new(kind.relation_table(to)))
        .columns([owner.clone(), target.clone()])
        .select_from(source)
        .map_err(|e| DbErr::Migration(e.to_string()))?
        .on_conflict(OnConflict::columns([owner, target]).do_nothing().to_owned())
        .to_owned();

    let result = manager
        .get_connection()
        .execute(manager.get_database_backend().build(&insert))
        .await?;

    Ok(result.rows_affected())
}

async fn count_rows(manager: &SchemaManager<'_>, table: &str) -> Result<u64, DbErr> {
    let query = Query::select()
        .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("count"))
        .from(Alias::new(table))
        .to_owned();

    let count = match manager
        .get_connection()
        .query_one(manager.get_database_backend().build(&query))
        .await?
    {
        Some(row) => row.try_get::<i64>("", "count")?,
        None => 0,
    };

    Ok(count as u64)
}

/// オーナー1件分のリレーションメンバー (通知先ID) を取得
pub async fn member_ids(
    manager: &SchemaManager<'_>,
    kind: NotifiableKind,
    trigger: Trigger,
    owner_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let query = Query::select()
        .column(Alias::new(TARGET_COLUMN))
        .from(Alias::new(kind.relation_table(trigger)))
        .and_where(Expr::col(Alias::new(kind.owner_column())).eq(owner_id))
        .order_by(Alias::new(TARGET_COLUMN), Order::Asc)
        .to_owned();

    let rows = manager
        .get_connection()
        .query_all(manager.get_database_backend().build(&query))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<i32>("", TARGET_COLUMN))
        .collect()
}
