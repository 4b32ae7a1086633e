// src/db.rs
use crate::config::Config;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

// マイグレーション用途なので接続数は少なめ
fn connect_options(config: &Config) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);
    opt
}

pub async fn create_db_pool(config: &Config) -> Result<DbPool, DbErr> {
    Database::connect(connect_options(config)).await
}

// スキーマを指定して接続するバージョン
pub async fn create_db_pool_with_schema(config: &Config, schema: &str) -> Result<DbPool, DbErr> {
    let mut opt = connect_options(config);
    opt.set_schema_search_path(schema.to_string());

    Database::connect(opt).await
}

// スキーマが存在するか確認するヘルパー関数
pub async fn schema_exists(conn: &DbPool, schema: &str) -> Result<bool, DbErr> {
    let result_opt = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT EXISTS (SELECT 1 FROM information_schema.schemata WHERE schema_name = $1)",
            [schema.into()],
        ))
        .await?;

    // 結果が存在すれば処理、なければfalseを返す
    match result_opt {
        Some(result) => result.try_get("", "exists"),
        None => Ok(false),
    }
}

// スキーマを作成するヘルパー関数
pub async fn create_schema(conn: &DbPool, schema: &str) -> Result<(), DbErr> {
    let create_schema = format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\";",
        schema.replace('"', "\"\"")
    );
    conn.execute(Statement::from_string(
        DatabaseBackend::Postgres,
        create_schema,
    ))
    .await?;
    Ok(())
}

/// 設定に応じて接続を作成する (DB_SCHEMA 指定時はスキーマを作成してから接続)
pub async fn connect(config: &Config) -> Result<DbPool, DbErr> {
    let Some(schema) = config.db_schema.as_deref() else {
        return create_db_pool(config).await;
    };

    tracing::info!("Using schema: {}", schema);
    let base_pool = create_db_pool(config).await?;

    if !schema_exists(&base_pool, schema).await? {
        tracing::info!("Schema does not exist, creating it: {}", schema);
        create_schema(&base_pool, schema).await?;
    }
    base_pool.close().await?;

    create_db_pool_with_schema(config, schema).await
}
