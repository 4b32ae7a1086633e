// src/config.rs
use crate::error::{AppError, AppResult};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_LOG_FILTER: &str = "notify_backend=info,migration=info,sea_orm_migration=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// PostgreSQL のスキーマ (未指定なら search_path のデフォルト)
    pub db_schema: Option<String>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL must be set".to_string()))?;

        let db_schema = env::var("DB_SCHEMA")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter =
            env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            database_url,
            db_schema,
            log_filter,
        })
    }
}
