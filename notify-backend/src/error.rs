// src/error.rs

use migration::ChainError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Migration chain error: {0}")]
    MigrationChain(#[from] ChainError),

    #[error("Item not found: {0}")]
    NotFound(String),
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
