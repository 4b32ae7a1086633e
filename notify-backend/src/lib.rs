// src/lib.rs
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AppError, AppResult};
