// src/service/mod.rs
pub mod migration_service;
