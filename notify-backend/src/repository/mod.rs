// src/repository/mod.rs
pub mod notification_relation_repository;
