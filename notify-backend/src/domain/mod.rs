// src/domain/mod.rs
pub mod notification_target_model;
pub mod notification_trigger;
pub mod organization_model;
pub mod unified_job_template_model;

// 通知を持つエンティティ種別はマイグレーション側の定義を共有する
pub use migration::notifiable::NotifiableKind;
