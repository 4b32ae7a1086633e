// src/main.rs
use notify_backend::config::Config;
use notify_backend::db;
use notify_backend::logging::init_tracing;
use notify_backend::service::migration_service::MigrationService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 設定を読み込む
    let config = Config::from_env()?;

    // トレーシングの設定
    init_tracing(&config.log_filter);
    tracing::info!("Applying pending migrations...");

    let db_pool = db::connect(&config).await?;
    tracing::info!("Database pool created successfully.");

    let applied = MigrationService::new(db_pool.clone())
        .apply_pending()
        .await?;
    for name in &applied {
        tracing::info!("Applied {}", name);
    }

    db_pool.close().await?;
    Ok(())
}
