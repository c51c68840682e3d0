use anyhow::{Context, Result};

use crate::{
    config::AppConfig,
    db::{self, DbPool},
};

/// Shared per-request state; the pool is the only process-wide handle to the
/// store and is passed here rather than held in a global.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let db_pool = db::create_pool(&config.database.url)
            .await
            .context("Failed to create DB pool")?;
        Ok(Self { db_pool })
    }
}
