use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

pub struct DatabaseConfig {
    pub url: String,
}

pub struct ServerConfig {
    pub port: u16,
}

pub fn load() -> Result<AppConfig> {
    let url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
        Err(_) => 3001,
    };

    Ok(AppConfig {
        database: DatabaseConfig { url },
        server: ServerConfig { port },
    })
}
