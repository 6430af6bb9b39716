//! Application settings.
//!
//! Read from `settings.toml` in the working directory, with `BINDERY_*`
//! environment variables as overrides (for example
//! `BINDERY_SERVER__PORT=8080`). Everything has a default except the signing
//! secret, which comes from `JWT_SECRET` and is checked at startup.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// In-memory SQLite; state is lost on exit.
    Memory,
    /// SQLite file at the given path, created on first run.
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.database", "memory")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("BINDERY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
