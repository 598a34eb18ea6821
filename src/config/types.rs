//! Runtime settings for the API process and its MySQL connection.

use sqlx::mysql::MySqlConnectOptions;

/// Deployment mode, from `NODE_ENV`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Development,
    Production,
    Test,
}

impl RunMode {
    pub fn is_test(self) -> bool {
        self == RunMode::Test
    }

    pub fn label(self) -> &'static str {
        match self {
            RunMode::Development => "DEVELOPMENT",
            RunMode::Production => "PRODUCTION",
            RunMode::Test => "TEST",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Upper bound on concurrent connections; further requests wait for a free one.
    pub max_connections: u32,
    /// Insert the demo catalog into an empty products table at startup.
    pub seed: bool,
}

impl DatabaseConfig {
    /// Options for the configured database.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        self.server_options().database(&self.name)
    }

    /// Options for the server alone, with no database selected.
    pub fn server_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub mode: RunMode,
    pub database: DatabaseConfig,
}
