//! Load settings from the process environment (or any key lookup, for tests).

use crate::config::types::{AppConfig, DatabaseConfig, RunMode};
use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_POOL_MAX: u32 = 10;

impl RunMode {
    /// Mode for a `NODE_ENV` value. Anything other than development or test runs as production.
    pub fn from_node_env(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "development" => RunMode::Development,
            "test" => RunMode::Test,
            _ => RunMode::Production,
        }
    }
}

impl AppConfig {
    /// Read `PORT`, `NODE_ENV` and the `DB_*` variables. Call `dotenvy::dotenv()` first to honour `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup("NODE_ENV")
            .map(|v| RunMode::from_node_env(&v))
            .unwrap_or_default();
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let default_db = if mode.is_test() {
            "boilerplate_express_test"
        } else {
            "boilerplate_express"
        };

        Ok(AppConfig {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            mode,
            database: DatabaseConfig {
                host: text("DB_HOST", "localhost"),
                port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
                user: text("DB_USER", "express_user"),
                password: text("DB_PASSWORD", "express_password"),
                name: text("DB_NAME", default_db),
                max_connections: parse_or(&lookup, "DB_POOL_MAX", DEFAULT_POOL_MAX)?,
                seed: parse_flag(&lookup, "DB_SEED")?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw.clone() }),
    }
}

fn parse_flag<F>(lookup: &F, name: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => Ok(true),
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.eq_ignore_ascii_case("no") => Ok(false),
        Some(v) => Err(ConfigError::InvalidValue {
            name,
            value: v.to_string(),
        }),
    }
}
