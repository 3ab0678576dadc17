use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKSTORE_ENV";
const CONFIG_DIR_ENV: &str = "BOOKSTORE_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub accounts: AccountSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Default to the `config` directory under the working directory.
                std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .unwrap_or_else(|_| PathBuf::from("config"))
            });

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from an explicit directory and environment name.
    pub fn load_from(config_dir: &std::path::Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_environment = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix("BOOKSTORE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = parsed_environment;

        Ok(settings)
    }
}

/// Books listed in the catalog at startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogSettings {
    #[serde(default)]
    pub books: Vec<BookSeed>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BookSeed {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
}

/// Accounts registered at startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AccountSettings {
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserSeed {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub balance: f64,
    /// Titles of listed books already owned by the account
    #[serde(default)]
    pub purchased: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "TelemetrySettings::default_level")]
    pub level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_seeds_are_empty() {
        let settings = Settings::default();
        assert!(settings.catalog.books.is_empty());
        assert!(settings.accounts.users.is_empty());
        assert_eq!(settings.telemetry.level, "info");
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Environment::parse("qa").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'qa'"));
    }

    #[test]
    fn missing_config_dir_yields_defaults() {
        let dir = std::env::temp_dir().join("bookstore-kernel-missing-config");
        let settings = Settings::load_from(&dir, "staging").unwrap();
        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
    }

    #[test]
    fn seeds_deserialize_from_toml() {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [[catalog.books]]
                title = "Dune"
                author = "Frank Herbert"
                genre = "Science Fiction"
                price = 9.99

                [[accounts.users]]
                username = "jane_doe"
                password = "password456"
                email = "jane@example.com"
                purchased = ["Dune"]
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let settings: Settings = cfg.try_deserialize().unwrap();
        assert_eq!(settings.catalog.books.len(), 1);
        assert_eq!(settings.catalog.books[0].title, "Dune");
        assert_eq!(settings.accounts.users[0].balance, 0.0);
        assert_eq!(settings.accounts.users[0].purchased, vec!["Dune"]);
    }
}
