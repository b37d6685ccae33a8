// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use log::LevelFilter;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DATABASE_URL: &str = "DATABASE_URL";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "ratings.db".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        Ok(self.level.parse()?)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let parsed: Self = toml::from_str(&contents)?;
        Ok(parsed)
    }

    /// Like `load`, but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, Error> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `DATABASE_URL` from the process environment or a `.env` file
    pub fn with_env_overrides(self) -> Self {
        let vars: HashMap<String, String> = dotenv::vars().collect();
        self.apply_overrides(&vars)
    }

    pub fn apply_overrides(mut self, vars: &HashMap<String, String>) -> Self {
        if let Some(url) = vars.get(DATABASE_URL) {
            self.database.url = url.clone();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;
    use common_macros::hash_map;

    #[test]
    fn load_example_config() -> Result<(), Error> {
        let expected = Config {
            database: DatabaseConfig {
                url: "ratings.db".into(),
            },
            logging: LoggingConfig {
                level: "debug".into(),
            },
        };

        let loaded = Config::load("example.toml")?;
        assert_eq!(expected, loaded);
        assert_eq!(loaded.logging.level_filter()?, LevelFilter::Debug);

        Ok(())
    }

    #[test]
    fn missing_sections_use_defaults() -> Result<(), Error> {
        let parsed: Config = toml::from_str("[logging]\nlevel = \"warn\"\n")?;

        assert_eq!(parsed.database, DatabaseConfig::default());
        assert_eq!(parsed.logging.level, "warn");

        Ok(())
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<(), Error> {
        let loaded = Config::load_or_default("does-not-exist.toml")?;
        assert_eq!(loaded, Config::default());

        Ok(())
    }

    #[test]
    fn database_url_override() {
        let vars = hash_map! {
            DATABASE_URL.to_string() => ":memory:".to_string(),
        };

        let config = Config::default().apply_overrides(&vars);
        assert_eq!(config.database.url, ":memory:");
    }

    #[test]
    fn invalid_level_is_an_error() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };

        assert!(logging.level_filter().is_err());
    }
}
