//! Configuration management for the yarukoto service.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing file or section
//! means defaults. On top of the file, environment variables (optionally
//! loaded from a `.env` file) override individual values, and command-line
//! flags of `serve` override both.
//!
//! ## Configuration Structure
//!
//! - **Server**: Listen address and port
//! - **Storage**: Backend selection (`memory` or `sqlite`) and database path
//! - **Sample data**: Whether an empty store is seeded with demo tasks
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `YARUKOTO_HOST` | `server.host` |
//! | `YARUKOTO_PORT` | `server.port` |
//! | `YARUKOTO_STORAGE` | `storage.backend` |
//! | `YARUKOTO_DB_PATH` | `storage.path` |
//! | `YARUKOTO_SEED` | `seed_sample_tasks` |
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use yarukoto::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.apply_env_overrides()?;
//! let server = config.server_or_default();
//! println!("listening on {}:{}", server.host, server.port);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

pub const ENV_HOST: &str = "YARUKOTO_HOST";
pub const ENV_PORT: &str = "YARUKOTO_PORT";
pub const ENV_STORAGE: &str = "YARUKOTO_STORAGE";
pub const ENV_DB_PATH: &str = "YARUKOTO_DB_PATH";
pub const ENV_SEED: &str = "YARUKOTO_SEED";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-wide map, lost on exit.
    #[default]
    Memory,
    /// SQLite database file.
    Sqlite,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(other.to_string()),
        }
    }
}

/// Task storage settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// SQLite database file. Defaults to `yarukoto.db` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_sample_tasks: Option<bool>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads the configuration from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_in(&DataStorage::new())
    }

    pub fn read_in(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads a configuration file, returning defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_in(&DataStorage::new())
    }

    pub fn save_in(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn server_or_default(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn storage_or_default(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn seed_sample_tasks(&self) -> bool {
        self.seed_sample_tasks.unwrap_or(true)
    }

    /// SQLite file to use: the configured path, or `yarukoto.db` in `storage`.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        match self.storage.as_ref().and_then(|s| s.path.clone()) {
            Some(path) => Ok(path),
            None => Ok(storage.get_path(DB_FILE_NAME)?),
        }
    }

    /// Applies `YARUKOTO_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| env::var(name).ok())
    }

    /// Applies overrides looked up by variable name.
    ///
    /// Unparsable values are rejected rather than silently ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.get_or_insert_with(ServerConfig::default).host = host;
        }

        if let Some(raw) = lookup(ENV_PORT) {
            let port = raw
                .parse::<u16>()
                .map_err(|_| msg_error_anyhow!(Message::ConfigEnvOverrideInvalid(ENV_PORT.to_string(), raw.clone())))?;
            self.server.get_or_insert_with(ServerConfig::default).port = port;
        }

        if let Some(raw) = lookup(ENV_STORAGE) {
            let backend = raw
                .parse::<StorageBackend>()
                .map_err(|_| msg_error_anyhow!(Message::ConfigEnvOverrideInvalid(ENV_STORAGE.to_string(), raw.clone())))?;
            self.storage.get_or_insert_with(StorageConfig::default).backend = backend;
        }

        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.get_or_insert_with(StorageConfig::default).path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_SEED) {
            let seed = match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(msg_error_anyhow!(Message::ConfigEnvOverrideInvalid(ENV_SEED.to_string(), raw))),
            };
            self.seed_sample_tasks = Some(seed);
        }

        Ok(())
    }

    /// Runs the interactive setup wizard, starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "seed".to_string(),
                name: Message::ConfigModuleSampleData.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        host: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerHost.to_string())
                            .default(default.host)
                            .interact_text()?,
                        port: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerPort.to_string())
                            .default(default.port)
                            .interact_text()?,
                    });
                }
                "storage" => {
                    let default = config.storage_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    let backends = [StorageBackend::Memory, StorageBackend::Sqlite];
                    let backend_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStorageBackend.to_string())
                        .items(&backends)
                        .default(backends.iter().position(|b| *b == default.backend).unwrap_or(0))
                        .interact()?;
                    let backend = backends[backend_index];

                    let path = if backend == StorageBackend::Sqlite {
                        let raw: String = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDatabasePath.to_string())
                            .default(default.path.map(|p| p.display().to_string()).unwrap_or_default())
                            .allow_empty(true)
                            .interact_text()?;
                        if raw.trim().is_empty() {
                            None
                        } else {
                            Some(PathBuf::from(raw.trim()))
                        }
                    } else {
                        None
                    };

                    config.storage = Some(StorageConfig { backend, path });
                }
                "seed" => {
                    config.seed_sample_tasks = Some(
                        Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSeedSampleTasks.to_string())
                            .default(config.seed_sample_tasks())
                            .interact()?,
                    );
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
