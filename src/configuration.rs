use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

use crate::services::Iterations;

pub const DEFAULT_SOURCE_URL: &str = "https://rowermevo.pl/locations.js";
pub const DEFAULT_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "extracted";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub poller: PollerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollerSettings {
    pub source_url: Url,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub interval_secs: u64,
    /// Number of poll cycles to run, `0` runs forever.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub iterations: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub output_dir: PathBuf,
}

impl PollerSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn iterations(&self) -> Iterations {
        match self.iterations {
            0 => Iterations::Unbounded,
            n => Iterations::Bounded(n),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            poller: PollerSettings {
                // Literal is a valid absolute URL
                source_url: Url::parse(DEFAULT_SOURCE_URL).expect("default source url"),
                interval_secs: DEFAULT_INTERVAL_SECS,
                iterations: 0,
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            storage: StorageSettings {
                output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            },
        }
    }
}

/// Layers built-in defaults, `configuration/base.yaml` (if present) and
/// `APP_`-prefixed environment variables, e.g. `APP_POLLER__ITERATIONS=20`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    config::Config::builder()
        .set_default("poller.source_url", DEFAULT_SOURCE_URL)?
        .set_default("poller.interval_secs", DEFAULT_INTERVAL_SECS as i64)?
        .set_default("poller.iterations", 0_i64)?
        .set_default("poller.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
        .set_default("storage.output_dir", DEFAULT_OUTPUT_DIR)?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()
}
