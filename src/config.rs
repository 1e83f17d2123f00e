use serde::Deserialize;
use std::fs::read_to_string;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "weatherform.toml";
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_PREDICTOR_URL: &str = "http://127.0.0.1:8000/predict";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}")]
    Decoding {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PredictorConfig {
    Http {
        #[serde(default = "default_predictor_url")]
        url: String,
    },
    Fake {
        #[serde(default)]
        failing: bool,
    },
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig::Http {
            url: default_predictor_url(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: SocketAddr,
    pub key_file_path: Option<String>,
    pub cert_file_path: Option<String>,
    #[serde(default = "default_assets_path")]
    pub assets_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: default_address(),
            key_file_path: None,
            cert_file_path: None,
            assets_path: default_assets_path(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
}

fn default_predictor_url() -> String {
    DEFAULT_PREDICTOR_URL.to_string()
}

fn default_address() -> SocketAddr {
    DEFAULT_ADDRESS
        .parse()
        .expect("Default address should always parse")
}

fn default_assets_path() -> String {
    "assets".to_string()
}

impl Config {
    pub fn from_toml(path: &str, contents: &str) -> Result<Config, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Decoding {
            path: path.to_string(),
            source,
        })
    }

    /// Reads `path`. A missing default config file is not an error, all
    /// settings then take their defaults.
    pub fn read(path: Option<&str>) -> Result<Config, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };
        if !required && !Path::new(path).exists() {
            log::debug!("No config file at {}, using defaults", path);
            return Ok(Config::default());
        }
        let contents = read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        log::info!("Read config from {}", path);
        Config::from_toml(path, &contents)
    }
}
