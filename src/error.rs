use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleKitError {
    #[error("Failed to read config file `{path}`: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid format of config file `{path}`: {source}")]
    InvalidConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}
