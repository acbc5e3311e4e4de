use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::LocaleKitError,
    host::{ApiLevel, Configuration, UiContext},
    languages::SYSTEM_DEFAULT,
    locale::Locale,
    Result,
};

pub const CONFIG_FILE: &str = "localekit.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings of `localekit.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api_level: ApiLevel,
    // Locale of the initial context, none means the system locale.
    pub base_language: Option<String>,
    pub log_level: LogLevel,
}

impl Settings {
    /// Load settings from `path`, a missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config file at {}, use defaults", path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path).map_err(|source| LocaleKitError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        let settings = Self::parse(&content).map_err(|source| LocaleKitError::InvalidConfig {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("Loaded config file {}: {settings:?}", path.display());
        Ok(settings)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The context an application starts with before any language is applied.
    pub fn base_context(&self) -> UiContext {
        match self.base_language.as_deref() {
            None | Some(SYSTEM_DEFAULT) => UiContext::default(),
            Some(code) => UiContext::new(Configuration::with_locale(Locale::from_code(code))),
        }
    }
}
