mod applier;
mod config;
mod error;
mod host;
mod languages;
mod locale;

pub use applier::{apply_language, LocaleApplier};
pub use config::{LogLevel, Settings, CONFIG_FILE};
pub use error::LocaleKitError;
pub use host::{
    host_for_api_level, ApiLevel, Configuration, ConfigurationHost, DefaultLocale,
    DerivedContextHost, InPlaceHost, ProcessLocale, Resources, UiContext,
};
pub use languages::{
    is_supported, language_display_name, supported_language_codes, supported_language_names,
    supported_languages, SupportedLanguage, SYSTEM_DEFAULT,
};
pub use locale::{LayoutDirection, Locale};

pub type Result<T> = std::result::Result<T, LocaleKitError>;
