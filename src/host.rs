//! Host platform primitives: configurations, contexts, the process default
//! locale and the per-API-level ways of applying a configuration.

use std::{fmt, sync::Arc};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::locale::{LayoutDirection, Locale};

/// The locale-related part of a UI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    locale: Option<Locale>,
    layout_direction: LayoutDirection,
}

impl Configuration {
    pub fn with_locale(locale: Locale) -> Self {
        let mut config = Configuration::default();
        config.set_locale(locale);
        config
    }

    /// Set the locale, the layout direction follows it.
    pub fn set_locale(&mut self, locale: Locale) {
        self.layout_direction = locale.layout_direction();
        self.locale = Some(locale);
    }

    /// `None` means the configuration defers to the system locale.
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }
}

/// Resources shared by every handle of a [`UiContext`].
#[derive(Debug, Default)]
pub struct Resources {
    configuration: RwLock<Configuration>,
}

impl Resources {
    pub fn new(configuration: Configuration) -> Self {
        Resources {
            configuration: RwLock::new(configuration),
        }
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration.read().clone()
    }

    /// Overwrite the configuration in place.
    ///
    /// Every context sharing these resources observes the change.
    pub fn update_configuration(&self, configuration: Configuration) {
        *self.configuration.write() = configuration;
    }
}

/// A handle to a UI context.
///
/// Cloning the handle is cheap and shares the underlying [`Resources`].
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    resources: Arc<Resources>,
}

impl UiContext {
    pub fn new(configuration: Configuration) -> Self {
        UiContext {
            resources: Arc::new(Resources::new(configuration)),
        }
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn configuration(&self) -> Configuration {
        self.resources.configuration()
    }

    pub fn locale(&self) -> Option<Locale> {
        self.configuration().locale().cloned()
    }

    /// Create a new context with its own resources holding `configuration`.
    pub fn create_configuration_context(&self, configuration: Configuration) -> UiContext {
        UiContext::new(configuration)
    }

    /// Whether both handles point at the same context.
    pub fn ptr_eq(&self, other: &UiContext) -> bool {
        Arc::ptr_eq(&self.resources, &other.resources)
    }
}

/// The process-wide default locale service.
pub trait DefaultLocale {
    fn default_locale(&self) -> Option<Locale>;

    fn set_default_locale(&self, locale: Locale);
}

static PROCESS_LOCALE: Lazy<RwLock<Option<Locale>>> =
    Lazy::new(|| RwLock::new(system_locale(sys_locale::get_locale())));

// `C` and `POSIX` name no language at all.
fn system_locale(tag: Option<String>) -> Option<Locale> {
    tag.filter(|tag| tag != "C" && tag != "POSIX")
        .map(|tag| Locale::from_code(&tag))
}

/// The real process default locale.
///
/// It starts out as the operating system locale, if one can be detected.
/// Writes are visible to the whole process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLocale;

impl DefaultLocale for ProcessLocale {
    fn default_locale(&self) -> Option<Locale> {
        PROCESS_LOCALE.read().clone()
    }

    fn set_default_locale(&self, locale: Locale) {
        *PROCESS_LOCALE.write() = Some(locale);
    }
}

/// The API level of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// The first level able to derive a context from a configuration.
    pub const N: ApiLevel = ApiLevel(24);
    pub const LATEST: ApiLevel = ApiLevel(34);

    pub fn supports_configuration_context(self) -> bool {
        self >= ApiLevel::N
    }
}

impl Default for ApiLevel {
    fn default() -> Self {
        ApiLevel::LATEST
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The host capability used to put a configuration into effect.
pub trait ConfigurationHost: fmt::Debug + Send + Sync {
    fn apply_configuration(&self, context: &UiContext, configuration: Configuration) -> UiContext;
}

/// Derives a fresh context and leaves the original alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedContextHost;

impl ConfigurationHost for DerivedContextHost {
    fn apply_configuration(&self, context: &UiContext, configuration: Configuration) -> UiContext {
        context.create_configuration_context(configuration)
    }
}

/// Mutates the shared resources, for hosts that cannot derive contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct InPlaceHost;

impl ConfigurationHost for InPlaceHost {
    fn apply_configuration(&self, context: &UiContext, configuration: Configuration) -> UiContext {
        context.resources().update_configuration(configuration);
        context.clone()
    }
}

pub fn host_for_api_level(level: ApiLevel) -> Box<dyn ConfigurationHost> {
    if level.supports_configuration_context() {
        Box::new(DerivedContextHost)
    } else {
        Box::new(InPlaceHost)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_set_locale_updates_layout_direction() {
        let mut config = Configuration::with_locale(Locale::new("ar"));
        assert_eq!(LayoutDirection::Rtl, config.layout_direction());

        config.set_locale(Locale::new("en"));
        assert_eq!(LayoutDirection::Ltr, config.layout_direction());
        assert_eq!(Some(&Locale::new("en")), config.locale());
    }

    #[test]
    fn test_clones_share_resources() {
        let context = UiContext::default();
        let handle = context.clone();
        assert!(context.ptr_eq(&handle));

        handle
            .resources()
            .update_configuration(Configuration::with_locale(Locale::new("da")));
        assert_eq!(Some(Locale::new("da")), context.locale());
    }

    #[test]
    fn test_derived_host_leaves_original_untouched() {
        let context = UiContext::new(Configuration::with_locale(Locale::new("en")));
        let derived = DerivedContextHost.apply_configuration(
            &context,
            Configuration::with_locale(Locale::with_region("zh", "TW")),
        );

        assert!(!derived.ptr_eq(&context));
        assert_eq!(Some(Locale::new("en")), context.locale());
        assert_eq!(Some(Locale::with_region("zh", "TW")), derived.locale());
    }

    #[test]
    fn test_in_place_host_mutates_original() {
        let context = UiContext::new(Configuration::with_locale(Locale::new("en")));
        let updated = InPlaceHost
            .apply_configuration(&context, Configuration::with_locale(Locale::new("da")));

        assert!(updated.ptr_eq(&context));
        assert_eq!(Some(Locale::new("da")), context.locale());
    }

    #[test_case(Some("C"), None; "c locale")]
    #[test_case(Some("POSIX"), None; "posix locale")]
    #[test_case(None, None; "undetected")]
    #[test_case(Some("en-US"), Some("en-US"); "detected")]
    fn test_system_locale(tag: Option<&str>, locale: Option<&str>) {
        assert_eq!(
            locale.map(Locale::from_code),
            system_locale(tag.map(str::to_owned))
        );
    }

    #[test_case(14, false)]
    #[test_case(23, false)]
    #[test_case(24, true)]
    #[test_case(34, true)]
    fn test_host_selection(level: u32, derives: bool) {
        let context = UiContext::default();
        let result = host_for_api_level(ApiLevel(level))
            .apply_configuration(&context, Configuration::with_locale(Locale::new("en")));
        assert_eq!(derives, !result.ptr_eq(&context));
    }
}
