use crate::{
    host::{
        host_for_api_level, ApiLevel, ConfigurationHost, DefaultLocale, DerivedContextHost,
        ProcessLocale, UiContext,
    },
    languages::SYSTEM_DEFAULT,
    locale::Locale,
};

/// Applies a language code to UI contexts.
#[derive(Debug)]
pub struct LocaleApplier<L: DefaultLocale = ProcessLocale> {
    default_locale: L,
    host: Box<dyn ConfigurationHost>,
}

impl LocaleApplier<ProcessLocale> {
    /// An applier for the real process locale on a host of `level`.
    pub fn for_api_level(level: ApiLevel) -> Self {
        LocaleApplier::new(ProcessLocale, host_for_api_level(level))
    }
}

impl<L: DefaultLocale> LocaleApplier<L> {
    pub fn new(default_locale: L, host: Box<dyn ConfigurationHost>) -> Self {
        LocaleApplier {
            default_locale,
            host,
        }
    }

    pub fn default_locale(&self) -> &L {
        &self.default_locale
    }

    /// Apply `code` to `context`.
    ///
    /// The system default code returns `context` itself. Any other code
    /// becomes the process default locale and the context configuration
    /// locale.
    pub fn apply_language(&self, context: &UiContext, code: &str) -> UiContext {
        if code == SYSTEM_DEFAULT {
            log::debug!("Keep the system locale");
            return context.clone();
        }

        let locale = Locale::from_code(code);
        log::debug!("Apply locale {locale} for language code {code:?}");
        self.default_locale.set_default_locale(locale.clone());

        let mut configuration = context.configuration();
        configuration.set_locale(locale);
        self.host.apply_configuration(context, configuration)
    }
}

/// Apply `code` to `context` with the process default locale and a host
/// that derives a new context.
pub fn apply_language(context: &UiContext, code: &str) -> UiContext {
    LocaleApplier::new(ProcessLocale, Box::new(DerivedContextHost)).apply_language(context, code)
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use test_case::test_case;

    use super::*;
    use crate::{
        host::{Configuration, InPlaceHost},
        locale::LayoutDirection,
    };

    #[derive(Debug, Default)]
    struct FakeLocale {
        current: Mutex<Option<Locale>>,
        writes: Mutex<usize>,
    }

    impl DefaultLocale for FakeLocale {
        fn default_locale(&self) -> Option<Locale> {
            self.current.lock().clone()
        }

        fn set_default_locale(&self, locale: Locale) {
            *self.current.lock() = Some(locale);
            *self.writes.lock() += 1;
        }
    }

    fn derived_applier() -> LocaleApplier<FakeLocale> {
        LocaleApplier::new(FakeLocale::default(), Box::new(DerivedContextHost))
    }

    fn context_in(code: &str) -> UiContext {
        UiContext::new(Configuration::with_locale(Locale::from_code(code)))
    }

    #[test]
    fn test_system_default_returns_same_context() {
        let applier = derived_applier();
        let context = context_in("da");

        let result = applier.apply_language(&context, "");
        assert!(result.ptr_eq(&context));
        assert_eq!(Some(Locale::new("da")), result.locale());
        assert_eq!(None, applier.default_locale().default_locale());
        assert_eq!(0, *applier.default_locale().writes.lock());
    }

    #[test_case("pt-BR", "pt", Some("BR"))]
    #[test_case("en", "en", None)]
    #[test_case("zh-TW", "zh", Some("TW"))]
    #[test_case("sr-Latn-RS", "sr", None)]
    fn test_apply_resolves_locale(code: &str, language: &str, region: Option<&str>) {
        let applier = derived_applier();
        let context = UiContext::default();

        let locale = applier
            .apply_language(&context, code)
            .locale()
            .expect("locale is set");
        assert_eq!(language, locale.language());
        assert_eq!(region, locale.region());
        assert_eq!(Some(locale), applier.default_locale().default_locale());
    }

    #[test]
    fn test_derived_host_keeps_original() {
        let applier = derived_applier();
        let context = context_in("en");

        let result = applier.apply_language(&context, "zh-CN");
        assert!(!result.ptr_eq(&context));
        assert_eq!(Some(Locale::new("en")), context.locale());
        assert_eq!(Some(Locale::with_region("zh", "CN")), result.locale());
    }

    #[test]
    fn test_in_place_host_updates_original() {
        let applier = LocaleApplier::new(FakeLocale::default(), Box::new(InPlaceHost));
        let context = context_in("en");

        let result = applier.apply_language(&context, "da");
        assert!(result.ptr_eq(&context));
        assert_eq!(Some(Locale::new("da")), context.locale());
    }

    #[test]
    fn test_layout_direction_follows_applied_locale() {
        let applier = derived_applier();
        let result = applier.apply_language(&context_in("en"), "ar");
        assert_eq!(LayoutDirection::Rtl, result.configuration().layout_direction());
    }

    #[test]
    fn test_unknown_code_is_still_applied() {
        let applier = derived_applier();
        let result = applier.apply_language(&UiContext::default(), "fr");
        assert_eq!(Some(Locale::new("fr")), result.locale());
    }

    #[test]
    fn test_apply_language_sets_process_locale() {
        let context = UiContext::default();
        let result = apply_language(&context, "pt-BR");

        assert!(!result.ptr_eq(&context));
        assert_eq!(Some(Locale::with_region("pt", "BR")), result.locale());
        assert_eq!(
            Some(Locale::with_region("pt", "BR")),
            ProcessLocale.default_locale()
        );

        assert!(apply_language(&context, "").ptr_eq(&context));
        assert_eq!(
            Some(Locale::with_region("pt", "BR")),
            ProcessLocale.default_locale()
        );
    }
}
