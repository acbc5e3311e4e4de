use std::fmt;

// Languages written right-to-left. `iw` is the legacy code for Hebrew.
static RTL_LANGUAGES: &[&str] = &["ar", "dv", "fa", "he", "iw", "ps", "sd", "ug", "ur", "yi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDirection::Ltr => f.write_str("ltr"),
            LayoutDirection::Rtl => f.write_str("rtl"),
        }
    }
}

/// A language with an optional region, such as `en` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            region: None,
        }
    }

    /// An empty `region` means no region at all.
    pub fn with_region(language: &str, region: &str) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            region: (!region.is_empty()).then(|| region.to_ascii_uppercase()),
        }
    }

    /// Convert a language code to a [`Locale`].
    ///
    /// `pt-BR` splits into language and region. A code with more than one
    /// hyphen, such as `sr-Latn-RS`, keeps only its first part.
    pub fn from_code(code: &str) -> Self {
        let parts = code.split('-').collect::<Vec<_>>();
        match parts.as_slice() {
            [language, region] => Locale::with_region(language, region),
            [language, ..] => Locale::new(language),
            // `split` always yields at least one item.
            [] => Locale::new(code),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        if RTL_LANGUAGES.contains(&self.language.as_str()) {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}
