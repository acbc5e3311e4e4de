/// The code that stands for "defer to the operating system locale".
pub const SYSTEM_DEFAULT: &str = "";

// Only languages that ship translated strings belong here.
// The order is the order shown in a language picker.
static SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    (SYSTEM_DEFAULT, "System Default"),
    ("da", "Dansk (Danish)"),
    ("en", "English"),
    ("pt-BR", "Português Brasileiro (Brazilian Portuguese)"),
    ("zh-TW", "正體中文"),
    ("zh-CN", "简体中文"),
];

/// One row of the supported language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

impl SupportedLanguage {
    pub fn is_system_default(&self) -> bool {
        self.code == SYSTEM_DEFAULT
    }
}

/// Iterate the supported languages in presentation order.
pub fn supported_languages() -> impl Iterator<Item = SupportedLanguage> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&(code, name)| SupportedLanguage { code, name })
}

/// Get the display name of `code`.
///
/// Unknown codes are echoed back unchanged.
pub fn language_display_name(code: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find_map(|&(key, name)| (key == code).then_some(name))
        .unwrap_or(code)
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|&(key, _)| key == code)
}

pub fn supported_language_codes() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|&(code, _)| code).collect()
}

pub fn supported_language_names() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|&(_, name)| name).collect()
}
