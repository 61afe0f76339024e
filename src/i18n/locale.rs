//! Locale type: a code validated against the registry.

use std::fmt;
use std::sync::Arc;

/// A supported, enabled locale.
///
/// Only [`LocaleRegistry`](crate::i18n::LocaleRegistry) hands these out, so
/// holding a `Locale` means the code was enabled when it was resolved.
/// Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    code: Arc<str>,
}

impl Locale {
    pub(crate) fn new(code: &str) -> Self {
        Self { code: Arc::from(code) }
    }

    /// The URL segment for this locale (e.g., "sl").
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        &*self.code == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        &*self.code == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_and_display() {
        let locale = Locale::new("sl");
        assert_eq!(locale.code(), "sl");
        assert_eq!(locale.to_string(), "sl");
    }

    #[test]
    fn test_compares_with_str() {
        let locale = Locale::new("en");
        assert_eq!(locale, "en");
        assert_ne!(locale, "sl");
    }

    #[test]
    fn test_clone_is_equal() {
        let locale = Locale::new("en");
        assert_eq!(locale.clone(), locale);
    }
}
