//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a lightweight handle that can only
//! be constructed by validating a code against the registry. A raw string
//! claiming to be a locale is a plain string until it passes `from_code`.

use crate::routing::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A validated locale.
///
/// This type represents a locale that has been validated against the
/// registry. It ensures that only supported locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "he", "ru", "en")
    code: &'static str,
}

impl Locale {
    /// Hebrew, the site's default locale.
    pub const HEBREW: Locale = Locale { code: "he" };

    /// Russian.
    pub const RUSSIAN: Locale = Locale { code: "ru" };

    /// English.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "he", "ru")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported
    /// * `Err` if the code is not in the registry
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unsupported locale code: '{}'", code),
        }
    }

    /// Get the default locale.
    ///
    /// The default locale is served without a URL prefix and backs the
    /// `x-default` hreflang alternate.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// All supported locales, in registry-declaration order.
    pub fn supported() -> Vec<Locale> {
        LocaleRegistry::get()
            .supported()
            .iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the native name of the locale (e.g., "עברית", "Русский").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether the locale is written right-to-left.
    pub fn rtl(&self) -> bool {
        self.config().rtl
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
