//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the site is
//! served in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access. The registry is static
//! configuration: it is built once at first access and never mutated.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains the metadata for a specific locale, including its code, display
/// names, text direction and whether it is the site's default locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "he", "ru", "en")
    pub code: &'static str,

    /// English name of the locale (e.g., "Hebrew", "Russian")
    pub name: &'static str,

    /// Native name of the locale (e.g., "עברית", "Русский")
    pub native_name: &'static str,

    /// Whether the locale is written right-to-left
    pub rtl: bool,

    /// Whether this is the default locale, served without a URL prefix
    /// (exactly one locale must have this set)
    pub is_default: bool,
}

/// Global locale registry singleton.
///
/// The registry lists the supported locales in a fixed order. Order matters:
/// `Accept-Language` negotiation and hreflang alternates iterate the locales
/// in registry-declaration order.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in registry-declaration order.
    pub fn supported(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is served without a URL prefix; a prefixed URL for
    /// it redirects to the unprefixed form.
    ///
    /// # Panics
    /// Panics if no default locale is declared or if more than one is
    /// (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale declared in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales declared in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default locale configurations.
///
/// Hebrew is the default locale and comes first; the remaining order decides
/// `Accept-Language` negotiation priority.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            rtl: true,
            is_default: true,
        },
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            rtl: false,
            is_default: false,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            rtl: false,
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_hebrew() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("he");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "he");
        assert_eq!(config.name, "Hebrew");
        assert_eq!(config.native_name, "עברית");
        assert!(config.rtl);
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_russian() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("ru");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "ru");
        assert!(!config.rtl);
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_unsupported() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_supported_order_is_fixed() {
        let registry = LocaleRegistry::get();
        let codes: Vec<_> = registry.supported().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["he", "ru", "en"]);
    }

    #[test]
    fn test_default_locale_is_hebrew() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert_eq!(default.code, "he");
        assert!(default.is_default);
    }

    #[test]
    fn test_exactly_one_default() {
        let registry = LocaleRegistry::get();
        let defaults = registry
            .supported()
            .iter()
            .filter(|l| l.is_default)
            .count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn test_is_supported() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_supported("he"));
        assert!(registry.is_supported("ru"));
        assert!(registry.is_supported("en"));
        assert!(!registry.is_supported("fr"));
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn test_locale_config_clone() {
        let config = LocaleConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            rtl: true,
            is_default: true,
        };

        let cloned = config.clone();
        assert_eq!(config.code, cloned.code);
        assert_eq!(config.rtl, cloned.rtl);
    }
}
