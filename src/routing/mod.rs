//! Locale-aware routing and URL localization.
//!
//! This module owns the mapping between abstract route identities (what
//! page) and locale-specific URL paths (what URL), and everything derived
//! from it. All operations are pure, synchronous computations over immutable
//! configuration data; requests never mutate shared state.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale that validates against the registry
//! - `routes`: RouteKey and the per-locale route segment table, validated at startup
//! - `paths`: Localized paths, absolute URLs and hreflang alternates
//! - `switcher`: Translate an arbitrary path from one locale to another
//!
//! # Example
//!
//! ```rust,ignore
//! use pereezd_site::routing::{build_localized_path, Locale, RouteKey};
//!
//! let locale = Locale::from_code("ru")?;
//! assert_eq!(build_localized_path(locale, RouteKey::Services), "/ru/uslugi");
//! ```

mod locale;
mod paths;
mod registry;
mod routes;
mod switcher;

pub use locale::Locale;
pub use paths::{build_absolute_url, build_language_alternates, build_localized_path, X_DEFAULT};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use routes::{get_segment, resolve_route_key, validate_segment_table, RouteKey, TableError};
pub use switcher::switch_locale_path;
