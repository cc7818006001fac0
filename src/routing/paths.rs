//! Path builder / resolver: abstract (locale, route) identities to URLs.
//!
//! Pure functions over the locale registry and the segment table. All values
//! are computed on demand and never cached; path building works before any
//! page content has loaded.

use crate::routing::{get_segment, Locale, RouteKey};
use std::collections::HashMap;

/// Hreflang key for the fallback alternate advertised to search engines.
pub const X_DEFAULT: &str = "x-default";

/// Build the localized path for `route` in `locale`.
///
/// `/{locale}` when the segment is empty (home), else `/{locale}/{segment}`.
/// No trailing slash.
pub fn build_localized_path(locale: Locale, route: RouteKey) -> String {
    let segment = get_segment(locale, route);
    if segment.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), segment)
    }
}

/// Build the absolute URL for `route` in `locale`.
///
/// `site_url` is the configured site origin; a trailing slash is tolerated
/// and stripped.
pub fn build_absolute_url(site_url: &str, locale: Locale, route: RouteKey) -> String {
    format!(
        "{}{}",
        site_url.trim_end_matches('/'),
        build_localized_path(locale, route)
    )
}

/// Build the full set of hreflang alternates for `route`.
///
/// One entry per supported locale, keyed by locale code, plus an
/// [`X_DEFAULT`] entry equal to the default locale's URL. Used verbatim as
/// hreflang alternates in page metadata and the sitemap.
pub fn build_language_alternates(site_url: &str, route: RouteKey) -> HashMap<String, String> {
    let mut languages = HashMap::new();

    for locale in Locale::supported() {
        languages.insert(
            locale.code().to_string(),
            build_absolute_url(site_url, locale, route),
        );
    }

    languages.insert(
        X_DEFAULT.to_string(),
        build_absolute_url(site_url, Locale::default_locale(), route),
    );

    languages
}
