//! Route segment table: per-locale mapping of page identities to URL slugs.
//!
//! A `RouteKey` identifies *what page* a URL refers to, independently of any
//! locale. The segment table is the single source of truth for the slug that
//! represents each page in each locale; both path building and reverse
//! resolution go through it. The table is static configuration, validated
//! once at startup by `validate_segment_table` — the process refuses to
//! start on an incomplete or ambiguous table.

use crate::routing::{Locale, LocaleRegistry};
use thiserror::Error;

/// An abstract, locale-independent identifier for a logical page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Home,
    Transportation,
    Services,
    Calculate,
    Articles,
    About,
    Contact,
}

impl RouteKey {
    /// Every route, in table-declaration order.
    pub const ALL: [RouteKey; 7] = [
        RouteKey::Home,
        RouteKey::Transportation,
        RouteKey::Services,
        RouteKey::Calculate,
        RouteKey::Articles,
        RouteKey::About,
        RouteKey::Contact,
    ];

    /// Stable lowercase name, used in logs and the sitemap.
    pub fn name(self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::Transportation => "transportation",
            RouteKey::Services => "services",
            RouteKey::Calculate => "calculate",
            RouteKey::Articles => "articles",
            RouteKey::About => "about",
            RouteKey::Contact => "contact",
        }
    }
}

// ==================== Segment Table ====================

// The home segment is empty in every locale: home is served at `/{locale}`
// with no trailing slug. All other segments must be non-empty and unique
// within their locale. Segments are not required to be unique across
// locales ("articles" is both the English and the legacy unprefixed slug).

const HEBREW_SEGMENTS: &[(RouteKey, &str)] = &[
    (RouteKey::Home, ""),
    (RouteKey::Transportation, "הובלות"),
    (RouteKey::Services, "שירותים"),
    (RouteKey::Calculate, "חישוב-עלות"),
    (RouteKey::Articles, "מאמרים"),
    (RouteKey::About, "אודות"),
    (RouteKey::Contact, "צור-קשר"),
];

const RUSSIAN_SEGMENTS: &[(RouteKey, &str)] = &[
    (RouteKey::Home, ""),
    (RouteKey::Transportation, "perevozki"),
    (RouteKey::Services, "uslugi"),
    (RouteKey::Calculate, "raschet-stoimosti"),
    (RouteKey::Articles, "stati"),
    (RouteKey::About, "o-kompanii"),
    (RouteKey::Contact, "kontakty"),
];

const ENGLISH_SEGMENTS: &[(RouteKey, &str)] = &[
    (RouteKey::Home, ""),
    (RouteKey::Transportation, "transportation"),
    (RouteKey::Services, "services"),
    (RouteKey::Calculate, "calculate"),
    (RouteKey::Articles, "articles"),
    (RouteKey::About, "about"),
    (RouteKey::Contact, "contact"),
];

/// The per-locale segment entries, or `None` for a locale the table does not
/// cover. `validate_segment_table` reports the latter as a fatal error.
fn segment_entries(code: &str) -> Option<&'static [(RouteKey, &'static str)]> {
    match code {
        "he" => Some(HEBREW_SEGMENTS),
        "ru" => Some(RUSSIAN_SEGMENTS),
        "en" => Some(ENGLISH_SEGMENTS),
        _ => None,
    }
}

/// Get the URL segment representing `route` in `locale`.
///
/// Total over the validated domain: every (locale, route) pair has an entry
/// once `validate_segment_table` has passed at startup.
///
/// # Panics
/// Panics if the table has no entry for the pair. This should never happen
/// for a table the startup validation accepted.
pub fn get_segment(locale: Locale, route: RouteKey) -> &'static str {
    segment_entries(locale.code())
        .and_then(|entries| entries.iter().find(|(key, _)| *key == route))
        .map(|(_, segment)| *segment)
        .expect("segment table entry should exist for every validated (locale, route) pair")
}

/// Reverse lookup: find the route whose segment equals `segment` in `locale`.
///
/// Returns `None` when no route matches — an expected outcome for
/// unrecognized slugs, not an error. Callers apply their own fallback
/// (observed policy: fall back to `Home`).
pub fn resolve_route_key(locale: Locale, segment: &str) -> Option<RouteKey> {
    resolve_in(segment_entries(locale.code())?, segment)
}

/// Scan `entries` for the first route whose segment equals `segment`.
///
/// Segments are unique per locale (validated at startup), so resolution is
/// deterministic. If that invariant were ever violated, the first match in
/// table-declaration order wins — a silent-failure edge the tests pin down
/// explicitly.
fn resolve_in(entries: &[(RouteKey, &str)], segment: &str) -> Option<RouteKey> {
    entries
        .iter()
        .find(|(_, candidate)| *candidate == segment)
        .map(|(key, _)| *key)
}

// ==================== Startup Validation ====================

/// A defect in the static segment table.
///
/// Any of these is a configuration error: the process must fail fast at
/// startup rather than serve malformed or ambiguous URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("locale '{locale}' has no segment table")]
    MissingLocale { locale: &'static str },

    #[error("locale '{locale}' is missing a segment for route '{route}'")]
    MissingRoute {
        locale: &'static str,
        route: &'static str,
    },

    #[error("locale '{locale}' declares route '{route}' more than once")]
    DuplicateRoute {
        locale: &'static str,
        route: &'static str,
    },

    #[error(
        "locale '{locale}' maps routes '{first}' and '{second}' to the same segment '{segment}'"
    )]
    DuplicateSegment {
        locale: &'static str,
        first: &'static str,
        second: &'static str,
        segment: String,
    },

    #[error("locale '{locale}' has an empty segment for non-home route '{route}'")]
    EmptySegment {
        locale: &'static str,
        route: &'static str,
    },
}

/// Validate the segment table against the locale registry.
///
/// Checks, for every supported locale: the locale has a table, every route
/// appears exactly once, only `Home` has an empty segment, and no two routes
/// share a segment. Returns every violation found so a broken table is
/// reported in full.
pub fn validate_segment_table() -> Result<(), Vec<TableError>> {
    let mut errors = Vec::new();

    for config in LocaleRegistry::get().supported() {
        let locale = config.code;
        let Some(entries) = segment_entries(locale) else {
            errors.push(TableError::MissingLocale { locale });
            continue;
        };

        for route in RouteKey::ALL {
            match entries.iter().filter(|(key, _)| *key == route).count() {
                0 => errors.push(TableError::MissingRoute {
                    locale,
                    route: route.name(),
                }),
                1 => {}
                _ => errors.push(TableError::DuplicateRoute {
                    locale,
                    route: route.name(),
                }),
            }
        }

        for (i, (route, segment)) in entries.iter().enumerate() {
            if segment.is_empty() && *route != RouteKey::Home {
                errors.push(TableError::EmptySegment {
                    locale,
                    route: route.name(),
                });
            }

            for (other, other_segment) in &entries[i + 1..] {
                if route != other && segment == other_segment {
                    errors.push(TableError::DuplicateSegment {
                        locale,
                        first: route.name(),
                        second: other.name(),
                        segment: segment.to_string(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
