//! Locale-switch translator: move an already-rendered path to another locale.
//!
//! Given the path the user is currently viewing and a target locale, compute
//! the equivalent path in the target locale, preserving which logical page
//! the path represents and any trailing sub-path (e.g. an article slug after
//! the localized `articles` segment).

use crate::routing::{build_localized_path, resolve_route_key, Locale, RouteKey};

/// Translate `path` into the equivalent path under `target`.
///
/// The first path segment is inspected as the current locale; the second is
/// reverse-resolved to a route (falling back to `Home` when absent or
/// unrecognized). Anything after the route segment is carried over
/// unmodified — sub-path segments such as article slugs are not translated,
/// so switching locale on a deep article page keeps the other locale's slug.
/// That is a known limitation of the site, preserved on purpose.
///
/// If the first segment is not a supported locale, no route parsing is
/// attempted: the entire original path is kept as an opaque suffix under the
/// target locale (`/xx/something` → `/{target}/xx/something`).
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let Some((first, rest)) = segments.split_first() else {
        // Bare root: home in the target locale.
        return build_localized_path(target, RouteKey::Home);
    };

    let Ok(current) = Locale::from_code(first) else {
        return format!("/{}/{}", target.code(), segments.join("/"));
    };

    let (route_segment, remaining): (&str, &[&str]) = match rest.split_first() {
        Some((segment, remaining)) => (segment, remaining),
        None => ("", &[]),
    };

    let route = resolve_route_key(current, route_segment).unwrap_or(RouteKey::Home);
    let target_path = build_localized_path(target, route);

    if remaining.is_empty() {
        target_path
    } else {
        format!("{}/{}", target_path, remaining.join("/"))
    }
}
