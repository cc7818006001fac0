//! Inbound request middleware: enforce canonical locale-prefixed URLs.
//!
//! Runs on every request before routing. Stateless per request; the rules
//! are evaluated in strict order and the first matching rule wins:
//!
//! 1. Static assets and non-page endpoints bypass localization entirely.
//! 2. `If-Modified-Since` not older than the build timestamp → `304`.
//! 3. Default-locale-prefixed paths redirect to the prefix-stripped form
//!    (`/he` → `/`): the default locale is served unprefixed and a prefixed
//!    URL for it must not exist as a second canonical address.
//! 4. Legacy unprefixed `/articles` paths are rewritten (URL bar unchanged)
//!    to the default-locale-prefixed equivalent.
//! 5. Paths already prefixed with a supported locale pass through.
//! 6. `/` alone passes through; home is served at the bare root.
//! 7. Remaining unprefixed paths negotiate `Accept-Language` among the
//!    non-default locales and redirect on a match; otherwise they pass
//!    through and implicitly serve the default locale.
//!
//! Pass-through page responses get a `Last-Modified` header equal to the
//! build timestamp so rule 2 can short-circuit repeat visits.

use crate::config::Config;
use crate::routing::{get_segment, Locale, LocaleRegistry, RouteKey};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Endpoints served outside the locale tree.
const BYPASS_PATHS: &[&str] = &["/healthz", "/sitemap.xml"];

// Asset-extension pattern (cached for performance)
static ASSET_REGEX: OnceLock<Regex> = OnceLock::new();

pub async fn localize_request(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    // Rule 1: asset bypass.
    if is_asset_path(&path) || BYPASS_PATHS.contains(&path.as_str()) {
        return next.run(request).await;
    }

    // Rule 2: conditional-cache short-circuit.
    if let Some(since) = if_modified_since(&request) {
        if since >= config.build_timestamp {
            return not_modified(&config.last_modified);
        }
    }

    let default_code = Locale::default_locale().code();

    // Rule 3: default-locale canonicalization.
    if let Some(stripped) = strip_prefix(&path, default_code) {
        let location = if stripped.is_empty() { "/" } else { stripped };
        return Redirect::temporary(&with_query(location, query.as_deref())).into_response();
    }

    // Rule 4: legacy unprefixed article paths are rewritten, not redirected.
    // The article identifier survives verbatim; only the locale prefix and
    // the localized articles segment are inserted.
    if path == "/articles" || path.starts_with("/articles/") {
        let suffix = &path["/articles".len()..];
        let segment = get_segment(Locale::default_locale(), RouteKey::Articles);
        let rewritten = format!(
            "/{default_code}/{}{suffix}",
            percent_encode_segment(segment)
        );
        return match rewrite_uri(&rewritten, query.as_deref()) {
            Ok(uri) => {
                *request.uri_mut() = uri;
                stamped(next.run(request).await, &config.last_modified)
            }
            Err(_) => StatusCode::BAD_REQUEST.into_response(),
        };
    }

    // Rule 5: already locale-prefixed.
    if has_locale_prefix(&path) {
        return stamped(next.run(request).await, &config.last_modified);
    }

    // Rule 6: bare root.
    if path == "/" {
        return stamped(next.run(request).await, &config.last_modified);
    }

    // Rule 7: locale negotiation; the default locale stays unprefixed.
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if let Some(locale) = negotiate_locale(accept_language) {
        let location = format!("/{}{}", locale.code(), path);
        return Redirect::temporary(&with_query(&location, query.as_deref())).into_response();
    }

    stamped(next.run(request).await, &config.last_modified)
}

/// Whether `path` looks like a static asset request.
fn is_asset_path(path: &str) -> bool {
    let regex = ASSET_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\.(?:png|jpg|jpeg|gif|ico|svg|css|js|webp)$")
            .expect("asset pattern should compile")
    });
    regex.is_match(path)
}

/// Parse the `If-Modified-Since` header, if present and well-formed.
fn if_modified_since(request: &Request) -> Option<DateTime<Utc>> {
    let raw = request
        .headers()
        .get(header::IF_MODIFIED_SINCE)?
        .to_str()
        .ok()?;
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|since| since.with_timezone(&Utc))
}

/// Strip a locale prefix from `path`.
///
/// Returns the remainder (with its leading slash, empty for the bare
/// prefix), or `None` when `path` is not under `/{code}`.
fn strip_prefix<'a>(path: &'a str, code: &str) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?.strip_prefix(code)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Whether `path` starts with any supported locale prefix.
fn has_locale_prefix(path: &str) -> bool {
    LocaleRegistry::get()
        .supported()
        .iter()
        .any(|locale| strip_prefix(path, locale.code).is_some())
}

/// Pick a non-default supported locale from an `Accept-Language` header.
///
/// Tags are scanned in client-preference order; only the primary subtag is
/// matched. Returns `None` when nothing matches or when the client's first
/// supported preference is the default locale (which is served unprefixed).
fn negotiate_locale(accept_language: &str) -> Option<Locale> {
    for part in accept_language.split(',') {
        let tag = part.split(';').next().unwrap_or(part).trim();
        let primary = tag.split('-').next().unwrap_or(tag);

        if let Ok(locale) = Locale::from_code(&primary.to_ascii_lowercase()) {
            if locale.is_default() {
                return None;
            }
            return Some(locale);
        }
    }
    None
}

/// Percent-encode a single path segment for use in a rewritten URI.
///
/// Needed because localized segments may contain non-ASCII (Hebrew) slugs,
/// which are not valid in a raw `Uri`.
fn percent_encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}

/// Build the rewritten URI for an internal dispatch.
fn rewrite_uri(path: &str, query: Option<&str>) -> Result<Uri, axum::http::uri::InvalidUri> {
    with_query(path, query).parse()
}

fn not_modified(last_modified: &str) -> Response {
    (
        StatusCode::NOT_MODIFIED,
        [(header::LAST_MODIFIED, last_modified.to_string())],
    )
        .into_response()
}

/// Attach the build timestamp as `Last-Modified` to a page response.
fn stamped(mut response: Response, last_modified: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(last_modified) {
        response.headers_mut().insert(header::LAST_MODIFIED, value);
    }
    response
}
