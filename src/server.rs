//! HTTP server: router construction and localized page handlers.
//!
//! Every page is served from one rendering path: the handler resolves the
//! incoming segments to a (locale, route) pair, using the default locale for
//! unprefixed paths, and renders a minimal HTML document with canonical and
//! hreflang metadata from the path builder. The locale-switch links in the
//! chrome are computed with `switch_locale_path` from the canonicalized
//! current path.

use crate::config::Config;
use crate::dictionary::dictionary_for;
use crate::middleware::localize_request;
use crate::routing::{
    build_absolute_url, build_language_alternates, build_localized_path, resolve_route_key,
    switch_locale_path, Locale, RouteKey, X_DEFAULT,
};
use axum::{
    extract::{Path, State},
    http::header,
    middleware,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Build the application router.
///
/// The localization middleware wraps every route; `/healthz` and
/// `/sitemap.xml` are exempted inside the middleware itself.
pub fn build_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(root_page))
        .route("/healthz", get(health_check))
        .route("/sitemap.xml", get(sitemap))
        .route("/:first", get(single_segment_page))
        .route("/:first/*rest", get(nested_page))
        .layer(middleware::from_fn_with_state(
            config.clone(),
            localize_request,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

// ==================== Handlers ====================

/// `GET /` — home in the default locale, served unprefixed.
async fn root_page(State(config): State<Arc<Config>>) -> Html<String> {
    render_route(&config, Locale::default_locale(), RouteKey::Home, &[])
}

/// `GET /{first}` — either a localized home (`/ru`) or a default-locale
/// page slug (`/שירותים`).
async fn single_segment_page(
    State(config): State<Arc<Config>>,
    Path(first): Path<String>,
) -> Html<String> {
    match Locale::from_code(&first) {
        Ok(locale) => render_route(&config, locale, RouteKey::Home, &[]),
        Err(_) => {
            let locale = Locale::default_locale();
            let route = resolve_route_key(locale, &first).unwrap_or(RouteKey::Home);
            render_route(&config, locale, route, &[])
        }
    }
}

/// `GET /{first}/{rest...}` — a locale-prefixed page, possibly with a
/// sub-path (article slug), or a default-locale page with a sub-path.
async fn nested_page(
    State(config): State<Arc<Config>>,
    Path((first, rest)): Path<(String, String)>,
) -> Html<String> {
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    let (locale, route, extra) = match Locale::from_code(&first) {
        Ok(locale) => match segments.split_first() {
            Some((slug, extra)) => match resolve_route_key(locale, slug) {
                Some(route) => (locale, route, extra.to_vec()),
                // Unrecognized slug: fall back to home.
                None => (locale, RouteKey::Home, Vec::new()),
            },
            None => (locale, RouteKey::Home, Vec::new()),
        },
        Err(_) => {
            let locale = Locale::default_locale();
            match resolve_route_key(locale, &first) {
                Some(route) => (locale, route, segments),
                None => (locale, RouteKey::Home, Vec::new()),
            }
        }
    };

    debug!(
        locale = locale.code(),
        route = route.name(),
        "rendering nested page"
    );
    render_route(&config, locale, route, &extra)
}

#[derive(Debug, Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /healthz`
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /sitemap.xml` — every (locale, route) URL with hreflang alternates.
async fn sitemap(State(config): State<Arc<Config>>) -> Response {
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
        "\n",
    ));

    for route in RouteKey::ALL {
        let alternates = build_language_alternates(&config.site_url, route);
        for locale in Locale::supported() {
            xml.push_str("  <url>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                build_absolute_url(&config.site_url, locale, route)
            ));
            for alternate in Locale::supported() {
                xml.push_str(&format!(
                    r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                    alternate.code(),
                    alternates[alternate.code()]
                ));
                xml.push('\n');
            }
            xml.push_str(&format!(
                r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                X_DEFAULT, alternates[X_DEFAULT]
            ));
            xml.push('\n');
            xml.push_str("  </url>\n");
        }
    }

    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

// ==================== Rendering ====================

/// Render one localized page.
///
/// `extra` is the sub-path carried after the route segment (an article slug
/// and anything below it); it is echoed, never interpreted.
fn render_route(
    config: &Config,
    locale: Locale,
    route: RouteKey,
    extra: &[&str],
) -> Html<String> {
    let dictionary = dictionary_for(locale);

    // Canonicalized current path, the input for the locale-switch links.
    let mut current_path = build_localized_path(locale, route);
    if !extra.is_empty() {
        current_path = format!("{}/{}", current_path, extra.join("/"));
    }

    let canonical = build_absolute_url(&config.site_url, locale, route);
    let alternates = build_language_alternates(&config.site_url, route);

    let mut head = String::new();
    head.push_str(&format!(
        r#"<title>{} — {}</title>"#,
        dictionary.nav_label(route),
        dictionary.metadata.title
    ));
    head.push('\n');
    head.push_str(&format!(
        r#"<meta name="description" content="{}">"#,
        dictionary.metadata.description
    ));
    head.push('\n');
    head.push_str(&format!(r#"<link rel="canonical" href="{canonical}">"#));
    head.push('\n');
    for alternate in Locale::supported() {
        head.push_str(&format!(
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            alternate.code(),
            alternates[alternate.code()]
        ));
        head.push('\n');
    }
    head.push_str(&format!(
        r#"<link rel="alternate" hreflang="{}" href="{}">"#,
        X_DEFAULT, alternates[X_DEFAULT]
    ));
    head.push('\n');

    let nav = RouteKey::ALL
        .iter()
        .map(|&item| {
            format!(
                r#"<a href="{}">{}</a>"#,
                build_localized_path(locale, item),
                dictionary.nav_label(item)
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let switcher = Locale::supported()
        .into_iter()
        .map(|target| {
            format!(
                r#"<a lang="{}" href="{}">{}</a>"#,
                target.code(),
                switch_locale_path(&current_path, target),
                target.native_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let body = if route == RouteKey::Articles && !extra.is_empty() {
        format!(
            "<article><h1>{}</h1><p>{}</p></article>",
            dictionary.nav_label(route),
            escape_html(&extra.join("/"))
        )
    } else {
        format!("<h1>{}</h1>", dictionary.nav_label(route))
    };

    let direction = if locale.rtl() { "rtl" } else { "ltr" };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{direction}">
  <head>
    <meta charset="utf-8">
    {head}
  </head>
  <body>
    <nav>
      {nav}
    </nav>
    <nav aria-label="language">
      {switcher}
    </nav>
    <main>
      {body}
    </main>
  </body>
</html>
"#,
        lang = locale.code(),
    ))
}

/// Minimal HTML escaping for user-controlled sub-path segments.
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
