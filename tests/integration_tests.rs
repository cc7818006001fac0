//! Integration tests for the localized site server.
//!
//! These tests run the real router (localization middleware included) on an
//! ephemeral port and drive it over HTTP with redirect following disabled,
//! so every redirect and rewrite decision is observable.

use chrono::{Duration, TimeZone, Utc};
use pereezd_site::{config::Config, server};
use std::sync::Arc;

// ==================== Test Helpers ====================

const BUILD_YEAR: i32 = 2025;

fn test_config() -> Config {
    Config::new(
        "https://site.ru",
        Utc.with_ymd_and_hms(BUILD_YEAR, 6, 1, 0, 0, 0).unwrap(),
        "127.0.0.1",
        0,
    )
}

/// Start the server on an ephemeral port; returns its base URL.
async fn spawn_server() -> (String, Arc<Config>) {
    let config = Arc::new(test_config());
    let app = server::build_router(config.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    (format!("http://{address}"), config)
}

/// Client that surfaces redirects instead of following them.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build test client")
}

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .expect("Expected a Location header")
        .to_str()
        .expect("Location should be valid UTF-8")
}

// ==================== Default-Locale Canonicalization ====================

#[tokio::test]
async fn default_locale_prefix_redirects_to_root() {
    let (base, _) = spawn_server().await;

    let response = client().get(format!("{base}/he")).send().await.unwrap();
    assert_eq!(response.status(), 307);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn default_locale_prefix_is_stripped_from_deep_paths() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/he/articles"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 307);
    assert_eq!(location(&response), "/articles");
}

#[tokio::test]
async fn default_locale_redirect_preserves_query() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/he?from=tlv"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 307);
    assert_eq!(location(&response), "/?from=tlv");
}

#[tokio::test]
async fn hebrew_like_prefix_is_not_stripped() {
    // "/hello" is not "/he/..."; it must fall through to negotiation.
    let (base, _) = spawn_server().await;

    let response = client().get(format!("{base}/hello")).send().await.unwrap();
    assert_eq!(response.status(), 200);
}

// ==================== Locale-Prefixed Pass-Through ====================

#[tokio::test]
async fn prefixed_page_renders_with_seo_metadata() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/en/services"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(body.contains(r#"<link rel="canonical" href="https://site.ru/en/services">"#));
    assert!(body.contains(r#"hreflang="x-default""#));
}

#[tokio::test]
async fn root_serves_default_locale_home() {
    let (base, _) = spawn_server().await;

    let response = client().get(&base).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="he" dir="rtl">"#));
}

#[tokio::test]
async fn pass_through_responses_carry_last_modified() {
    let (base, config) = spawn_server().await;

    let response = client()
        .get(format!("{base}/ru/uslugi"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("last-modified").unwrap(),
        &config.last_modified
    );
}

#[tokio::test]
async fn unknown_slug_under_locale_falls_back_to_home() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/en/no-such-page"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("<h1>Home</h1>"));
}

// ==================== Legacy Article Rewrites ====================

#[tokio::test]
async fn unprefixed_articles_is_rewritten_not_redirected() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/articles"))
        .send()
        .await
        .unwrap();
    // A rewrite keeps the URL: no redirect status, Hebrew articles page body.
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<html lang="he" dir="rtl">"#));
    assert!(body.contains("<h1>מאמרים</h1>"));
}

#[tokio::test]
async fn unprefixed_article_id_is_preserved_through_rewrite() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/articles/packing-guide"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("packing-guide"));
}

// ==================== Locale Negotiation ====================

#[tokio::test]
async fn negotiation_redirects_russian_clients() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/services"))
        .header("accept-language", "ru-RU,ru;q=0.9,en;q=0.5")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 307);
    assert_eq!(location(&response), "/ru/services");
}

#[tokio::test]
async fn negotiation_passes_default_locale_through() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/services"))
        .header("accept-language", "he-IL,he;q=0.9")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn negotiation_without_header_serves_default() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/services"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn unsupported_locale_prefix_goes_through_negotiation() {
    // "/fr" is not a supported locale, so "/fr/services" is an ordinary
    // unprefixed path: negotiation applies instead of locale pass-through.
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/fr/services"))
        .header("accept-language", "en-US,en;q=0.8")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 307);
    assert_eq!(location(&response), "/en/fr/services");
}

// ==================== Conditional Caching ====================

#[tokio::test]
async fn if_modified_since_returns_304_when_current() {
    let (base, config) = spawn_server().await;

    let response = client()
        .get(&base)
        .header("if-modified-since", &config.last_modified)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 304);
    assert_eq!(
        response.headers().get("last-modified").unwrap(),
        &config.last_modified
    );
}

#[tokio::test]
async fn stale_if_modified_since_renders_normally() {
    let (base, config) = spawn_server().await;

    let stale = (config.build_timestamp - Duration::days(30))
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string();
    let response = client()
        .get(&base)
        .header("if-modified-since", stale)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn malformed_if_modified_since_is_ignored() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(&base)
        .header("if-modified-since", "not a date")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

// ==================== Non-Page Endpoints ====================

#[tokio::test]
async fn healthz_bypasses_localization() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/healthz"))
        .header("accept-language", "ru")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value =
        serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn sitemap_lists_alternates_for_every_locale() {
    let (base, _) = spawn_server().await;

    let response = client()
        .get(format!("{base}/sitemap.xml"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/xml"
    );

    let body = response.text().await.unwrap();
    assert!(body.contains("<loc>https://site.ru/en/services</loc>"));
    assert!(body.contains(r#"hreflang="x-default""#));
    assert!(body.contains("https://site.ru/ru/raschet-stoimosti"));
}
