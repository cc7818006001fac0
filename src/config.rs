use anyhow::{Context, Result};
use chrono::{DateTime, Timelike, Utc};

#[derive(Debug, Clone)]
pub struct Config {
    // SEO
    /// Site origin for absolute URLs, no trailing slash
    pub site_url: String,

    // Caching
    /// Build timestamp, truncated to whole seconds (HTTP date resolution)
    pub build_timestamp: DateTime<Utc>,
    /// `build_timestamp` preformatted as an HTTP date for `Last-Modified`
    pub last_modified: String,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url =
            std::env::var("SITE_URL").unwrap_or_else(|_| "https://site.ru".to_string());

        let build_timestamp = match std::env::var("BUILD_TIMESTAMP") {
            Ok(raw) => DateTime::parse_from_rfc3339(&raw)
                .with_context(|| format!("BUILD_TIMESTAMP is not valid RFC 3339: {raw}"))?
                .with_timezone(&Utc),
            // Fresh deploys without a stamp fall back to process start.
            Err(_) => Utc::now(),
        };

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Ok(Self::new(site_url, build_timestamp, host, port))
    }

    /// Build a config from already-resolved values, normalizing them the
    /// same way `from_env` does.
    pub fn new(
        site_url: impl Into<String>,
        build_timestamp: DateTime<Utc>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        let site_url = site_url.into().trim_end_matches('/').to_string();

        // If-Modified-Since comparisons happen at second resolution.
        let build_timestamp = build_timestamp
            .with_nanosecond(0)
            .unwrap_or(build_timestamp);
        let last_modified = build_timestamp
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string();

        Self {
            site_url,
            build_timestamp,
            last_modified,
            host: host.into(),
            port,
        }
    }
}
