//! Locale-aware routing server for a multi-locale moving-company site.
//!
//! The site is served in Hebrew (default), Russian and English. Every page
//! lives under a locale-prefixed URL whose path segment is localized per
//! language (including right-to-left Hebrew slugs). The crate's core is the
//! routing subsystem in [`routing`]: a fixed locale registry, an immutable
//! per-locale route segment table validated at startup, pure path/URL
//! builders, and a locale-switch translator. The [`middleware`] module
//! canonicalizes every inbound request (default-locale stripping, legacy
//! path rewrites, `Accept-Language` negotiation) before it reaches a page.

pub mod config;
pub mod dictionary;
pub mod middleware;
pub mod routing;
pub mod server;
