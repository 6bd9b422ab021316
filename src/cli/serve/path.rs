//! Request URL to route resolution.

use crate::config::SiteConfig;
use crate::favicon::{FaviconRoute, FaviconRouter, request_segment};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::path::PathBuf;

/// What a request path refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Sitemap,
    Favicon { route: FaviconRoute, file: PathBuf },
    NotFound,
}

/// Routing table built once from the config.
#[derive(Debug, Clone)]
pub struct SiteRoutes {
    router: FaviconRouter,
    sitemap_path: Option<String>,
    favicon_dir: PathBuf,
}

impl SiteRoutes {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            router: FaviconRouter::new(),
            sitemap_path: config.sitemap.enable.then(|| config.sitemap_url_path()),
            favicon_dir: config.favicon_dir().to_path_buf(),
        }
    }

    /// Resolve a raw request target (`/favicon.ico?v=2`).
    ///
    /// The sitemap is checked first, then the favicon router; a favicon whose
    /// file is missing on disk still resolves, the caller decides on 404.
    pub fn resolve(&self, url: &str) -> Resolved {
        let segment = normalize_url(url);

        if self.sitemap_path.as_deref() == Some(&*segment) {
            return Resolved::Sitemap;
        }

        match self.router.parse(&segment) {
            Some(route) => Resolved::Favicon {
                route,
                file: self.favicon_dir.join(route.as_str()),
            },
            None => Resolved::NotFound,
        }
    }
}

/// Normalize URL: strip query string, trim slashes, percent-decode
fn normalize_url(url: &str) -> Cow<'_, str> {
    let segment = request_segment(url);
    percent_decode_str(segment)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(segment))
}
