//! `[site]` configuration.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base URL that page paths resolve against (e.g. "https://example.com/blog").
    pub url: Option<String>,
}

impl SiteSectionConfig {
    /// Base URL with a trailing slash, so joined page paths keep any
    /// sub-directory prefix.
    pub fn base_url(&self) -> Option<Url> {
        let raw = self.url.as_deref()?;
        let with_slash = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        Url::parse(&with_slash).ok()
    }

    /// # Checks
    /// - If `sitemap_enabled`, `url` must be set
    /// - `url` must be an http(s) URL with a host
    pub fn validate(&self, sitemap_enabled: bool, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            if sitemap_enabled {
                diag.error_with_hint(
                    "site.url",
                    "`sitemap.enable` is true but `site.url` is not configured",
                    "set `site.url`, e.g.: \"https://example.com\"",
                );
            }
            return;
        };

        match Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        "site.url",
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    "site.url",
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
