//! `[sitemap]` configuration and the `[[sitemap.pages]]` list.

use crate::config::ConfigDiagnostics;
use crate::sitemap::{ChangeFrequency, Metadata, Sitemap};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file, relative to the output directory.
    pub path: PathBuf,
    /// Pages in the order they appear in the sitemap.
    pub pages: Vec<PageConfig>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            pages: Vec::new(),
        }
    }
}

/// One `[[sitemap.pages]]` table.
///
/// `lastmod` must be a quoted string (`lastmod = "2024-01-15"`); a bare TOML
/// date is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Path relative to `site.url`, or an absolute URL.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

impl PageConfig {
    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.lastmod, self.changefreq, self.priority)
    }

    /// Resolve the page against `base` (which should end with `/`).
    ///
    /// A leading `/` is dropped so `/about` lands under the base path rather
    /// than at the host root.
    pub fn location(&self, base: &Url) -> Result<Url, url::ParseError> {
        if let Ok(absolute) = Url::parse(&self.path) {
            return Ok(absolute);
        }
        base.join(self.path.trim_start_matches('/'))
    }
}

impl SitemapConfig {
    /// Build the sitemap document from the configured pages.
    pub fn to_sitemap(&self, base: &Url) -> Result<Sitemap, url::ParseError> {
        let locations = self
            .pages
            .iter()
            .map(|page| page.location(base))
            .collect::<Result<Vec<_>, _>>()?;

        let pages = locations
            .into_iter()
            .zip(self.pages.iter().map(PageConfig::metadata));
        Ok(Sitemap::from_pages(pages, Url::clone))
    }

    /// # Checks
    /// - `path` is relative, non-empty and has no `..`
    /// - every page path resolves against `base` (errors)
    /// - priorities outside `[0.0, 1.0]` (warnings; they are written as-is)
    pub fn validate(&self, base: Option<&Url>, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.path.as_os_str().is_empty() || self.path.is_absolute() {
            diag.error_with_hint(
                "sitemap.path",
                format!("`{}` must be a relative file path", self.path.display()),
                "e.g.: \"sitemap.xml\"",
            );
        } else if self
            .path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            diag.error_with_hint(
                "sitemap.path",
                format!("`{}` must stay inside the output directory", self.path.display()),
                "remove `..` components",
            );
        }

        for (i, page) in self.pages.iter().enumerate() {
            if let Some(base) = base
                && let Err(e) = page.location(base)
            {
                diag.error(
                    format!("sitemap.pages[{i}].path").as_str(),
                    format!("`{}` does not resolve to a URL: {e}", page.path),
                );
            }

            if let Some(priority) = page.priority
                && !(0.0..=1.0).contains(&priority)
            {
                diag.warn(
                    format!("sitemap.pages[{i}].priority").as_str(),
                    format!("{priority} is outside 0.0..=1.0 and will be written unchanged"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/").unwrap()
    }

    fn page(path: &str) -> PageConfig {
        PageConfig {
            path: path.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    #[test]
    fn test_location_relative_and_absolute() {
        assert_eq!(
            page("/about").location(&base()).unwrap().as_str(),
            "https://example.com/blog/about"
        );
        assert_eq!(
            page("posts/hello/").location(&base()).unwrap().as_str(),
            "https://example.com/blog/posts/hello/"
        );
        assert_eq!(
            page("").location(&base()).unwrap().as_str(),
            "https://example.com/blog/"
        );
        assert_eq!(
            page("https://other.org/x").location(&base()).unwrap().as_str(),
            "https://other.org/x"
        );
    }

    #[test]
    fn test_parse_pages_from_toml() {
        let config: SitemapConfig = toml::from_str(
            r#"
            path = "map.xml"

            [[pages]]
            path = "/"
            lastmod = "2024-01-15"
            changefreq = "weekly"
            priority = 0.8

            [[pages]]
            path = "/about"
            "#,
        )
        .unwrap();

        assert!(config.enable);
        assert_eq!(config.path, PathBuf::from("map.xml"));
        assert_eq!(config.pages.len(), 2);
        assert_eq!(
            config.pages[0].metadata(),
            Metadata::new(
                NaiveDate::from_ymd_opt(2024, 1, 15),
                Some(ChangeFrequency::Weekly),
                Some(0.8)
            )
        );
        assert!(config.pages[1].metadata().is_empty());
    }

    #[test]
    fn test_to_sitemap_keeps_page_order() {
        let config = SitemapConfig {
            pages: vec![page("z"), page("a"), page("m")],
            ..SitemapConfig::default()
        };
        let sitemap = config.to_sitemap(&base()).unwrap();
        let locs: Vec<_> = sitemap.urls().iter().map(|u| u.location().path()).collect();
        assert_eq!(locs, ["/blog/z", "/blog/a", "/blog/m"]);
    }

    #[test]
    fn test_validate_priority_is_warning() {
        let config = SitemapConfig {
            pages: vec![PageConfig {
                priority: Some(1.5),
                ..page("x")
            }],
            ..SitemapConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(Some(&base()), &mut diag);

        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "sitemap.pages[0].priority");
    }

    #[test]
    fn test_validate_absolute_output_path() {
        let config = SitemapConfig {
            path: "/etc/sitemap.xml".into(),
            ..SitemapConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(Some(&base()), &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_parent_dir_output_path() {
        for path in ["../../outside.xml", "maps/../../sitemap.xml"] {
            let config = SitemapConfig {
                path: path.into(),
                ..SitemapConfig::default()
            };
            let mut diag = ConfigDiagnostics::new();
            config.validate(Some(&base()), &mut diag);
            assert_eq!(diag.errors().len(), 1, "{path}");
            assert_eq!(diag.errors()[0].field.as_str(), "sitemap.path");
        }

        let nested = SitemapConfig {
            path: "maps/sitemap.xml".into(),
            ..SitemapConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        nested.validate(Some(&base()), &mut diag);
        assert!(!diag.has_errors());
    }
}
