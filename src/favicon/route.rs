//! The closed set of favicon asset routes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A well-known favicon asset, served from the site root.
///
/// Each variant is bound to exactly one path segment (see [`as_str`]).
///
/// [`as_str`]: FaviconRoute::as_str
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaviconRoute {
    #[serde(rename = "favicon.svg")]
    Svg,
    #[serde(rename = "favicon.png")]
    Png,
    #[serde(rename = "apple-touch-icon.png")]
    AppleTouchIconPng,
    #[serde(rename = "apple-touch-icon-precomposed.png")]
    AppleTouchIconPrecomposedPng,
    #[serde(rename = "favicon-32x32.png")]
    Favicon32x32Png,
    #[serde(rename = "favicon-16x16.png")]
    Favicon16x16Png,
    #[serde(rename = "site.webmanifest")]
    SiteWebmanifest,
    #[serde(rename = "safari-pinned-tab.svg")]
    SafariPinnedTabSvg,
    #[serde(rename = "favicon.ico")]
    FaviconIco,
    #[serde(rename = "mstile-150x150.png")]
    Mstile150x150Png,
    #[serde(rename = "browserconfig.xml")]
    BrowserconfigXml,
    #[serde(rename = "android-chrome-192x192.png")]
    AndroidChrome192x192Png,
    #[serde(rename = "android-chrome-512x512.png")]
    AndroidChrome512x512Png,
}

/// Returned by [`FaviconRoute::from_str`] for a path that names no favicon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a favicon path")]
pub struct UnknownFaviconPath(pub String);

impl FaviconRoute {
    /// Every route, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Svg,
        Self::Png,
        Self::AppleTouchIconPng,
        Self::AppleTouchIconPrecomposedPng,
        Self::Favicon32x32Png,
        Self::Favicon16x16Png,
        Self::SiteWebmanifest,
        Self::SafariPinnedTabSvg,
        Self::FaviconIco,
        Self::Mstile150x150Png,
        Self::BrowserconfigXml,
        Self::AndroidChrome192x192Png,
        Self::AndroidChrome512x512Png,
    ];

    /// The literal path segment, without a leading slash.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "favicon.svg",
            Self::Png => "favicon.png",
            Self::AppleTouchIconPng => "apple-touch-icon.png",
            Self::AppleTouchIconPrecomposedPng => "apple-touch-icon-precomposed.png",
            Self::Favicon32x32Png => "favicon-32x32.png",
            Self::Favicon16x16Png => "favicon-16x16.png",
            Self::SiteWebmanifest => "site.webmanifest",
            Self::SafariPinnedTabSvg => "safari-pinned-tab.svg",
            Self::FaviconIco => "favicon.ico",
            Self::Mstile150x150Png => "mstile-150x150.png",
            Self::BrowserconfigXml => "browserconfig.xml",
            Self::AndroidChrome192x192Png => "android-chrome-192x192.png",
            Self::AndroidChrome512x512Png => "android-chrome-512x512.png",
        }
    }

    /// Exact, case-sensitive lookup of a single path segment.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.as_str() == path)
    }
}

impl fmt::Display for FaviconRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaviconRoute {
    type Err = UnknownFaviconPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| UnknownFaviconPath(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_literals_are_distinct() {
        let literals: HashSet<_> = FaviconRoute::ALL.iter().map(FaviconRoute::as_str).collect();
        assert_eq!(literals.len(), FaviconRoute::ALL.len());
    }

    #[test]
    fn test_from_path_round_trip() {
        for route in FaviconRoute::ALL {
            assert_eq!(FaviconRoute::from_path(route.as_str()), Some(route));
            assert_eq!(route.to_string().parse::<FaviconRoute>(), Ok(route));
        }
    }

    #[test]
    fn test_from_path_is_exact() {
        assert_eq!(FaviconRoute::from_path("Favicon.svg"), None);
        assert_eq!(FaviconRoute::from_path("/favicon.svg"), None);
        assert_eq!(FaviconRoute::from_path("favicon.svg/"), None);
        assert_eq!(FaviconRoute::from_path("favicon.svg?v=2"), None);
        assert_eq!(FaviconRoute::from_path(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "robots.txt".parse::<FaviconRoute>().unwrap_err();
        assert_eq!(err, UnknownFaviconPath("robots.txt".into()));
        assert_eq!(err.to_string(), "`robots.txt` is not a favicon path");
    }

    #[test]
    fn test_serde_uses_literal() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            route: FaviconRoute,
        }

        let toml = toml::to_string(&Wrapper {
            route: FaviconRoute::AppleTouchIconPrecomposedPng,
        })
        .unwrap();
        assert_eq!(toml.trim(), "route = \"apple-touch-icon-precomposed.png\"");

        let parsed: Wrapper = toml::from_str("route = \"site.webmanifest\"").unwrap();
        assert_eq!(parsed.route, FaviconRoute::SiteWebmanifest);
    }
}
