//! Two-way mapping between request paths and [`FaviconRoute`]s.

use super::FaviconRoute;

/// Parses a single path segment into a [`FaviconRoute`] and prints a route
/// back to its segment.
///
/// A miss is an ordinary routing outcome: callers fall through to their
/// other rules when [`parse`](Self::parse) returns `None`.
///
/// ```
/// use siteparts::favicon::{FaviconRoute, FaviconRouter};
///
/// let router = FaviconRouter::new();
/// assert_eq!(router.parse("favicon.ico"), Some(FaviconRoute::FaviconIco));
/// assert_eq!(router.print(FaviconRoute::Svg), "favicon.svg");
/// assert_eq!(router.parse("index.html"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaviconRouter;

impl FaviconRouter {
    /// Order in which candidates are tried. The literals are distinct, so the
    /// order never changes which route matches.
    pub const MATCH_ORDER: [FaviconRoute; 13] = [
        FaviconRoute::Svg,
        FaviconRoute::Png,
        FaviconRoute::AppleTouchIconPng,
        FaviconRoute::Favicon32x32Png,
        FaviconRoute::Favicon16x16Png,
        FaviconRoute::SiteWebmanifest,
        FaviconRoute::SafariPinnedTabSvg,
        FaviconRoute::FaviconIco,
        FaviconRoute::Mstile150x150Png,
        FaviconRoute::BrowserconfigXml,
        FaviconRoute::AndroidChrome192x192Png,
        FaviconRoute::AndroidChrome512x512Png,
        FaviconRoute::AppleTouchIconPrecomposedPng,
    ];

    pub const fn new() -> Self {
        Self
    }

    /// Match `path` (one segment, no leading slash or query) exactly.
    pub fn parse(&self, path: &str) -> Option<FaviconRoute> {
        Self::MATCH_ORDER
            .into_iter()
            .find(|route| route.as_str() == path)
    }

    pub const fn print(&self, route: FaviconRoute) -> &'static str {
        route.as_str()
    }

    /// Routes in match order.
    pub fn routes(&self) -> impl Iterator<Item = FaviconRoute> {
        Self::MATCH_ORDER.into_iter()
    }
}

/// Reduce a request target to the single segment the router matches:
/// strip query and fragment, then surrounding slashes.
pub fn request_segment(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    target[..end].trim_matches('/')
}
