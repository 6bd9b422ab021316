//! Content types for the files the server hands out.

use crate::favicon::FaviconRoute;
use std::path::Path;

pub mod types {
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const XML: &str = "application/xml";
    pub const MANIFEST: &str = "application/manifest+json";
    pub const OCTET_STREAM: &str = "application/octet-stream";

    pub const PNG: &str = "image/png";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("xml") => types::XML,
        Some("webmanifest") => types::MANIFEST,
        Some("png") => types::PNG,
        Some("svg") => types::SVG,
        Some("ico") => types::ICO,
        _ => types::OCTET_STREAM,
    }
}

/// Content type of a favicon asset, from its literal's extension.
pub fn for_route(route: FaviconRoute) -> &'static str {
    from_extension(Path::new(route.as_str()).extension().and_then(|e| e.to_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_known_type() {
        for route in FaviconRoute::ALL {
            assert_ne!(for_route(route), types::OCTET_STREAM, "{route}");
        }
    }

    #[test]
    fn test_for_route() {
        assert_eq!(for_route(FaviconRoute::FaviconIco), types::ICO);
        assert_eq!(for_route(FaviconRoute::Svg), types::SVG);
        assert_eq!(for_route(FaviconRoute::SafariPinnedTabSvg), types::SVG);
        assert_eq!(for_route(FaviconRoute::Mstile150x150Png), types::PNG);
        assert_eq!(for_route(FaviconRoute::SiteWebmanifest), types::MANIFEST);
        assert_eq!(for_route(FaviconRoute::BrowserconfigXml), types::XML);
    }
}
