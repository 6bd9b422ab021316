//! `<link>` head fragment advertising the favicon assets.

use super::FaviconRoute;
use quick_xml::escape::escape;

/// SVG icon pair switched by `prefers-color-scheme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgIcons {
    pub light: String,
    /// Without a dark variant a single icon link is emitted, with no `media`.
    pub dark: Option<String>,
}

/// Hrefs for the favicon `<link>` elements of a page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconLinks {
    pub icon: SvgIcons,
    pub apple_touch_icon: String,
    pub manifest: String,
    pub mask_icon: String,
}

impl Default for FaviconLinks {
    /// Links pointing at the root-relative favicon routes.
    fn default() -> Self {
        let root = |route: FaviconRoute| format!("/{route}");
        Self {
            icon: SvgIcons {
                light: root(FaviconRoute::Svg),
                dark: None,
            },
            apple_touch_icon: root(FaviconRoute::AppleTouchIconPng),
            manifest: root(FaviconRoute::SiteWebmanifest),
            mask_icon: root(FaviconRoute::SafariPinnedTabSvg),
        }
    }
}

impl FaviconLinks {
    /// Render the fragment, one `<link>` per line.
    pub fn render(&self) -> String {
        let mut links = Vec::with_capacity(5);

        links.push(format!(
            r#"<link rel="apple-touch-icon" sizes="180x180" href="{}">"#,
            escape(self.apple_touch_icon.as_str())
        ));

        match &self.icon.dark {
            Some(dark) => {
                links.push(svg_icon(&self.icon.light, Some("light")));
                links.push(svg_icon(dark, Some("dark")));
            }
            None => links.push(svg_icon(&self.icon.light, None)),
        }

        links.push(format!(
            r#"<link rel="manifest" href="{}">"#,
            escape(self.manifest.as_str())
        ));
        links.push(format!(
            r#"<link rel="mask-icon" href="{}">"#,
            escape(self.mask_icon.as_str())
        ));

        links.join("\n")
    }
}

fn svg_icon(href: &str, scheme: Option<&str>) -> String {
    let media = scheme
        .map(|s| format!(r#" media="(prefers-color-scheme: {s})""#))
        .unwrap_or_default();
    format!(
        r#"<link rel="icon" type="image/svg+xml" href="{}"{media}>"#,
        escape(href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_links() {
        let html = FaviconLinks::default().render();
        assert_eq!(
            html,
            [
                r#"<link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">"#,
                r#"<link rel="icon" type="image/svg+xml" href="/favicon.svg">"#,
                r#"<link rel="manifest" href="/site.webmanifest">"#,
                r#"<link rel="mask-icon" href="/safari-pinned-tab.svg">"#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_light_and_dark_icons() {
        let links = FaviconLinks {
            icon: SvgIcons {
                light: "/icons/light.svg".into(),
                dark: Some("/icons/dark.svg".into()),
            },
            ..FaviconLinks::default()
        };
        let html = links.render();

        assert!(html.contains(
            r#"<link rel="icon" type="image/svg+xml" href="/icons/light.svg" media="(prefers-color-scheme: light)">"#
        ));
        assert!(html.contains(
            r#"<link rel="icon" type="image/svg+xml" href="/icons/dark.svg" media="(prefers-color-scheme: dark)">"#
        ));
        assert_eq!(html.lines().count(), 5);
    }

    #[test]
    fn test_hrefs_are_escaped() {
        let links = FaviconLinks {
            manifest: r#"/site.webmanifest?a=1&b="2""#.into(),
            ..FaviconLinks::default()
        };
        let html = links.render();
        assert!(html.contains(r#"href="/site.webmanifest?a=1&amp;b=&quot;2&quot;""#));
    }
}
