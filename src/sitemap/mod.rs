//! Sitemap generation.
//!
//! Renders an ordered list of pages into a sitemaps.org 0.9 document.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//! <url>
//! <loc>https://example.com/page1</loc>
//! <lastmod>2024-01-15</lastmod>
//! <changefreq>weekly</changefreq>
//! <priority>0.8</priority>
//! </url>
//! </urlset>
//! ```
//!
//! Entries are written in the order they were supplied. Nothing is sorted or
//! deduplicated, and priorities are not range checked. Rendering is a pure
//! function of the entry list.

mod entry;
mod frequency;

pub use entry::{Metadata, UrlEntry};
pub use frequency::ChangeFrequency;

use quick_xml::escape::escape;
use std::borrow::Cow;
use url::Url;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// An ordered sitemap document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    pub fn new(urls: Vec<UrlEntry>) -> Self {
        Self { urls }
    }

    /// Build entries from `(page, metadata)` pairs, resolving each page to its
    /// location with `router`.
    ///
    /// Output order follows the iterator, so pass an ordered collection when
    /// the order of `<url>` blocks matters.
    pub fn from_pages<P, I, F>(pages: I, router: F) -> Self
    where
        I: IntoIterator<Item = (P, Metadata)>,
        F: Fn(&P) -> Url,
    {
        let urls = pages
            .into_iter()
            .map(|(page, metadata)| UrlEntry::with_metadata(router(&page), metadata))
            .collect();
        Self { urls }
    }

    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Render the complete XML document.
    pub fn render(&self) -> String {
        let body = self
            .urls
            .iter()
            .map(render_url)
            .collect::<Vec<_>>()
            .join("\n");

        let mut xml = String::with_capacity(128 + body.len());
        xml.push_str(XML_DECLARATION);
        xml.push_str("\n<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");
        xml.push_str(&body);
        xml.push_str("\n</urlset>");
        xml
    }
}

impl FromIterator<UrlEntry> for Sitemap {
    fn from_iter<T: IntoIterator<Item = UrlEntry>>(iter: T) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

/// Render `sitemap` to XML. Same as [`Sitemap::render`].
pub fn render(sitemap: &Sitemap) -> String {
    sitemap.render()
}

/// Render one `<url>` block (no surrounding newlines).
fn render_url(entry: &UrlEntry) -> String {
    let meta = entry.metadata();
    let mut elements = Vec::with_capacity(4);

    elements.push(format!("<loc>{}</loc>", escape(entry.location().as_str())));

    if let Some(date) = meta.last_modification() {
        elements.push(format!("<lastmod>{}</lastmod>", date.format("%Y-%m-%d")));
    }
    if let Some(frequency) = meta.change_frequency() {
        elements.push(format!("<changefreq>{frequency}</changefreq>"));
    }
    if let Some(priority) = meta.priority() {
        // `{:?}` keeps the fractional part: 1.0 -> "1.0", not "1"
        elements.push(format!("<priority>{priority:?}</priority>"));
    }

    format!("<url>\n{}\n</url>", elements.join("\n"))
}

/// Minify XML content if enabled.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<String>();
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    /// Walk the whole document; any malformed markup is an error.
    fn assert_well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("malformed xml: {e}\n{xml}"),
            }
        }
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::default().render();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\n</urlset>"
        );
        assert_well_formed(&xml);
    }

    #[test]
    fn test_sitemap_full_entry() {
        let sitemap = Sitemap::new(vec![
            UrlEntry::new(url("https://example.com/page1"))
                .with_last_modification(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
                .with_change_frequency(ChangeFrequency::Weekly)
                .with_priority(0.8),
        ]);
        let xml = sitemap.render();

        assert!(xml.contains(
            "<url>\n<loc>https://example.com/page1</loc>\n<lastmod>2024-01-15</lastmod>\n<changefreq>weekly</changefreq>\n<priority>0.8</priority>\n</url>"
        ));
        assert_well_formed(&xml);
    }

    #[test]
    fn test_sitemap_without_metadata() {
        let sitemap = Sitemap::new(vec![UrlEntry::new(url("https://example.com/about"))]);
        let xml = sitemap.render();

        assert!(xml.contains("<url>\n<loc>https://example.com/about</loc>\n</url>"));
        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<changefreq>"));
        assert!(!xml.contains("<priority>"));
    }

    #[test]
    fn test_sitemap_preserves_order() {
        let sitemap: Sitemap = ["c", "a", "b"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                UrlEntry::new(url(&format!("https://example.com/{name}")))
                    .with_priority(1.0 - i as f32 / 10.0)
            })
            .collect();
        let xml = sitemap.render();

        let c = xml.find("/c</loc>").unwrap();
        let a = xml.find("/a</loc>").unwrap();
        let b = xml.find("/b</loc>").unwrap();
        assert!(c < a && a < b);
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
    }

    #[test]
    fn test_sitemap_blocks_joined_by_newline() {
        let sitemap = Sitemap::new(vec![
            UrlEntry::new(url("https://example.com/a")),
            UrlEntry::new(url("https://example.com/b")),
        ]);
        let xml = sitemap.render();
        assert!(xml.contains("</url>\n<url>"));
        assert!(xml.ends_with("</url>\n</urlset>"));
    }

    #[test]
    fn test_sitemap_is_deterministic() {
        let build = || {
            Sitemap::new(vec![
                UrlEntry::new(url("https://example.com/x")).with_priority(0.5),
                UrlEntry::new(url("https://example.com/y"))
                    .with_change_frequency(ChangeFrequency::Daily),
            ])
        };
        assert_eq!(build().render(), build().render());
        assert_eq!(render(&build()), build().render());
    }

    #[test]
    fn test_sitemap_escapes_ampersand() {
        let sitemap = Sitemap::new(vec![UrlEntry::new(url(
            "https://example.com/search?q=a&b=c",
        ))]);
        let xml = sitemap.render();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
        assert_well_formed(&xml);
    }

    #[test]
    fn test_priority_formatting() {
        let xml = Sitemap::new(vec![
            UrlEntry::new(url("https://example.com/one")).with_priority(1.0),
            UrlEntry::new(url("https://example.com/zero")).with_priority(0.0),
            UrlEntry::new(url("https://example.com/big")).with_priority(2.5),
        ])
        .render();

        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.0</priority>"));
        // out-of-range values are written as-is
        assert!(xml.contains("<priority>2.5</priority>"));
    }

    #[test]
    fn test_from_pages_uses_router_and_order() {
        let base = url("https://example.com/");
        let pages = vec![
            ("home", Metadata::EMPTY.with_priority(1.0)),
            ("blog/", Metadata::EMPTY.with_change_frequency(ChangeFrequency::Daily)),
            ("about", Metadata::EMPTY),
        ];
        let sitemap = Sitemap::from_pages(pages, |page| base.join(page).unwrap());

        let locations: Vec<_> = sitemap
            .urls()
            .iter()
            .map(|entry| entry.location().as_str())
            .collect();
        assert_eq!(
            locations,
            [
                "https://example.com/home",
                "https://example.com/blog/",
                "https://example.com/about"
            ]
        );
        assert_eq!(
            sitemap.urls()[1].metadata().change_frequency(),
            Some(ChangeFrequency::Daily)
        );
    }

    #[test]
    fn test_minify_xml() {
        let xml = Sitemap::new(vec![UrlEntry::new(url("https://example.com/"))]).render();
        let minified = minify_xml(&xml, true);

        assert_eq!(
            minified,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"><url><loc>https://example.com/</loc></url></urlset>"
        );
        assert_well_formed(&minified);
        assert_eq!(minify_xml(&xml, false), xml);
    }
}
