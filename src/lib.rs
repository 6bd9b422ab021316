//! Sitemap generation and favicon route classification.
//!
//! The two core pieces are independent and pure:
//!
//! - [`sitemap`]: render an ordered list of pages into a sitemaps.org 0.9
//!   document.
//! - [`favicon`]: map request paths to the closed set of well-known favicon
//!   assets and back.
//!
//! ```
//! use siteparts::favicon::{FaviconRoute, FaviconRouter};
//! use siteparts::sitemap::{ChangeFrequency, Sitemap, UrlEntry};
//! use url::Url;
//!
//! let sitemap = Sitemap::new(vec![
//!     UrlEntry::new(Url::parse("https://example.com/page1").unwrap())
//!         .with_change_frequency(ChangeFrequency::Weekly),
//! ]);
//! assert!(sitemap.render().contains("<changefreq>weekly</changefreq>"));
//!
//! let router = FaviconRouter::new();
//! assert_eq!(router.parse("favicon.svg"), Some(FaviconRoute::Svg));
//! ```
//!
//! The remaining modules make up the `siteparts` binary: TOML config, CLI
//! commands, a development server and the terminal logger.

pub mod cli;
pub mod config;
pub mod favicon;
pub mod logger;
pub mod sitemap;
