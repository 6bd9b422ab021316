//! Configuration section definitions.
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Base URL pages resolve against                 |
//! | `[build]`   | Output directory, minification                 |
//! | `[sitemap]` | Sitemap toggle, file name, `[[sitemap.pages]]` |
//! | `[favicon]` | Asset directory and `<link>` hrefs             |
//! | `[serve]`   | Development server address                     |

mod build;
mod favicon;
mod serve;
mod site;
mod sitemap;

pub use build::BuildConfig;
pub use favicon::FaviconConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use sitemap::{PageConfig, SitemapConfig};
