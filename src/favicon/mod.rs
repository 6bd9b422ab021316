//! Favicon asset routes.
//!
//! Browsers and platforms request a fixed set of icon files from the site
//! root (`/favicon.ico`, `/apple-touch-icon.png`, ...). This module names
//! that set as a closed enum and maps request paths to it and back.
//!
//! | Item              | Purpose                                          |
//! |-------------------|--------------------------------------------------|
//! | `FaviconRoute`    | The 13 well-known assets and their literals      |
//! | `FaviconRouter`   | `parse` path -> route, `print` route -> path     |
//! | `FaviconLinks`    | `<link>` head fragment pointing at the assets    |
//!
//! Serving the bytes (file lookup, content type) is left to the caller; see
//! [`crate::cli::serve`] for one such caller.

mod links;
mod route;
mod router;

pub use links::{FaviconLinks, SvgIcons};
pub use route::{FaviconRoute, UnknownFaviconPath};
pub use router::{FaviconRouter, request_segment};
