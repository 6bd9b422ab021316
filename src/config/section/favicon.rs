//! `[favicon]` configuration.

use crate::favicon::{FaviconLinks, SvgIcons};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where favicon files live and how the head fragment links to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    /// Directory holding the asset files, named by their route literal.
    pub dir: PathBuf,
    pub apple_touch_icon: String,
    /// SVG icon for light mode (or the only SVG icon).
    pub light: String,
    /// Optional SVG icon for dark mode.
    pub dark: Option<String>,
    pub manifest: String,
    pub mask_icon: String,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        let links = FaviconLinks::default();
        Self {
            dir: "favicons".into(),
            apple_touch_icon: links.apple_touch_icon,
            light: links.icon.light,
            dark: links.icon.dark,
            manifest: links.manifest,
            mask_icon: links.mask_icon,
        }
    }
}

impl FaviconConfig {
    pub fn links(&self) -> FaviconLinks {
        FaviconLinks {
            icon: SvgIcons {
                light: self.light.clone(),
                dark: self.dark.clone(),
            },
            apple_touch_icon: self.apple_touch_icon.clone(),
            manifest: self.manifest.clone(),
            mask_icon: self.mask_icon.clone(),
        }
    }
}
