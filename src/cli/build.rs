//! `build` command: write the sitemap into the output directory.

use crate::config::SiteConfig;
use crate::sitemap::minify_xml;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Build sitemap if enabled.
///
/// Returns the written file, or `None` when the sitemap is disabled.
pub fn build_site(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.sitemap.enable {
        log!("sitemap"; "disabled, nothing to build");
        return Ok(None);
    }

    let sitemap = config.build_sitemap()?;
    debug!("sitemap"; "{} urls", sitemap.len());

    let xml = sitemap.render();
    let xml = minify_xml(&xml, config.build.minify);

    let sitemap_path = config.sitemap_output();
    if let Some(parent) = sitemap_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&sitemap_path, xml.as_bytes())
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    log!("sitemap"; "{}", sitemap_path.display());
    Ok(Some(sitemap_path))
}
