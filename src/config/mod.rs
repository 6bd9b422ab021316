//! Site configuration management for `siteparts.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # [site], [build], [sitemap], [favicon], [serve]
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # config file discovery
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! The loaded [`SiteConfig`] is an immutable value passed by reference to
//! whatever needs it; there is no global config handle.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//!
//! [build]
//! output = "public"
//!
//! [[sitemap.pages]]
//! path = "/"
//! lastmod = "2024-01-15"
//! changefreq = "weekly"
//! priority = 0.8
//!
//! [favicon]
//! dir = "favicons"
//! dark = "/favicon-dark.svg"
//! ```

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{
    BuildConfig, FaviconConfig, PageConfig, ServeConfig, SiteSectionConfig, SitemapConfig,
};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::sitemap::Sitemap;
use crate::{debug, log};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing siteparts.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub favicon: FaviconConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. `build` requires it;
    /// other commands fall back to defaults rooted at cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None if cli.is_build() => {
                return Err(ConfigError::NotFound(cli.config.clone()).into());
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);

        if cli.is_build() || cli.is_serve() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // paths
    // ========================================================================

    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    pub fn favicon_dir(&self) -> &Path {
        &self.favicon.dir
    }

    /// Where `build` writes the sitemap.
    pub fn sitemap_output(&self) -> PathBuf {
        self.build.output.join(&self.sitemap.path)
    }

    /// URL path the server answers with the sitemap (no leading slash).
    pub fn sitemap_url_path(&self) -> String {
        self.sitemap
            .path
            .to_string_lossy()
            .replace('\\', "/")
            .trim_start_matches('/')
            .to_string()
    }

    // ========================================================================
    // sitemap
    // ========================================================================

    /// Resolve `[[sitemap.pages]]` against `site.url` into a document.
    pub fn build_sitemap(&self) -> Result<Sitemap> {
        let base = self
            .site
            .base_url()
            .ok_or_else(|| anyhow!("`site.url` is required to build a sitemap"))?;
        self.sitemap
            .to_sitemap(&base)
            .with_context(|| format!("Failed to resolve sitemap pages against {base}"))
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Resolve paths against the root and apply command-line overrides.
    fn finalize(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        self.build.output = self.root_join(&self.build.output);
        self.favicon.dir = self.root_join(&self.favicon.dir);

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                self.apply_serve_options(*interface, *port);
            }
            Commands::Route { .. } | Commands::Links => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.sitemap.enable, args.sitemap.as_ref());

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    fn apply_serve_options(&mut self, interface: Option<IpAddr>, port: Option<u16>) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());

        // Local development: pages resolve against the dev server
        if self.site.url.is_none() {
            let addr = SocketAddr::new(self.serve.interface, self.serve.port);
            self.site.url = Some(format!("http://{addr}"));
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors before failing.
    ///
    /// Warnings are printed; errors are returned as
    /// [`ConfigError::Diagnostics`].
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(self.sitemap.enable, &mut diag);
        self.sitemap
            .validate(self.site.base_url().as_ref(), &mut diag);
        diag
    }
}

// ============================================================================
// tests
// ============================================================================
