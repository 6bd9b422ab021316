//! Development server for the sitemap and favicon assets.
//!
//! Routes:
//! - `/<sitemap.path>`: the sitemap, rendered once at startup
//! - `/<favicon literal>`: the matching file from `favicon.dir`
//! - anything else: 404

mod lifecycle;
mod mime;
mod path;
mod response;

pub use lifecycle::setup_shutdown_handler;
pub use path::{Resolved, SiteRoutes};

use crate::config::SiteConfig;
use crate::sitemap::minify_xml;
use crate::{debug, log};
use anyhow::{Context, Result};
use lifecycle::is_shutdown;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Number of request worker threads
const WORKER_THREADS: usize = 4;

/// Everything a request handler needs, shared across workers.
struct Site {
    routes: SiteRoutes,
    sitemap_xml: Option<String>,
}

impl Site {
    fn new(config: &SiteConfig) -> Result<Self> {
        let sitemap_xml = if config.sitemap.enable {
            let xml = config.build_sitemap()?.render();
            Some(minify_xml(&xml, config.build.minify).into_owned())
        } else {
            None
        };

        Ok(Self {
            routes: SiteRoutes::new(config),
            sitemap_xml,
        })
    }
}

/// Bind the server and handle requests until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let site = Arc::new(Site::new(config)?);

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    if !config.favicon_dir().is_dir() {
        log!("warning"; "favicon dir {} does not exist", config.favicon_dir().display());
    }

    run_request_loop(&server, site)
}

fn run_request_loop(server: &Server, site: Arc<Site>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKER_THREADS)
        .build()
        .context("failed to create thread pool")?;

    for request in server.incoming_requests() {
        let site = Arc::clone(&site);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &site) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, site: &Site) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !response::is_get_or_head(&request) {
        return response::respond_method_not_allowed(request);
    }

    let resolved = site.routes.resolve(request.url());
    debug!("serve"; "{} {} -> {:?}", request.method(), request.url(), resolved);

    match resolved {
        Resolved::Sitemap => match &site.sitemap_xml {
            Some(xml) => response::respond_text(request, mime::types::XML, xml),
            None => response::respond_not_found(request),
        },
        Resolved::Favicon { route, file } if file.is_file() => {
            response::respond_file(request, &file, mime::for_route(route))
        }
        Resolved::Favicon { .. } | Resolved::NotFound => response::respond_not_found(request),
    }
}
