//! `route` command: classify request paths with the favicon router.

use crate::cli::RouteArgs;
use crate::favicon::{FaviconRoute, FaviconRouter, request_segment};
use crate::log;

/// One line of `route` output.
fn describe(path: &str, route: Option<FaviconRoute>) -> String {
    match route {
        Some(route) => format!("{path} -> {route} ({route:?})"),
        None => format!("{path} -> no match"),
    }
}

pub fn run_route(args: &RouteArgs) {
    let router = FaviconRouter::new();

    if args.all {
        for route in router.routes() {
            log!("route"; "/{} ({:?})", router.print(route), route);
        }
    }

    for path in &args.paths {
        let route = router.parse(request_segment(path));
        log!("route"; "{}", describe(path, route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe("/favicon.ico", Some(FaviconRoute::FaviconIco)),
            "/favicon.ico -> favicon.ico (FaviconIco)"
        );
        assert_eq!(describe("/index.html", None), "/index.html -> no match");
    }

    #[test]
    fn test_nested_path_does_not_match() {
        let router = FaviconRouter::new();
        assert_eq!(router.parse(request_segment("/icons/favicon.ico")), None);
        assert_eq!(
            router.parse(request_segment("/apple-touch-icon-precomposed.png")),
            Some(FaviconRoute::AppleTouchIconPrecomposedPng)
        );
    }
}
