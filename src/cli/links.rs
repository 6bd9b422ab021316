//! `links` command: print the favicon head fragment.

use crate::config::SiteConfig;

pub fn print_links(config: &SiteConfig) {
    println!("{}", config.favicon.links().render());
}
