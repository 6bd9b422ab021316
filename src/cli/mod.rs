//! Command-line interface module.

mod args;
pub mod build;
pub mod links;
pub mod route;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands, RouteArgs};
