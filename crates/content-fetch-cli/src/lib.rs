//! content-fetch CLI — configuration and subcommands behind the `content-fetch` binary.

pub mod cli;
pub mod config;

pub use config::resolve_base_url;
