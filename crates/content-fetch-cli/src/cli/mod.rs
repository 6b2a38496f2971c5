//! CLI subcommand implementations for the content-fetch binary.

pub mod fetch_cmd;
pub mod output;
pub mod plan_cmd;
pub mod show_cmd;
