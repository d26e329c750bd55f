//! CLI subcommand implementations.

pub mod breeds;
pub mod images;
