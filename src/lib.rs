//! Discovery of `.commit` scopes across a project tree.
//!
//! A scope is a filesystem location that opts into tool behavior by
//! containing a `.commit` marker directory, with optional settings in a
//! `config.yml` inside the marker. This crate walks a root directory, applies
//! the exclusion rules (hidden and `tmp` ancestors), and hands back a lazy
//! sequence of scopes, each carrying its resolved configuration.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod reporter;
pub mod scope;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use discovery::{ScopeResolver, discover};
pub use error::{Result, ScopeError};
pub use reporter::{
    DiscoveryReport, Reporter, json::JsonReporter, terminal::TerminalReporter,
};
pub use scope::{CONFIG_FILE, SCOPE_DIR, Scope};
