//! Configuration management for intelcard

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::Path;

impl Config {
    /// Load configuration from ~/.config/intelcard/config.toml, or return
    /// defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }
}
