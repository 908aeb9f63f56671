//! Common functionality for gdp2asset.
#![warn(missing_docs)]
pub mod country;
pub mod demo;
pub mod exposure;
pub mod gdp;
pub mod id;
pub mod input;
pub mod log;
pub mod output;
pub mod settings;
pub mod units;

use anyhow::{Context, Result};
use std::path::PathBuf;

#[cfg(test)]
mod fixture;

/// Get the platform-specific directory in which program settings are stored.
pub fn get_config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine user config directory")?;
    Ok(dir.join("gdp2asset"))
}
