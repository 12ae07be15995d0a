//! Configuration for neo-keygen.
//!
//! Values come from, in increasing precedence: built-in defaults, the TOML file
//! named by `--config`, and command-line flags (or their environment variables).
//! No setting carries secret material.

use anyhow::{Context, Result};
use neo_type::CheckSigLayout;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::args::CliArgs;

pub const DEFAULT_KEY_FILE: &str = ".env";
pub const DEFAULT_WIF_VAR: &str = "NEO_WALLET_PRIVATE_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeygenConfig {
    /// Key file path
    pub out: PathBuf,
    /// Verification script template
    pub layout: CheckSigLayout,
    /// Environment variable `decode-wif` reads the WIF from
    pub wif_var: String,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_KEY_FILE),
            layout: CheckSigLayout::default(),
            wif_var: DEFAULT_WIF_VAR.to_string(),
        }
    }
}

impl KeygenConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the effective configuration for `args`.
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(out) = &args.out {
            config.out = out.clone();
        }

        if let Some(layout) = args.layout {
            config.layout = layout.into();
        }

        if let Some(wif_var) = &args.wif_var {
            config.wif_var = wif_var.clone();
        }

        Ok(config)
    }
}
