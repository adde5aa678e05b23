//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: `--addr`, `--origin`, `--data-dir` (applied by the CLI).
//! 2. **Environment variables**: `WGETSHARE_ADDR`, `WGETSHARE_ORIGIN`, `WGETSHARE_DATA_DIR`.
//! 3. **Config file**: `wgetshare.toml` in the data directory.
//! 4. **Compiled Defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `addr` | `127.0.0.1:8080` | Listen address for `wgetshare serve` |
//! | `origin` | unset | Public base URL used in generated links |
//! | `data_dir` | platform data dir | Where `code_shares/` lives |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "wgetshare.toml";
pub const STORE_DIRNAME: &str = "code_shares";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Address the HTTP server binds to.
    #[config(env = "WGETSHARE_ADDR", default = "127.0.0.1:8080")]
    pub addr: String,

    /// Public base URL for generated links, e.g. `https://share.example.com`.
    /// When absent the server uses the request's Host header.
    #[config(env = "WGETSHARE_ORIGIN")]
    pub origin: Option<String>,

    /// Root directory for stored snippets.
    #[config(env = "WGETSHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            origin: None,
            data_dir: None,
        }
    }
}

impl ShareConfig {
    /// Load env + `wgetshare.toml` from `data_dir` (if it exists) over defaults.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => Some(dir.to_path_buf()),
            None => default_data_dir(),
        };

        let mut builder = ShareConfig::builder().env();
        if let Some(dir) = &dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        let mut config = builder.load()?;

        if let Some(dir) = data_dir {
            config.data_dir = Some(dir.to_path_buf());
        }
        Ok(config)
    }

    /// The configured origin without trailing slashes, or `http://{addr}`.
    pub fn origin(&self) -> String {
        match self.origin.as_deref().map(str::trim) {
            Some(origin) if !origin.is_empty() => origin.trim_end_matches('/').to_string(),
            _ => format!("http://{}", self.addr),
        }
    }

    pub fn has_origin(&self) -> bool {
        self.origin
            .as_deref()
            .is_some_and(|o| !o.trim().is_empty())
    }

    /// Directory holding the per-snippet body and metadata files.
    pub fn store_dir(&self) -> PathBuf {
        let base = self
            .data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from(".wgetshare"));
        base.join(STORE_DIRNAME)
    }
}

fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "wgetshare", "wgetshare").map(|dirs| dirs.data_dir().to_path_buf())
}
