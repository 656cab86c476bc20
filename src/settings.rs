use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "SVGATTR";

pub const DEFAULT_REFERENCE_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute";
const DEFAULT_CACHE_DIR: &str = "cache";
const DEFAULT_SNAPSHOT_PATH: &str = "data/attributes.html";
const DEFAULT_DATASET_PATH: &str = "data/attributes.json";

/// Runtime settings. Every key can be overridden with a `SVGATTR_<KEY>` variable.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub reference_url: String,
    pub cache_dir: PathBuf,
    pub snapshot_path: PathBuf,
    pub dataset_path: PathBuf,
    pub user_agent: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let user_agent = format!("svg_attr_scraper/{}", env!("CARGO_PKG_VERSION"));
        Config::builder()
            .set_default("reference_url", DEFAULT_REFERENCE_URL)?
            .set_default("cache_dir", DEFAULT_CACHE_DIR)?
            .set_default("snapshot_path", DEFAULT_SNAPSHOT_PATH)?
            .set_default("dataset_path", DEFAULT_DATASET_PATH)?
            .set_default("user_agent", user_agent)?
            .add_source(env)
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

// ── Tests ──
