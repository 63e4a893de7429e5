//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded).

use std::path::PathBuf;

use anyhow::Context;
use pricing_core::PlanCatalog;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: String,

    /// Compiled frontend (`STATIC_DIR`)
    pub static_dir: PathBuf,

    /// Catalog file (`PRICING_CATALOG`); builtin catalog when unset
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
                .into(),
            catalog_path: get("PRICING_CATALOG").map(PathBuf::from),
        }
    }

    pub fn load_catalog(&self) -> anyhow::Result<PlanCatalog> {
        match &self.catalog_path {
            Some(path) => PlanCatalog::from_path(path)
                .with_context(|| format!("loading plan catalog from {}", path.display())),
            None => Ok(PlanCatalog::builtin()),
        }
    }
}
