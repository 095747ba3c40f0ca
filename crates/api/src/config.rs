//! Process configuration, read once from the environment at startup.
//!
//! - `STOCKDESK_ADDR`: bind address (default `0.0.0.0:8080`)
//! - `STOCKDESK_SEED_FILE`: JSON object `{ "name": quantity, ... }` replacing
//!   the built-in seed
//! - `STOCKDESK_LOG_FORMAT`: `json` (default) or `pretty`
//! - `RUST_LOG`: log filter

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use stockdesk_inventory::InventorySnapshot;
use stockdesk_observability::LogFormat;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub seed: InventorySnapshot,
    pub seed_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup("STOCKDESK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("STOCKDESK_ADDR is not a socket address: {raw_addr}"))?;

        let seed_file = lookup("STOCKDESK_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let seed = match &seed_file {
            Some(path) => load_seed_file(path)?,
            None => InventorySnapshot::seed(),
        };

        let log_format = match lookup("STOCKDESK_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(f) => f,
                None => bail!("STOCKDESK_LOG_FORMAT must be `json` or `pretty`, got {raw:?}"),
            },
        };

        Ok(Self {
            addr,
            seed,
            seed_file,
            log_format,
        })
    }

    /// Where the seed came from, for the startup log line.
    pub fn seed_source(&self) -> String {
        match &self.seed_file {
            Some(path) => format!("file {}", path.display()),
            None => "built-in".to_string(),
        }
    }
}

/// Read a seed snapshot from a JSON object of name → quantity.
pub fn load_seed_file(path: &Path) -> anyhow::Result<InventorySnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_seed(&raw).with_context(|| format!("invalid seed file {}", path.display()))
}

pub fn parse_seed(raw: &str) -> anyhow::Result<InventorySnapshot> {
    let entries: BTreeMap<String, i64> =
        serde_json::from_str(raw).context("expected a JSON object of name -> integer quantity")?;
    Ok(InventorySnapshot::from_signed_entries(entries)?)
}
