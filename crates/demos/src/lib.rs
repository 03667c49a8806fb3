//! Shared plumbing for the demo binaries: config files and population loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use lb_core::Player;
use lb_offline::OfflineConfig;
use lb_online::OnlineConfig;
use lb_sources::{JsonLinesPlayerStream, PlayerStream, SyntheticConfig, SyntheticPlayers};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub synthetic: SyntheticConfig,
    pub offline: OfflineConfig,
    pub online: OnlineConfig,
}

impl DemoConfig {
    /// Reads a JSON config file, or falls back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let cfg = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing config {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }
}

/// Where the demo population comes from.
pub enum PopulationSource {
    Synthetic(SyntheticConfig),
    JsonLines(PathBuf),
}

impl PopulationSource {
    pub fn new(input: Option<PathBuf>, synthetic: SyntheticConfig) -> Self {
        match input {
            Some(path) => Self::JsonLines(path),
            None => Self::Synthetic(synthetic),
        }
    }

    pub fn open(self) -> Result<Box<dyn PlayerStream>> {
        match self {
            Self::Synthetic(cfg) => {
                let mut generator = SyntheticPlayers::new(cfg).context("building synthetic generator")?;
                Ok(Box::new(generator.stream()))
            }
            Self::JsonLines(path) => {
                let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
                let stream = JsonLinesPlayerStream::from_reader(BufReader::new(file))
                    .with_context(|| format!("reading players from {}", path.display()))?;
                Ok(Box::new(stream))
            }
        }
    }

    pub fn load_all(self) -> Result<Vec<Player>> {
        let mut stream = self.open()?;
        let mut players = Vec::with_capacity(stream.remaining());
        while stream.remaining() > 0 {
            players.push(stream.next_player()?);
        }
        Ok(players)
    }
}
