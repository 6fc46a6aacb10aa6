//! Device snapshot documents handed over by the local collaborator.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CardInfo, NetworkInfo};

/// Card/network pair captured on the device at a single point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// The SIM card being inspected.
    pub card: CardInfo,
    /// The network that card is currently attached to.
    pub network: NetworkInfo,
    /// When the snapshot was taken, if the capture tool recorded it.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
}

impl DeviceSnapshot {
    /// Load a snapshot document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
        Ok(snapshot)
    }
}
