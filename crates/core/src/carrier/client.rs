//! Carrier profile sources: the HTTP client and a local-document fallback.

use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use super::profile::CarrierProfile;
use crate::config::AppConfig;

/// Failure modes of a profile fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("carrier API request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered but has no profile for this MCC/MNC.
    #[error("no carrier profile for {mcc}/{mnc}")]
    NotFound {
        /// Mobile Country Code that was requested.
        mcc: String,
        /// Mobile Network Code that was requested.
        mnc: String,
    },
    /// The service answered with an unexpected status code.
    #[error("carrier API returned status {status}")]
    Status {
        /// The status code of the response.
        status: reqwest::StatusCode,
    },
    /// The response body was not a valid profile document.
    #[error("failed to decode carrier profile: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Source of carrier profiles keyed by MCC/MNC.
///
/// The report layer only depends on this trait, so tests and offline runs
/// can substitute a local document for the live service.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for the given codes. A failed fetch is terminal
    /// for the invocation; no retries are performed here.
    async fn fetch(&self, mcc: &str, mnc: &str) -> Result<CarrierProfile, FetchError>;
}

/// HTTP client for the carrier-data service.
///
/// Successful responses are cached per (MCC, MNC) for the lifetime of the
/// client.
pub struct CarrierApi {
    base_url: String,
    client: reqwest::Client,
    cache: RwLock<HashMap<(String, String), CarrierProfile>>,
}

impl CarrierApi {
    /// Build a client from configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
            cache: RwLock::new(HashMap::new()),
        })
    }
}

#[async_trait]
impl ProfileSource for CarrierApi {
    async fn fetch(&self, mcc: &str, mnc: &str) -> Result<CarrierProfile, FetchError> {
        let key = (mcc.to_string(), mnc.to_string());
        if let Some(profile) = self.cache.read().get(&key) {
            return Ok(profile.clone());
        }

        let url = format!("{}/carriers/{}/{}", self.base_url, mcc, mnc);
        debug!("fetching carrier profile from {url}");
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                mcc: key.0,
                mnc: key.1,
            });
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        let mut profile: CarrierProfile =
            serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        profile.fetched_at = Some(Utc::now());
        self.cache.write().insert(key, profile.clone());
        Ok(profile)
    }
}

/// Profile source backed by a local JSON document.
///
/// The document is an array of profiles; lookups go by exact MCC/MNC.
pub struct StaticProfiles {
    profiles: HashMap<(String, String), CarrierProfile>,
}

impl StaticProfiles {
    /// Load profiles from a JSON array on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile document {}", path.display()))?;
        let profiles: Vec<CarrierProfile> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse profile document {}", path.display()))?;
        Ok(Self::from_profiles(profiles))
    }

    /// Build a source from profiles already in memory.
    pub fn from_profiles(profiles: impl IntoIterator<Item = CarrierProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| ((profile.mcc.clone(), profile.mnc.clone()), profile))
            .collect();
        Self { profiles }
    }
}

#[async_trait]
impl ProfileSource for StaticProfiles {
    async fn fetch(&self, mcc: &str, mnc: &str) -> Result<CarrierProfile, FetchError> {
        self.profiles
            .get(&(mcc.to_string(), mnc.to_string()))
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                mcc: mcc.to_string(),
                mnc: mnc.to_string(),
            })
    }
}
