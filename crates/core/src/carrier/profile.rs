#![allow(missing_docs)]

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remote carrier record keyed by MCC/MNC.
///
/// Fields absent from the service response stay `None`. "Unknown" is a
/// distinct state from `false` and callers must not collapse the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierProfile {
    /// Mobile Country Code of the home carrier.
    pub mcc: String,
    /// Mobile Network Code of the home carrier.
    pub mnc: String,
    /// Whether the carrier has a national roaming agreement at all.
    #[serde(default)]
    pub has_national_roaming_agreement: Option<bool>,
    /// Whether the carrier has publicly declared that agreement.
    #[serde(default)]
    pub agreement_declared: Option<bool>,
    /// MNC to look for on the partner network when the agreement is declared.
    #[serde(default)]
    pub chased_mnc: Option<String>,
    /// Protocol most likely used on the home network.
    #[serde(default)]
    pub home_protocol: Option<String>,
    /// Protocol most likely used on the national roaming network.
    #[serde(default)]
    pub roaming_protocol: Option<String>,
    /// Whether a femtocell network runs on the same protocol as the
    /// national roaming network.
    #[serde(default)]
    pub femtocell_on_roaming_protocol: Option<bool>,
    /// Throughput ceiling of the national roaming network, in Mbps.
    #[serde(default)]
    pub max_roaming_speed_mbps: Option<f64>,
    /// ISO country codes included for data only.
    #[serde(default)]
    pub countries_data: BTreeSet<String>,
    /// ISO country codes included for voice and data.
    #[serde(default)]
    pub countries_voice_data: BTreeSet<String>,
    /// ISO country codes included for voice only.
    #[serde(default)]
    pub countries_voice: BTreeSet<String>,
    /// Stamped by the client when the profile was received.
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CarrierProfile {
    /// Minimal profile carrying only the identifying codes. Everything else
    /// starts out unknown.
    pub fn bare(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
            has_national_roaming_agreement: None,
            agreement_declared: None,
            chased_mnc: None,
            home_protocol: None,
            roaming_protocol: None,
            femtocell_on_roaming_protocol: None,
            max_roaming_speed_mbps: None,
            countries_data: BTreeSet::new(),
            countries_voice_data: BTreeSet::new(),
            countries_voice: BTreeSet::new(),
            fetched_at: None,
        }
    }
}
