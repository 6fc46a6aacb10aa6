//! SIM-card and network snapshot models.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifiers that mean the radio link is LTE. Snapshots may carry either
/// the bare protocol name or the CoreTelephony constant exported by iOS
/// capture tools.
static LTE_IDENTIFIERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["LTE", "CTRadioAccessTechnologyLTE"]));

/// Physical form of a SIM card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Removable plastic SIM.
    Physical,
    /// Embedded eSIM profile.
    Embedded,
    /// The card form could not be identified.
    Unknown,
}

fn default_kind() -> CardKind {
    CardKind::Unknown
}

/// Snapshot of a SIM card as reported by the local collaborator.
///
/// When `active` is false the card is locked or not inserted and none of
/// the other fields is trustworthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInfo {
    /// Carrier name stored on the card profile.
    pub name: String,
    /// Mobile Country Code.
    pub mcc: String,
    /// Mobile Network Code.
    pub mnc: String,
    /// 2-letter ISO country code of the home carrier.
    pub land: String,
    /// Whether the card is unlocked and currently in use.
    pub active: bool,
    /// Physical or embedded form.
    #[serde(default = "default_kind")]
    pub kind: CardKind,
}

/// Snapshot of the network the card is currently attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Operator name of the connected network.
    pub name: String,
    /// Mobile Country Code.
    pub mcc: String,
    /// Mobile Network Code.
    pub mnc: String,
    /// 2-letter ISO country code of the connected network.
    pub land: String,
    /// Radio access technology identifier, empty when not connected.
    #[serde(default)]
    pub connected: String,
}

/// Coarse state of the radio link derived from [`NetworkInfo::connected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioLink {
    /// Attached on LTE.
    Lte,
    /// No network attachment at all.
    NotConnected,
    /// Attached on some other protocol (5G/3G/2G/GPRS...).
    OtherProtocol,
}

impl NetworkInfo {
    /// Classify the raw `connected` identifier into a radio link state.
    pub fn radio_link(&self) -> RadioLink {
        if self.connected.is_empty() {
            RadioLink::NotConnected
        } else if LTE_IDENTIFIERS.contains(self.connected.as_str()) {
            RadioLink::Lte
        } else {
            RadioLink::OtherProtocol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(connected: &str) -> NetworkInfo {
        NetworkInfo {
            name: "Operator".to_string(),
            mcc: "208".to_string(),
            mnc: "01".to_string(),
            land: "FR".to_string(),
            connected: connected.to_string(),
        }
    }

    #[test]
    fn empty_identifier_means_not_connected() {
        assert_eq!(network("").radio_link(), RadioLink::NotConnected);
    }

    #[test]
    fn lte_identifiers_map_to_lte() {
        assert_eq!(network("LTE").radio_link(), RadioLink::Lte);
        assert_eq!(
            network("CTRadioAccessTechnologyLTE").radio_link(),
            RadioLink::Lte
        );
    }

    #[test]
    fn any_other_identifier_is_another_protocol() {
        assert_eq!(network("NRNSA").radio_link(), RadioLink::OtherProtocol);
        assert_eq!(network("WCDMA").radio_link(), RadioLink::OtherProtocol);
    }

    #[test]
    fn card_kind_defaults_to_unknown() {
        let card: CardInfo = serde_json::from_str(
            r#"{"name":"Carrier","mcc":"208","mnc":"01","land":"FR","active":true}"#,
        )
        .expect("card should parse without a kind field");
        assert_eq!(card.kind, CardKind::Unknown);
    }
}
