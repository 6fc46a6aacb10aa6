//! National and international roaming classification rules.

use crate::carrier::CarrierProfile;
use crate::models::{CardInfo, NetworkInfo};

/// Outcome of the national-roaming check.
#[derive(Debug, Clone, PartialEq)]
pub enum NationalRoaming {
    /// The carrier has no national roaming agreement; card and network
    /// MCC/MNC can be compared directly instead.
    NoAgreement,
    /// The remote record does not say whether an agreement exists.
    AgreementUnknown,
    /// Connected on the declared roaming protocol with matching codes.
    Confirmed,
    /// Codes match but a femtocell may run on the roaming protocol; a
    /// throughput measurement against the given ceiling (Mbps) is needed
    /// to confirm.
    SpeedTestRequired(Option<f64>),
    /// On the roaming protocol but attached to a different network,
    /// abroad or an exceptional national one.
    OtherNetwork,
    /// Not connected on the declared national roaming protocol.
    NotOnRoamingProtocol,
    /// Agreement undeclared; the MCC/MNC inference says the card is on
    /// the partner network.
    InferredOn,
    /// Agreement undeclared; the MCC/MNC inference says the card is not
    /// on the partner network.
    InferredOff,
}

/// Outcome of the international coverage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Card and network share the same ISO country code.
    Home,
    /// Abroad, destination included for data only.
    DataOnly,
    /// Abroad, destination included for voice and data.
    VoiceAndData,
    /// Abroad, destination included for voice only.
    VoiceOnly,
    /// Abroad, destination not included in the carrier's offer.
    NotIncluded,
}

/// Apply the national-roaming rules to a card/network pairing.
pub fn classify_national_roaming(
    card: &CardInfo,
    network: &NetworkInfo,
    profile: &CarrierProfile,
) -> NationalRoaming {
    match profile.has_national_roaming_agreement {
        Some(false) => return NationalRoaming::NoAgreement,
        None => return NationalRoaming::AgreementUnknown,
        Some(true) => {}
    }

    if profile.agreement_declared == Some(true) {
        let on_roaming_protocol = profile
            .roaming_protocol
            .as_deref()
            .map(|protocol| network.connected == protocol)
            .unwrap_or(false);
        if !on_roaming_protocol {
            return NationalRoaming::NotOnRoamingProtocol;
        }

        let codes_match = network.mcc == profile.mcc
            && profile.chased_mnc.as_deref() == Some(network.mnc.as_str());
        if !codes_match {
            return NationalRoaming::OtherNetwork;
        }

        // An unknown femtocell flag cannot rule a femtocell out, so it
        // needs throughput confirmation just like a known one.
        match profile.femtocell_on_roaming_protocol {
            Some(false) => NationalRoaming::Confirmed,
            Some(true) | None => {
                NationalRoaming::SpeedTestRequired(profile.max_roaming_speed_mbps)
            }
        }
    } else {
        // Undeclared agreement: fall back to the plain MCC/MNC inference.
        if card.mcc == network.mcc && card.mnc != network.mnc {
            NationalRoaming::InferredOn
        } else {
            NationalRoaming::InferredOff
        }
    }
}

/// Apply the coverage rules: home first, then the included-country sets
/// in priority order data, voice+data, voice. First match wins.
pub fn classify_coverage(
    card: &CardInfo,
    network: &NetworkInfo,
    profile: &CarrierProfile,
) -> Coverage {
    if network.land == card.land {
        return Coverage::Home;
    }

    if profile.countries_data.contains(&network.land) {
        Coverage::DataOnly
    } else if profile.countries_voice_data.contains(&network.land) {
        Coverage::VoiceAndData
    } else if profile.countries_voice.contains(&network.land) {
        Coverage::VoiceOnly
    } else {
        Coverage::NotIncluded
    }
}
