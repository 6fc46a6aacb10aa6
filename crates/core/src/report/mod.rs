//! Human-readable report rendering.
//!
//! Both operations classify a card/network pairing and return one line
//! per decision. An inactive card short-circuits everything: no field
//! beyond `active` is read.

mod roaming;

pub use roaming::{classify_coverage, classify_national_roaming, Coverage, NationalRoaming};

use tracing::warn;

use crate::carrier::ProfileSource;
use crate::models::{CardInfo, CardKind, NetworkInfo, RadioLink};

const INACTIVE_CARD: &str = "The SIM card is currently not in use (locked or not inserted).";

/// Describe the card and its current network without remote data.
pub fn describe_current_card(card: &CardInfo, network: &NetworkInfo) -> Vec<String> {
    if !card.active {
        return vec![INACTIVE_CARD.to_string()];
    }

    let mut lines = Vec::with_capacity(5);
    lines.push(format!(
        "The SIM card name is {}, with MCC/MNC {}/{}.",
        card.name, card.mcc, card.mnc
    ));
    lines.push(
        match card.kind {
            CardKind::Physical => "The card is a physical SIM.",
            CardKind::Embedded => "The card is an eSIM.",
            CardKind::Unknown => "This SIM card could not be identified.",
        }
        .to_string(),
    );
    lines.push(format!(
        "The card is connected to {}, with MCC/MNC {}/{}.",
        network.name, network.mcc, network.mnc
    ));
    lines.push(
        match network.radio_link() {
            RadioLink::Lte => "The card is currently connected on LTE.",
            RadioLink::NotConnected => "The card is currently not connected to the network.",
            RadioLink::OtherProtocol => {
                "The card is connected on another protocol (5G/3G/2G/GPRS...)."
            }
        }
        .to_string(),
    );
    if card.land == network.land {
        lines.push(format!(
            "Card and network are in the same country, ISO code {}.",
            card.land
        ));
    } else {
        lines.push(format!(
            "Card and network are in different countries, ISO codes {} vs {}.",
            card.land, network.land
        ));
    }
    lines
}

/// Describe the national and international roaming status of the card,
/// fetching the carrier profile from the given source.
pub async fn describe_roaming(
    card: &CardInfo,
    network: &NetworkInfo,
    source: &dyn ProfileSource,
) -> Vec<String> {
    if !card.active {
        return vec![INACTIVE_CARD.to_string()];
    }

    let profile = match source.fetch(&card.mcc, &card.mnc).await {
        Ok(profile) => profile,
        Err(err) => {
            warn!("carrier profile fetch failed: {err}");
            // A transport failure and a missing profile read the same here.
            return vec![format!(
                "Could not load carrier data. Either the connection is down or \
                 {}/{} is unknown to the carrier service.",
                card.mcc, card.mnc
            )];
        }
    };

    let national = classify_national_roaming(card, network, &profile);
    let coverage = classify_coverage(card, network, &profile);
    vec![national_roaming_line(&national), coverage_line(coverage)]
}

fn national_roaming_line(status: &NationalRoaming) -> String {
    match status {
        NationalRoaming::NoAgreement => {
            "The carrier has no national roaming agreement; compare card and network \
             MCC/MNC directly."
                .to_string()
        }
        NationalRoaming::AgreementUnknown => {
            "The carrier data does not say whether a national roaming agreement exists."
                .to_string()
        }
        NationalRoaming::Confirmed => {
            "The card is connected on the national roaming network.".to_string()
        }
        NationalRoaming::SpeedTestRequired(Some(mbps)) => format!(
            "The card may be on the national roaming network; confirm with a speed test \
             against the {mbps} Mbps ceiling."
        ),
        NationalRoaming::SpeedTestRequired(None) => {
            "The card may be on the national roaming network; confirm with a speed test \
             (no throughput ceiling provided)."
                .to_string()
        }
        NationalRoaming::OtherNetwork => {
            "The card is connected on another network (abroad or an exceptional national \
             network)."
                .to_string()
        }
        NationalRoaming::NotOnRoamingProtocol => {
            "The card is not connected on its national roaming protocol.".to_string()
        }
        NationalRoaming::InferredOn => {
            "The card is connected on the national roaming network (inferred from MCC/MNC)."
                .to_string()
        }
        NationalRoaming::InferredOff => {
            "The card is not connected on the national roaming network.".to_string()
        }
    }
}

fn coverage_line(coverage: Coverage) -> String {
    match coverage {
        Coverage::Home => "The card is in its home country.",
        Coverage::DataOnly => "The card is abroad; the country is included for data only.",
        Coverage::VoiceAndData => {
            "The card is abroad; the country is included for voice and data."
        }
        Coverage::VoiceOnly => "The card is abroad; the country is included for voice only.",
        Coverage::NotIncluded => "The card is abroad; the destination is not included.",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::{CarrierProfile, FetchError, StaticProfiles};
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl ProfileSource for FailingSource {
        async fn fetch(&self, mcc: &str, mnc: &str) -> Result<CarrierProfile, FetchError> {
            Err(FetchError::NotFound {
                mcc: mcc.to_string(),
                mnc: mnc.to_string(),
            })
        }
    }

    fn card(active: bool, kind: CardKind, land: &str) -> CardInfo {
        CardInfo {
            name: "Carrier".to_string(),
            mcc: "310".to_string(),
            mnc: "260".to_string(),
            land: land.to_string(),
            active,
            kind,
        }
    }

    fn network(mcc: &str, mnc: &str, land: &str, connected: &str) -> NetworkInfo {
        NetworkInfo {
            name: "Partner".to_string(),
            mcc: mcc.to_string(),
            mnc: mnc.to_string(),
            land: land.to_string(),
            connected: connected.to_string(),
        }
    }

    #[test]
    fn home_lte_physical_card_report() {
        let lines = describe_current_card(
            &card(true, CardKind::Physical, "US"),
            &network("310", "260", "US", "LTE"),
        );
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("physical SIM"));
        assert!(lines[3].contains("LTE"));
        assert!(lines[4].contains("same country"));
    }

    #[test]
    fn inactive_card_yields_a_single_line() {
        let lines = describe_current_card(
            &card(false, CardKind::Physical, "US"),
            &network("310", "260", "US", "LTE"),
        );
        assert_eq!(lines, vec![INACTIVE_CARD.to_string()]);
    }

    #[test]
    fn each_card_kind_is_reported_exactly_once() {
        for kind in [CardKind::Physical, CardKind::Embedded, CardKind::Unknown] {
            let lines =
                describe_current_card(&card(true, kind, "US"), &network("310", "260", "US", ""));
            let kind_lines = lines
                .iter()
                .filter(|line| {
                    line.contains("physical SIM")
                        || line.contains("eSIM")
                        || line.contains("could not be identified")
                })
                .count();
            assert_eq!(kind_lines, 1, "kind {kind:?} reported {kind_lines} times");
        }
    }

    #[test]
    fn country_comparison_is_symmetric() {
        let a = describe_current_card(
            &card(true, CardKind::Physical, "US"),
            &network("310", "260", "CA", "LTE"),
        );
        let b = describe_current_card(
            &card(true, CardKind::Physical, "CA"),
            &network("310", "260", "US", "LTE"),
        );
        assert!(a[4].contains("different countries"));
        assert!(b[4].contains("different countries"));
    }

    #[tokio::test]
    async fn inactive_card_skips_the_fetch() {
        let lines = describe_roaming(
            &card(false, CardKind::Embedded, "US"),
            &network("310", "260", "US", "LTE"),
            &FailingSource,
        )
        .await;
        assert_eq!(lines, vec![INACTIVE_CARD.to_string()]);
    }

    #[tokio::test]
    async fn fetch_failure_echoes_the_codes_and_stops() {
        let lines = describe_roaming(
            &card(true, CardKind::Embedded, "US"),
            &network("310", "260", "US", "LTE"),
            &FailingSource,
        )
        .await;
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("310/260"));
    }

    #[tokio::test]
    async fn no_agreement_still_evaluates_coverage() {
        let mut profile = CarrierProfile::bare("310", "260");
        profile.has_national_roaming_agreement = Some(false);
        profile.countries_voice_data.insert("CA".to_string());
        let source = StaticProfiles::from_profiles([profile]);

        let lines = describe_roaming(
            &card(true, CardKind::Embedded, "US"),
            &network("302", "720", "CA", "LTE"),
            &source,
        )
        .await;
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("no national roaming agreement"));
        assert!(lines[1].contains("voice and data"));
    }

    #[tokio::test]
    async fn coverage_priority_prefers_voice_and_data_over_voice() {
        // CA is listed for voice+data but not for data-only, so the
        // voice+data line must win.
        let mut profile = CarrierProfile::bare("310", "260");
        profile.has_national_roaming_agreement = Some(false);
        profile.countries_voice_data.insert("CA".to_string());
        profile.countries_voice.insert("CA".to_string());
        let source = StaticProfiles::from_profiles([profile]);

        let lines = describe_roaming(
            &card(true, CardKind::Embedded, "US"),
            &network("302", "720", "CA", "LTE"),
            &source,
        )
        .await;
        assert!(lines[1].contains("voice and data"));
    }

    #[tokio::test]
    async fn home_country_reports_home() {
        let profile = CarrierProfile::bare("310", "260");
        let source = StaticProfiles::from_profiles([profile]);

        let lines = describe_roaming(
            &card(true, CardKind::Embedded, "US"),
            &network("310", "260", "US", "LTE"),
            &source,
        )
        .await;
        assert!(lines[1].contains("home country"));
    }
}
