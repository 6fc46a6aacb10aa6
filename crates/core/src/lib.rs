#![warn(clippy::all, missing_docs)]

//! Core domain logic for simscope.
//!
//! This crate hosts the SIM/network snapshot models, the carrier-data
//! API client, the roaming classification rules, and the report
//! rendering used by the command-line shell and any future frontends.

pub mod carrier;
pub mod config;
pub mod models;
pub mod report;
pub mod snapshot;

pub use carrier::{CarrierApi, CarrierProfile, FetchError, ProfileSource, StaticProfiles};
pub use config::AppConfig;
pub use models::{CardInfo, CardKind, NetworkInfo, RadioLink};
pub use report::{
    classify_coverage, classify_national_roaming, describe_current_card, describe_roaming,
    Coverage, NationalRoaming,
};
pub use snapshot::DeviceSnapshot;
