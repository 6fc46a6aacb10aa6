//! Remote carrier-data service integration.

mod client;
mod profile;

pub use client::{CarrierApi, FetchError, ProfileSource, StaticProfiles};
pub use profile::CarrierProfile;
