//! Client for the third-party emissions-estimation service.

pub mod client;
pub mod request;

pub use client::{RemoteEstimator, RemoteSettings, DEFAULT_COUNTRY, DEFAULT_ENDPOINT};
pub use request::ElectricityEstimateRequest;
