#![forbid(unsafe_code)]

pub mod config;
pub mod store;
pub mod telemetry;

pub fn infra_bootstrapped() -> bool {
    farm_core::crate_bootstrapped()
}
