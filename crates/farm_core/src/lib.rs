#![forbid(unsafe_code)]

pub mod access;
pub mod availability;
pub mod booking;
pub mod payment;
pub mod session;

pub fn crate_bootstrapped() -> bool {
    true
}
