//! Countries Entity Module

pub mod country;

pub use country::Country;
