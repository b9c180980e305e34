//! Domain models for the triage relay.

pub mod classification;

pub use classification::{Classification, Domain, FacilityType, Severity};
