//! HTTP handlers for the triage relay.

pub mod analyze;
pub mod health;

pub use analyze::{analyze_skin, analyze_symptoms};
pub use health::health_check;
