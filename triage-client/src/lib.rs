//! Client side of the triage relay.
//!
//! Mirrors what the browser does: encode the photo, post it with the address,
//! show the result. The skin pipeline publishes its state so a UI can keep
//! its busy indicator up until the request has actually settled.

pub mod chat;
pub mod error;
pub mod relay;
pub mod skin;
pub mod upload;

pub use chat::{ChatEntry, ChatRole, SymptomChat};
pub use error::ClientError;
pub use relay::{RelayClient, SkinAnalysis, SymptomAnalysis};
pub use skin::{AnalysisState, Outcome, SkinAnalyzer};
pub use upload::ImageUpload;
