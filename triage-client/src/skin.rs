//! Two-stage skin analysis: encode the image, then send it.
//!
//! The state moves `Idle -> Encoding -> Sending -> Settled` and is published
//! on a watch channel. The busy flag covers both stages and is cleared only
//! once the relay call has returned, whether it succeeded or not.

use std::path::Path;
use tokio::sync::watch;

use crate::relay::{RelayClient, SkinAnalysis};
use crate::upload::ImageUpload;
use crate::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Encoding,
    Sending,
    Settled(Outcome),
}

impl AnalysisState {
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalysisState::Encoding | AnalysisState::Sending)
    }
}

pub struct SkinAnalyzer {
    client: RelayClient,
    state: watch::Sender<AnalysisState>,
}

impl SkinAnalyzer {
    pub fn new(client: RelayClient) -> Self {
        let (state, _) = watch::channel(AnalysisState::Idle);
        Self { client, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AnalysisState {
        self.state.borrow().clone()
    }

    pub fn is_analyzing(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Analyze the image at `image`. Input checks run before the pipeline
    /// starts and leave the state untouched.
    pub async fn analyze(
        &self,
        image: Option<&Path>,
        address: &str,
    ) -> Result<SkinAnalysis, ClientError> {
        let image = image.ok_or(ClientError::NoImage)?;
        if address.trim().is_empty() {
            return Err(ClientError::MissingAddress);
        }
        self.begin()?;

        let result = self.run(image, address).await;

        let outcome = match &result {
            Ok(_) => Outcome::Succeeded,
            Err(e) => Outcome::Failed(e.to_string()),
        };
        self.state.send_replace(AnalysisState::Settled(outcome));

        result
    }

    /// Claim the pipeline, rejecting a second concurrent analysis.
    fn begin(&self) -> Result<(), ClientError> {
        let mut claimed = false;
        self.state.send_if_modified(|state| {
            if state.is_busy() {
                return false;
            }
            *state = AnalysisState::Encoding;
            claimed = true;
            true
        });

        if claimed {
            Ok(())
        } else {
            Err(ClientError::Busy)
        }
    }

    async fn run(&self, image: &Path, address: &str) -> Result<SkinAnalysis, ClientError> {
        let data_uri = ImageUpload::from_path(image).await?.to_data_uri();
        tracing::debug!(bytes = data_uri.len(), "Encoded image");

        self.state.send_replace(AnalysisState::Sending);
        self.client.analyze_skin(&data_uri, address).await
    }
}
