//! Symptom chat with the transcript kept on the client.
//!
//! The relay is stateless: each turn sends only the newest message. The
//! transcript exists purely for display.

use crate::relay::RelayClient;
use crate::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub content: String,
    /// Set on assistant turns.
    pub map_url: Option<String>,
    pub facility_type: Option<String>,
}

pub struct SymptomChat {
    client: RelayClient,
    address: String,
    messages: Vec<ChatEntry>,
}

impl SymptomChat {
    pub fn new(client: RelayClient) -> Self {
        Self {
            client,
            address: String::new(),
            messages: Vec::new(),
        }
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn messages(&self) -> &[ChatEntry] {
        &self.messages
    }

    /// Send one symptom description and append both turns.
    ///
    /// On a relay failure the user turn stays in the transcript and no
    /// assistant turn is added.
    pub async fn send(&mut self, input: &str) -> Result<&ChatEntry, ClientError> {
        if input.trim().is_empty() {
            return Err(ClientError::MissingSymptoms);
        }
        if self.address.trim().is_empty() {
            return Err(ClientError::MissingAddress);
        }

        self.messages.push(ChatEntry {
            role: ChatRole::User,
            content: input.to_string(),
            map_url: None,
            facility_type: None,
        });

        let analysis = self.client.analyze_symptoms(input, &self.address).await?;

        self.messages.push(ChatEntry {
            role: ChatRole::Assistant,
            content: analysis.analysis,
            map_url: Some(analysis.map_url),
            facility_type: Some(analysis.facility_type),
        });

        Ok(&self.messages[self.messages.len() - 1])
    }
}
