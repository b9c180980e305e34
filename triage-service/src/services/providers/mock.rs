//! Mock provider for testing.

use super::{ChatMessage, ChatProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

enum Outcome {
    Reply(String),
    Fail(ProviderError),
}

/// Scripted provider that records every conversation it receives.
pub struct MockChatProvider {
    outcome: Outcome,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockChatProvider {
    /// Always answer with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reply(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Outcome::Fail(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    /// Messages from the most recent call.
    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail(err) => Err(err.clone()),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
