//! Mock Completion Provider
//!
//! For testing and demo purposes. Returns a canned payload or a canned
//! transport failure instead of calling a real service.

use async_trait::async_trait;

use advisor_core::{AdvisorError, Result};

use super::{CompletionProvider, SchemaConstraint};

/// Mock completion provider with a fixed response
pub struct MockCompletionProvider {
    payload: std::result::Result<String, String>,
}

impl MockCompletionProvider {
    /// Always respond with the given payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Ok(payload.into()),
        }
    }

    /// Always fail with a transport error carrying the given cause
    pub fn failing(cause: impl Into<String>) -> Self {
        Self {
            payload: Err(cause.into()),
        }
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, _prompt: &str, _schema: &SchemaConstraint) -> Result<String> {
        match &self.payload {
            Ok(payload) => Ok(payload.clone()),
            Err(cause) => Err(AdvisorError::Completion(cause.clone())),
        }
    }

    fn name(&self) -> &str {
        "MockCompletion"
    }
}
