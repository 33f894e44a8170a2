//! Completion Provider Abstraction
//!
//! The single seam between the analysis pipeline and whatever hosted
//! completion service backs it. Implementations return the raw textual
//! payload; deciding whether it matches the result schema is the
//! requester's job.

mod mock;

pub use mock::MockCompletionProvider;

use async_trait::async_trait;
use serde_json::Value;

use advisor_core::{result_schema, Result, SCHEMA_NAME};

/// A named JSON-schema constraint sent along with a completion request
#[derive(Clone, Debug)]
pub struct SchemaConstraint {
    pub name: String,
    pub schema: Value,
}

impl SchemaConstraint {
    /// The `portfolio_review` constraint every analysis request carries
    pub fn portfolio_review() -> Self {
        Self {
            name: SCHEMA_NAME.into(),
            schema: result_schema(),
        }
    }
}

/// A hosted completion service
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt, constrained to the given schema, and return the
    /// service's textual payload
    async fn complete(&self, prompt: &str, schema: &SchemaConstraint) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
