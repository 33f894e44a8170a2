//! Analysis Requester
//!
//! Drives one submission through the completion pipeline:
//!
//! ```text
//! NoCredential ──────────────────────────▶ Fallback (static)
//! Credentialed ──▶ Requesting ──▶ Success(parsed)
//!                      │
//!                      ├─ ParseFailure ──▶ Fallback (static)
//!                      └─ TransportFailure ─▶ user-facing 500
//! ```
//!
//! Exactly one outbound call per submission, or zero in the no-credential
//! branch. No retries; resubmitting is the retry.

use std::sync::Arc;

use advisor_core::{
    build_prompt, fallback_result, parse_result, AnalysisRequest, AnalysisResult, ParseOutcome,
    Result,
};

use crate::completion::{CompletionProvider, SchemaConstraint};

/// The analysis request pipeline
///
/// Holds the (optional) completion provider as an explicit dependency, so
/// the credential state is visible rather than read from the environment
/// deep inside the call.
pub struct AnalysisRequester {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl AnalysisRequester {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    /// Whether a real completion provider is configured
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Run one analysis
    ///
    /// Returns `Ok` with either the service's parsed result or the fixed
    /// fallback; a transport/service failure is the only `Err` path.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let prompt = build_prompt(request);

        let Some(provider) = &self.provider else {
            tracing::info!("no completion credential configured, serving fallback analysis");
            return Ok(fallback_result());
        };

        let schema = SchemaConstraint::portfolio_review();

        // Transport failures propagate: the caller gets a retryable error,
        // never a silently substituted result.
        let payload = provider.complete(&prompt, &schema).await.inspect_err(|e| {
            tracing::error!(provider = provider.name(), "portfolio analysis failed: {e}");
        })?;

        match parse_result(&payload) {
            ParseOutcome::Parsed(result) => Ok(result),
            ParseOutcome::Malformed(reason) => {
                tracing::error!(
                    provider = provider.name(),
                    payload = %payload,
                    "failed to parse completion payload ({reason}), serving fallback analysis"
                );
                Ok(fallback_result())
            }
        }
    }
}
