//! Application State

use std::sync::Arc;

use advisor_runtime::AnalysisRequester;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis pipeline; carries `None` provider in the degraded,
    /// credential-less mode
    pub requester: Arc<AnalysisRequester>,
}
