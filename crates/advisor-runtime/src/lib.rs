//! # advisor-runtime
//!
//! Completion providers and the analysis request pipeline.
//!
//! ## Providers
//!
//! - **OpenAI** (default): hosted completion with JSON-schema constrained
//!   output
//! - **Mock**: canned payloads for tests and credential-less demos
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::{AnalysisRequester, OpenAiProvider};
//!
//! let provider = OpenAiProvider::from_env().map(|p| Arc::new(p) as _);
//! let requester = AnalysisRequester::new(provider);
//! let result = requester.analyze(&request).await?;
//! ```

pub mod completion;
pub mod openai;
pub mod requester;

pub use completion::{CompletionProvider, MockCompletionProvider, SchemaConstraint};
pub use openai::{OpenAiConfig, OpenAiProvider};
pub use requester::AnalysisRequester;

// Re-export core types for convenience
pub use advisor_core::{
    AdvisorError, AnalysisRequest, AnalysisResult, Document, Rating, Result, RiskTolerance,
};
