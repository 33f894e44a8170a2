//! # advisor-core
//!
//! Domain logic for the portfolio rating service: intake validation,
//! document sanitization, prompt construction, the result schema, and the
//! deterministic fallback analysis.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  RawSubmission                                               │
//! │    │ intake::validate                                        │
//! │    ▼                                                         │
//! │  ValidatedSubmission ── sanitize ──▶ AnalysisRequest         │
//! │    │ prompt::build_prompt                                    │
//! │    ▼                                                         │
//! │  prompt string ──▶ completion service ──▶ schema::parse      │
//! │                         │ (no credential / malformed)        │
//! │                         ▼                                    │
//! │                   fallback::fallback_result                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure and synchronous; the outbound call and the HTTP
//! boundary live in `advisor-runtime` and `advisor-server`.

pub mod error;
pub mod fallback;
pub mod intake;
pub mod model;
pub mod prompt;
pub mod sanitize;
pub mod schema;

pub use error::{AdvisorError, Result};
pub use fallback::fallback_result;
pub use model::{
    AnalysisRequest, AnalysisResult, Document, RawSubmission, Rating, RiskTolerance, UploadedFile,
    MAX_FILE_SIZE_BYTES,
};
pub use prompt::build_prompt;
pub use sanitize::{sanitize, MAX_FILE_CHARACTERS};
pub use schema::{parse_result, result_schema, ParseOutcome, SCHEMA_NAME};
