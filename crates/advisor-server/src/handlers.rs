//! HTTP Handlers

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use advisor_core::{
    intake, sanitize, AdvisorError, AnalysisRequest, AnalysisResult, Document, RawSubmission,
    Result, UploadedFile,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub completion_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        completion_configured: state.requester.is_configured(),
    })
}

/// Portfolio rating endpoint
///
/// Accepts multipart form data with a `riskTolerance` field and one or more
/// `files` parts. Validation failures are 400s, transport failures toward
/// the completion service are 500s, everything else (including both fallback
/// modes) is a 200 carrying an `AnalysisResult`.
pub async fn rate_portfolio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> std::result::Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
    let submission = read_submission(multipart).await.map_err(error_response)?;

    let validated = intake::validate(submission).map_err(error_response)?;

    let request = AnalysisRequest {
        risk_tolerance: validated.risk_tolerance,
        documents: documents_from(validated.files),
    };

    let result = state
        .requester
        .analyze(&request)
        .await
        .map_err(error_response)?;

    Ok(Json(result))
}

// ============================================================================
// Helpers
// ============================================================================

/// Decode the multipart body into a raw submission
///
/// Unknown fields are ignored. File parts keep their upload order so prompt
/// labels ("Document 1", "Document 2", ...) stay stable.
async fn read_submission(mut multipart: Multipart) -> Result<RawSubmission> {
    let mut submission = RawSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AdvisorError::Submission(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("riskTolerance") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AdvisorError::Submission(e.to_string()))?;
                submission.risk_tolerance = Some(value);
            }
            Some("files") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AdvisorError::Submission(e.to_string()))?;
                submission.files.push(UploadedFile {
                    name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(submission)
}

/// Sanitize uploaded files into prompt-ready documents, preserving order
///
/// Bytes are decoded as lossy UTF-8; binary uploads degrade to replacement
/// characters rather than failing the request.
fn documents_from(files: Vec<UploadedFile>) -> Vec<Document> {
    files
        .into_iter()
        .map(|file| Document {
            content: sanitize(&String::from_utf8_lossy(&file.bytes)),
            name: file.name,
        })
        .collect()
}

/// Map an advisor error onto the wire taxonomy
///
/// Validation failures are 400s with their own message; everything else is
/// a 500 with the fixed retry-suggesting message. The underlying cause is
/// logged, never exposed.
fn error_response(err: AdvisorError) -> (StatusCode, Json<ErrorResponse>) {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("portfolio analysis failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        let (status, Json(body)) = error_response(AdvisorError::NoFilesProvided);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.error,
            "Please upload at least one document describing the portfolio."
        );
    }

    #[test]
    fn test_oversized_file_response_names_the_file() {
        let (status, Json(body)) = error_response(AdvisorError::FileTooLarge("big.pdf".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "big.pdf exceeds the 5MB size limit.");
    }

    #[test]
    fn test_completion_errors_map_to_500_with_fixed_message() {
        let (status, Json(body)) =
            error_response(AdvisorError::Completion("socket hang up".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body.error,
            "We couldn't analyze the portfolio right now. Please retry in a moment or verify the server configuration."
        );
        assert!(!body.error.contains("socket hang up"));
    }

    #[test]
    fn test_documents_preserve_upload_order_and_sanitize() {
        let files = vec![
            UploadedFile {
                name: "a.txt".into(),
                bytes: b"first\0doc".to_vec(),
            },
            UploadedFile {
                name: "b.txt".into(),
                bytes: b"second doc".to_vec(),
            },
        ];
        let documents = documents_from(files);
        assert_eq!(documents[0].name, "a.txt");
        assert_eq!(documents[0].content, "first doc");
        assert_eq!(documents[1].name, "b.txt");
        assert_eq!(documents[1].content, "second doc");
    }

    #[test]
    fn test_binary_content_decodes_lossily() {
        let files = vec![UploadedFile {
            name: "blob.bin".into(),
            bytes: vec![0xff, 0xfe, b'o', b'k'],
        }];
        let documents = documents_from(files);
        assert!(documents[0].content.ends_with("ok"));
    }
}
