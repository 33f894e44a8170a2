//! Intake Validator
//!
//! Turns a raw transport submission into a validated precursor of an
//! `AnalysisRequest`. Checks run in a fixed order: risk tolerance present,
//! risk tolerance supported, at least one file, every file under the size
//! ceiling. No side effects.

use crate::error::{AdvisorError, Result};
use crate::model::{RawSubmission, RiskTolerance, UploadedFile, MAX_FILE_SIZE_BYTES};

/// A submission that passed intake validation
///
/// Files are still raw bytes at this point; sanitization happens next.
#[derive(Clone, Debug)]
pub struct ValidatedSubmission {
    pub risk_tolerance: RiskTolerance,
    pub files: Vec<UploadedFile>,
}

/// Validate a raw submission
///
/// All files are size-checked before any is accepted; the first offending
/// file is the one reported.
pub fn validate(submission: RawSubmission) -> Result<ValidatedSubmission> {
    let raw_risk = submission
        .risk_tolerance
        .ok_or(AdvisorError::MissingRiskTolerance)?;

    let risk_tolerance = RiskTolerance::from_str(&raw_risk)
        .ok_or(AdvisorError::UnsupportedRiskTolerance(raw_risk))?;

    if submission.files.is_empty() {
        return Err(AdvisorError::NoFilesProvided);
    }

    for file in &submission.files {
        if file.bytes.len() > MAX_FILE_SIZE_BYTES {
            return Err(AdvisorError::FileTooLarge(file.name.clone()));
        }
    }

    Ok(ValidatedSubmission {
        risk_tolerance,
        files: submission.files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: usize) -> UploadedFile {
        UploadedFile {
            name: name.into(),
            bytes: vec![b'x'; size],
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = RawSubmission {
            risk_tolerance: Some("moderate".into()),
            files: vec![file("notes.txt", 10)],
        };
        let validated = validate(submission).unwrap();
        assert_eq!(validated.risk_tolerance, RiskTolerance::Moderate);
        assert_eq!(validated.files.len(), 1);
    }

    #[test]
    fn test_missing_risk_tolerance() {
        let submission = RawSubmission {
            risk_tolerance: None,
            files: vec![file("notes.txt", 10)],
        };
        assert!(matches!(
            validate(submission),
            Err(AdvisorError::MissingRiskTolerance)
        ));
    }

    #[test]
    fn test_unsupported_risk_tolerance() {
        let submission = RawSubmission {
            risk_tolerance: Some("extreme".into()),
            files: vec![file("notes.txt", 10)],
        };
        match validate(submission) {
            Err(AdvisorError::UnsupportedRiskTolerance(value)) => assert_eq!(value, "extreme"),
            other => panic!("expected UnsupportedRiskTolerance, got {other:?}"),
        }
    }

    #[test]
    fn test_no_files() {
        let submission = RawSubmission {
            risk_tolerance: Some("aggressive".into()),
            files: vec![],
        };
        assert!(matches!(validate(submission), Err(AdvisorError::NoFilesProvided)));
    }

    #[test]
    fn test_risk_tolerance_checked_before_files() {
        // Ordering: an unsupported risk value wins over an empty file list.
        let submission = RawSubmission {
            risk_tolerance: Some("yolo".into()),
            files: vec![],
        };
        assert!(matches!(
            validate(submission),
            Err(AdvisorError::UnsupportedRiskTolerance(_))
        ));
    }

    #[test]
    fn test_oversized_file_reports_first_offender() {
        let submission = RawSubmission {
            risk_tolerance: Some("conservative".into()),
            files: vec![
                file("small.txt", 128),
                file("big-one.pdf", MAX_FILE_SIZE_BYTES + 1),
                file("bigger.pdf", MAX_FILE_SIZE_BYTES * 2),
            ],
        };
        match validate(submission) {
            Err(AdvisorError::FileTooLarge(name)) => assert_eq!(name, "big-one.pdf"),
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_file_at_exact_limit_accepted() {
        let submission = RawSubmission {
            risk_tolerance: Some("moderate".into()),
            files: vec![file("edge.txt", MAX_FILE_SIZE_BYTES)],
        };
        assert!(validate(submission).is_ok());
    }
}
