//! Domain Models
//!
//! Request and result types for one portfolio rating submission. Everything
//! here is request-scoped: built when a submission arrives, dropped once the
//! response is delivered.

use serde::{Deserialize, Serialize};

/// Maximum accepted size for a single uploaded file, before sanitization
pub const MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Client-declared risk tolerance
///
/// Controls prompt framing only; never validated against the actual holdings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
    ExtremelyAggressive,
}

impl RiskTolerance {
    /// All supported values, in display order
    pub const ALL: [RiskTolerance; 4] = [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Aggressive,
        RiskTolerance::ExtremelyAggressive,
    ];

    /// Parse the wire value; `None` for anything outside the supported set
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "conservative" => Some(RiskTolerance::Conservative),
            "moderate" => Some(RiskTolerance::Moderate),
            "aggressive" => Some(RiskTolerance::Aggressive),
            "extremely-aggressive" => Some(RiskTolerance::ExtremelyAggressive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
            RiskTolerance::ExtremelyAggressive => "extremely-aggressive",
        }
    }

    /// Canned human-readable description interpolated into the prompt
    pub fn description(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => {
                "The client prefers stability and capital preservation. They accept lower returns in exchange for lower volatility."
            }
            RiskTolerance::Moderate => {
                "The client is comfortable with a balance of growth and protection. They can tolerate moderate fluctuations to pursue growth."
            }
            RiskTolerance::Aggressive => {
                "The client is willing to embrace meaningful volatility in pursuit of higher long-term appreciation."
            }
            RiskTolerance::ExtremelyAggressive => {
                "The client is focused on maximum growth and is comfortable with substantial drawdowns and concentrated exposures."
            }
        }
    }
}

/// A sanitized uploaded document
///
/// `name` is the original filename, used for prompt labeling and error
/// messages only; it is not a unique key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub content: String,
}

/// A validated analysis submission, consumed by the prompt builder
///
/// Document order preserves upload order so prompt labels stay stable.
#[derive(Clone, Debug)]
pub struct AnalysisRequest {
    pub risk_tolerance: RiskTolerance,
    pub documents: Vec<Document>,
}

/// One evaluation dimension in the analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rating {
    /// Dimension name, e.g. "Risk Alignment"
    pub axis: String,
    /// Short label like "Strong" or "Needs Attention"
    pub score: String,
    pub explanation: String,
}

/// The terminal output returned to the caller
///
/// Either produced by the completion service (and schema-validated) or
/// substituted wholesale by the fallback generator. Never partial.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub ratings: Vec<Rating>,
    pub suggestions: Vec<String>,
}

/// One file exactly as uploaded, before sanitization
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A raw submission as decoded from the transport, before validation
#[derive(Clone, Debug, Default)]
pub struct RawSubmission {
    pub risk_tolerance: Option<String>,
    pub files: Vec<UploadedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tolerance_round_trip() {
        for level in RiskTolerance::ALL {
            assert_eq!(RiskTolerance::from_str(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_unsupported_values_rejected() {
        assert_eq!(RiskTolerance::from_str("extreme"), None);
        assert_eq!(RiskTolerance::from_str("Conservative"), None);
        assert_eq!(RiskTolerance::from_str(""), None);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&RiskTolerance::ExtremelyAggressive).unwrap();
        assert_eq!(json, "\"extremely-aggressive\"");
    }

    #[test]
    fn test_analysis_result_serde() {
        let json = r#"{
            "summary": "Aligned overall.",
            "ratings": [{"axis": "Liquidity", "score": "Adequate", "explanation": "Cash on hand."}],
            "suggestions": ["Rebalance quarterly."]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ratings[0].axis, "Liquidity");
        assert_eq!(result.suggestions.len(), 1);
    }
}
