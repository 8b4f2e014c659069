//! The judgment record returned to the submission flow.

use serde::{Deserialize, Serialize};

/// Outcome of one assignment validity judgment.
///
/// Constructed once per call and never mutated. The submission flow reads
/// `is_valid` to decide whether to award points and shows `reason` and
/// `confidence` to the learner. Serialises with camelCase field names for
/// the web caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgment {
    /// Final classification.
    pub is_valid: bool,
    /// Clamped accumulated score in `[0, 100]`. A matching strength, not a
    /// calibrated probability.
    pub confidence: u8,
    /// The original OCR text, verbatim, for audit and display.
    pub detected_text: String,
    /// Names of registered courses found in the text, in roster order.
    pub matched_courses: Vec<String>,
    /// Human-readable Japanese explanation of the outcome.
    pub reason: String,
    /// ISO 8601 timestamp string.
    pub timestamp: String,
}

/// Display band for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// 70 and above, shown green.
    High,
    /// 40 to 69, shown yellow.
    Medium,
    /// Below 40, shown red.
    Low,
}

impl ConfidenceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Judgment {
    /// Band this record's confidence falls in.
    pub fn confidence_band(&self) -> ConfidenceBand {
        match self.confidence {
            70..=100 => ConfidenceBand::High,
            40..=69 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        }
    }
}
