//! Report document wrapping analysis results with metadata

use crate::processing::engine::MatchReport;
use crate::processing::requirements::Requirement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub report: MatchReport,

    /// Sentence-level requirement breakdown, present in detailed mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<Requirement>>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub language: String,
}

impl ReportDocument {
    pub fn new(
        report: MatchReport,
        requirements: Option<Vec<Requirement>>,
        language: &str,
    ) -> Self {
        Self {
            report,
            requirements,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                language: language.to_string(),
            },
        }
    }
}
