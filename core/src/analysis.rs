use serde::{Deserialize, Serialize};

use crate::case::model::Case;
use crate::case::repository::CaseRepository;
use crate::error::CoreResult;

/// Findings reported by every analysis run. The analysis is a placeholder: it
/// fabricates the same two findings no matter which case it is pointed at.
pub const ANALYSIS_FINDINGS: [&str; 2] = ["Fingerprint", "DNA Sample"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisOutput {
    pub case_id: String,
    pub evidence_collected: Vec<String>,
}

impl AnalysisOutput {
    pub fn summary(&self) -> String {
        format!(
            "Analysis for Case ID {} is complete. Evidence collected: {}",
            self.case_id,
            self.evidence_collected.join(", ")
        )
    }
}

/// Records a fresh case holding the fixed findings and persists it through
/// the repository. Nothing checks for an existing case with the same id:
/// analyzing an id twice appends two entries.
pub fn run_case_analysis(repo: &mut CaseRepository, case_id: &str) -> CoreResult<AnalysisOutput> {
    let mut case = Case::new(case_id);
    for finding in ANALYSIS_FINDINGS {
        case.add_evidence(finding);
    }
    repo.add_case(case)?;
    Ok(AnalysisOutput {
        case_id: case_id.to_string(),
        evidence_collected: ANALYSIS_FINDINGS.iter().map(|s| s.to_string()).collect(),
    })
}
