use crate::analysis::{self, AnalysisOutput};
use crate::auth::provider::User;
use crate::auth::session::CredentialGate;
use crate::case::model::Case;
use crate::case::repository::CaseRepository;
use crate::error::{CoreError, CoreResult};
use crate::policy::{evaluate_deletion_gate, DeletionGateInputs};

/// Owns the credential gate and the case repository for the process lifetime
/// and exposes the operations the interaction layer drives. Every operation
/// validates synchronously and leaves all state unchanged on failure.
pub struct CaseManager {
    gate: CredentialGate,
    repo: CaseRepository,
}

impl CaseManager {
    pub fn new(gate: CredentialGate, repo: CaseRepository) -> Self {
        Self { gate, repo }
    }

    pub fn login(&mut self, username: &str, password: &str) -> CoreResult<User> {
        self.gate.login(username, password)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.gate.current_user()
    }

    pub fn cases(&self) -> &[Case] {
        self.repo.cases()
    }

    pub fn case_details(&self, case_id: &str) -> CoreResult<&Case> {
        if case_id.is_empty() {
            return Err(CoreError::InvalidInput(
                "case id must not be empty".to_string(),
            ));
        }
        self.repo
            .find_by_id(case_id)
            .ok_or_else(|| CoreError::CaseNotFound(case_id.to_string()))
    }

    pub fn create_case(&mut self, case_id: &str) -> CoreResult<()> {
        self.repo.add_case(Case::new(case_id))
    }

    pub fn add_evidence(&mut self, case_id: &str, item: &str) -> CoreResult<()> {
        self.repo.add_evidence(case_id, item)
    }

    /// Gated delete. Check order is fixed: empty id, then existence, then the
    /// deletion gate, so a non-admin deleting a missing id sees the not-found
    /// answer rather than the authorization one.
    pub fn delete_case(&mut self, case_id: &str, entered_password: &str) -> CoreResult<()> {
        if case_id.is_empty() {
            return Err(CoreError::InvalidInput(
                "case id must not be empty".to_string(),
            ));
        }
        if self.repo.find_by_id(case_id).is_none() {
            return Err(CoreError::CaseNotFound(case_id.to_string()));
        }
        evaluate_deletion_gate(&DeletionGateInputs {
            requesting_user: self.gate.current_user(),
            entered_password,
            expected_password: self.gate.deletion_password(),
        })
        .map_err(CoreError::DeletionBlocked)?;
        self.repo.delete_case(case_id)
    }

    pub fn analyze_case(&mut self, case_id: &str) -> CoreResult<AnalysisOutput> {
        analysis::run_case_analysis(&mut self.repo, case_id)
    }
}
