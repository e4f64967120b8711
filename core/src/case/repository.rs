use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::case::file;
use crate::case::model::Case;
use crate::error::{CoreError, CoreResult};

/// Ordered, file-backed collection of cases.
///
/// The list is loaded once at construction and the whole file is rewritten
/// after every mutation. There is no transactional guarantee: the rewrite is
/// in place, and a crash mid-write can corrupt the file.
pub struct CaseRepository {
    path: PathBuf,
    cases: Vec<Case>,
}

impl CaseRepository {
    /// Opens the repository at `path`, creating an empty case file (and its
    /// parent directories) if none exists. A file that cannot be read is
    /// logged and treated as empty; construction itself never fails.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cases = match load_or_create(&path) {
            Ok(cases) => cases,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not load case file, starting with an empty case list"
                );
                Vec::new()
            }
        };
        Self { path, cases }
    }

    /// Every case, in insertion order.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// First case whose id matches. Duplicate ids shadow later entries.
    pub fn find_by_id(&self, case_id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.case_id == case_id)
    }

    /// Appends a case and persists. Ids are not required to be unique.
    pub fn add_case(&mut self, case: Case) -> CoreResult<()> {
        if case.case_id.is_empty() {
            return Err(CoreError::InvalidInput(
                "case id must not be empty".to_string(),
            ));
        }
        self.cases.push(case);
        self.persist();
        Ok(())
    }

    /// Appends evidence to the first case whose id matches, then persists.
    pub fn add_evidence(&mut self, case_id: &str, item: &str) -> CoreResult<()> {
        if item.is_empty() {
            return Err(CoreError::InvalidInput(
                "evidence must not be empty".to_string(),
            ));
        }
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.case_id == case_id)
            .ok_or_else(|| CoreError::CaseNotFound(case_id.to_string()))?;
        case.add_evidence(item);
        self.persist();
        Ok(())
    }

    /// Removes the first case whose id matches, then persists. Authorization
    /// is the deletion gate's job and happens before this is called.
    pub fn delete_case(&mut self, case_id: &str) -> CoreResult<()> {
        let idx = self
            .cases
            .iter()
            .position(|c| c.case_id == case_id)
            .ok_or_else(|| CoreError::CaseNotFound(case_id.to_string()))?;
        self.cases.remove(idx);
        self.persist();
        Ok(())
    }

    // A failed write keeps the in-memory change and leaves the file stale
    // until the next successful write; the mutation still reports success.
    fn persist(&self) {
        if let Err(e) = file::save_cases(&self.path, &self.cases) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "could not write case file, latest change is not durable"
            );
        }
    }
}

fn load_or_create(path: &Path) -> CoreResult<Vec<Case>> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        File::create(path)?;
        return Ok(Vec::new());
    }
    file::load_cases(path)
}
