use serde::{Deserialize, Serialize};

/// A tracked case: an identifier plus evidence descriptions in the order they
/// were recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Case {
    pub case_id: String,
    pub evidence: Vec<String>,
}

impl Case {
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            evidence: Vec::new(),
        }
    }

    pub fn add_evidence(&mut self, item: impl Into<String>) {
        self.evidence.push(item.into());
    }

    /// Removes the first evidence entry equal to `item`. Returns whether an
    /// entry was removed.
    pub fn remove_evidence(&mut self, item: &str) -> bool {
        match self.evidence.iter().position(|e| e == item) {
            Some(idx) => {
                self.evidence.remove(idx);
                true
            }
            None => false,
        }
    }
}
