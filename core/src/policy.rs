use crate::auth::provider::User;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeleteBlockReason {
    NOT_AUTHENTICATED,
    NOT_ADMIN,
    WRONG_PASSWORD,
}

#[derive(Debug, Clone)]
pub struct DeletionGateInputs<'a> {
    pub requesting_user: Option<&'a User>,
    pub entered_password: &'a str,
    pub expected_password: &'a str,
}

/// Case deletion needs an authenticated admin AND the deletion password
/// re-entered at the prompt. Checks run in that order; the first failure
/// wins and the repository stays untouched.
pub fn evaluate_deletion_gate(i: &DeletionGateInputs) -> Result<(), DeleteBlockReason> {
    let user = match i.requesting_user {
        Some(user) => user,
        None => return Err(DeleteBlockReason::NOT_AUTHENTICATED),
    };
    if !user.is_admin() {
        return Err(DeleteBlockReason::NOT_ADMIN);
    }
    if i.entered_password != i.expected_password {
        return Err(DeleteBlockReason::WRONG_PASSWORD);
    }
    Ok(())
}
