//! Provisioning boundary.
//!
//! A `StackSubmitter` hands the structured-data serialization of a
//! generated template to a cloud provisioning API. The crate ships no
//! network client; hosts implement the trait against their SDK of choice.
//! Submission is available only when deployment credentials are
//! configured — implementations report `DeployError::MissingCredentials`
//! otherwise, and failures are surfaced to the caller, never retried here.

use crate::error::DeployError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states a provisioning API reports for a submitted stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackStatus {
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    RollbackInProgress,
    RollbackComplete,
    DeleteInProgress,
    DeleteComplete,
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackStatus::CreateInProgress => "CREATE_IN_PROGRESS",
            StackStatus::CreateComplete => "CREATE_COMPLETE",
            StackStatus::CreateFailed => "CREATE_FAILED",
            StackStatus::RollbackInProgress => "ROLLBACK_IN_PROGRESS",
            StackStatus::RollbackComplete => "ROLLBACK_COMPLETE",
            StackStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
            StackStatus::DeleteComplete => "DELETE_COMPLETE",
        };
        write!(f, "{name}")
    }
}

/// Receipt for a submitted stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub stack_id: String,
    pub status: StackStatus,
}

/// Contract for a provisioning-submission collaborator.
pub trait StackSubmitter {
    /// Submits a template (its JSON encoding) under the given stack name.
    fn submit(&self, template_json: &str, stack_name: &str) -> Result<Submission, DeployError>;

    /// Reports the current status of a previously submitted stack.
    fn status(&self, stack_name: &str) -> Result<Submission, DeployError>;
}
