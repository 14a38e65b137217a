//! Result of evaluating one submission

use crate::error::{GateError, Result};

/// Outcome of a single submission, produced fresh each time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The pair matched the accepted credential
    Accepted,
    /// The pair did not match
    Rejected,
}

impl SubmissionOutcome {
    /// Map a boolean match into an outcome
    pub fn from_match(matched: bool) -> Self {
        if matched {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }

    /// Convert into a `Result`, rejection becoming [`GateError::InvalidCredentials`]
    pub fn into_result(self) -> Result<()> {
        match self {
            SubmissionOutcome::Accepted => Ok(()),
            SubmissionOutcome::Rejected => Err(GateError::InvalidCredentials),
        }
    }
}
