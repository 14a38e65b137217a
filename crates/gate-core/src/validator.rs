//! Credential check used by the submit handler

use crate::credentials::{AcceptedCredential, Credentials};
use crate::outcome::SubmissionOutcome;

/// Decides whether a submitted pair is accepted
///
/// Implementations must be pure and synchronous: the same pair always
/// produces the same outcome.
pub trait CredentialValidator {
    fn validate(&self, credentials: &Credentials) -> SubmissionOutcome;
}

impl<F> CredentialValidator for F
where
    F: Fn(&Credentials) -> SubmissionOutcome,
{
    fn validate(&self, credentials: &Credentials) -> SubmissionOutcome {
        self(credentials)
    }
}

/// Accepts exactly one fixed pair
#[derive(Debug, Clone, Default)]
pub struct FixedPairValidator {
    accepted: AcceptedCredential,
}

impl FixedPairValidator {
    pub fn new(accepted: AcceptedCredential) -> Self {
        Self { accepted }
    }

    pub fn accepted(&self) -> &AcceptedCredential {
        &self.accepted
    }
}

impl CredentialValidator for FixedPairValidator {
    fn validate(&self, credentials: &Credentials) -> SubmissionOutcome {
        SubmissionOutcome::from_match(self.accepted.matches(credentials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pair() {
        let validator = FixedPairValidator::default();

        assert_eq!(
            validator.validate(&Credentials::new("admin", "password")),
            SubmissionOutcome::Accepted
        );
        assert_eq!(
            validator.validate(&Credentials::new("admin", "wrong")),
            SubmissionOutcome::Rejected
        );
    }

    #[test]
    fn test_custom_pair() {
        let validator = FixedPairValidator::new(AcceptedCredential::new("ops", "letmein"));

        assert!(validator.validate(&Credentials::new("ops", "letmein")).is_accepted());
        assert!(!validator.validate(&Credentials::new("admin", "password")).is_accepted());
    }

    #[test]
    fn test_closure_validator() {
        let allow_all = |_: &Credentials| SubmissionOutcome::Accepted;
        assert!(allow_all.validate(&Credentials::default()).is_accepted());
    }
}
