//! Concrete submission scenarios for the login gate

use gate_core::{
    FixedPairValidator, GateError, GateState, LoginGate, Route, SubmissionOutcome,
    INVALID_CREDENTIALS_NOTICE,
};
use rstest::rstest;

#[rstest]
#[case("admin", "password", SubmissionOutcome::Accepted)]
#[case("admin", "wrong", SubmissionOutcome::Rejected)]
#[case("", "", SubmissionOutcome::Rejected)]
#[case("Admin", "password", SubmissionOutcome::Rejected)]
#[case("admin", "Password", SubmissionOutcome::Rejected)]
#[case(" admin", "password", SubmissionOutcome::Rejected)]
#[case("admin", "password ", SubmissionOutcome::Rejected)]
#[case("password", "admin", SubmissionOutcome::Rejected)]
fn test_single_submission(
    #[case] username: &str,
    #[case] password: &str,
    #[case] expected: SubmissionOutcome,
) {
    let mut routes: Vec<Route> = Vec::new();
    let mut notices: Vec<String> = Vec::new();

    let outcome = {
        let mut gate = LoginGate::new(
            FixedPairValidator::default(),
            |route: &Route| routes.push(route.clone()),
            |message: &str| notices.push(message.to_string()),
        );
        gate.set_username(username);
        gate.set_password(password);
        let outcome = gate.submit().unwrap();
        outcome
    };

    assert_eq!(outcome, expected);
    match expected {
        SubmissionOutcome::Accepted => {
            assert_eq!(routes, vec![Route::new("/dashboard")]);
            assert!(notices.is_empty());
        }
        SubmissionOutcome::Rejected => {
            assert!(routes.is_empty());
            assert_eq!(notices, vec![INVALID_CREDENTIALS_NOTICE.to_string()]);
        }
    }
}

#[test]
fn test_rejection_does_not_carry_over() {
    let mut routes = 0;
    let mut notices = 0;

    {
        let mut gate = LoginGate::new(
            FixedPairValidator::default(),
            |_: &Route| routes += 1,
            |_: &str| notices += 1,
        );

        gate.set_username("admin");
        gate.set_password("wrong");
        assert_eq!(gate.submit(), Ok(SubmissionOutcome::Rejected));
        assert_eq!(gate.state(), GateState::Rejected);
        gate.acknowledge_notice().unwrap();

        gate.set_password("password");
        assert_eq!(gate.submit(), Ok(SubmissionOutcome::Accepted));
        assert_eq!(gate.state(), GateState::Accepted);
    }

    assert_eq!(routes, 1);
    assert_eq!(notices, 1);
}

#[test]
fn test_outcome_maps_to_single_error_kind() {
    for pair in [("admin", "x"), ("x", "password"), ("x", "y")] {
        let mut gate = LoginGate::new(FixedPairValidator::default(), |_: &Route| {}, |_: &str| {});
        gate.set_username(pair.0);
        gate.set_password(pair.1);

        let err = gate.submit().unwrap().into_result().unwrap_err();
        assert_eq!(err, GateError::InvalidCredentials);
    }
}
