//! Navigation gate and its state machine
//!
//! A [`LoginGate`] owns the form, the credential check, and two side-effect
//! ports. On submit it moves `Idle -> Submitting`, evaluates the snapshot,
//! and lands in either `Accepted` (terminal, navigation fired once) or
//! `Rejected` (notice raised once, fields untouched). A rejected gate
//! returns to `Idle` only after the notice is acknowledged.

use std::fmt;

use tracing::debug;

use crate::error::{GateError, Result};
use crate::form::FormState;
use crate::outcome::SubmissionOutcome;
use crate::validator::CredentialValidator;
use crate::{DEFAULT_DESTINATION, INVALID_CREDENTIALS_NOTICE};

/// Fixed destination of the accepted transition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINATION)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Moves the active view to a route
pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

impl<F> Navigator for F
where
    F: FnMut(&Route),
{
    fn navigate(&mut self, route: &Route) {
        self(route)
    }
}

/// User-facing notice channel
pub trait Notifier {
    /// Raise a blocking notice
    fn notify(&mut self, message: &str);

    /// The user acknowledged the current notice
    fn dismiss(&mut self) {}
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Gate lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Waiting for input or a submit
    #[default]
    Idle,
    /// Evaluating a snapshot; never observable between calls
    Submitting,
    /// Terminal; control has left for the protected view
    Accepted,
    /// Notice raised, waiting for acknowledgement
    Rejected,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    Submit,
    Evaluated(SubmissionOutcome),
    Acknowledge,
}

impl GateState {
    /// Pure transition function
    pub fn transition(self, event: GateEvent) -> Result<GateState> {
        match (self, event) {
            (GateState::Idle, GateEvent::Submit) => Ok(GateState::Submitting),
            (GateState::Submitting, GateEvent::Evaluated(SubmissionOutcome::Accepted)) => {
                Ok(GateState::Accepted)
            }
            (GateState::Submitting, GateEvent::Evaluated(SubmissionOutcome::Rejected)) => {
                Ok(GateState::Rejected)
            }
            (GateState::Rejected, GateEvent::Acknowledge) => Ok(GateState::Idle),
            (from, event) => Err(GateError::InvalidTransition { from, event }),
        }
    }

    /// Whether the form accepts a submit right now
    pub fn can_submit(self) -> bool {
        matches!(self, GateState::Idle)
    }

    /// Whether a notice is waiting for acknowledgement
    pub fn notice_pending(self) -> bool {
        matches!(self, GateState::Rejected)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GateState::Accepted)
    }
}

/// Form, credential check, and side-effect ports wired together
pub struct LoginGate<V, N, T> {
    form: FormState,
    validator: V,
    navigator: N,
    notifier: T,
    destination: Route,
    state: GateState,
}

impl<V, N, T> LoginGate<V, N, T>
where
    V: CredentialValidator,
    N: Navigator,
    T: Notifier,
{
    /// Create an idle gate with an empty form
    pub fn new(validator: V, navigator: N, notifier: T) -> Self {
        Self {
            form: FormState::new(),
            validator,
            navigator,
            notifier,
            destination: Route::default(),
            state: GateState::Idle,
        }
    }

    /// Override the protected destination
    pub fn with_route(mut self, destination: Route) -> Self {
        self.destination = destination;
        self
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn destination(&self) -> &Route {
        &self.destination
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn notifier(&self) -> &T {
        &self.notifier
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.form.set_username(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.set_password(value);
    }

    /// Mutable access for front ends that edit the focused field generically
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Handle the form's submit action
    ///
    /// Runs the whole `Submitting` phase inside this call. Refused while a
    /// notice is pending or after the gate has been accepted.
    pub fn submit(&mut self) -> Result<SubmissionOutcome> {
        self.state = self.state.transition(GateEvent::Submit)?;

        let outcome = self.validator.validate(&self.form.snapshot());
        self.state = self.state.transition(GateEvent::Evaluated(outcome))?;

        match outcome {
            SubmissionOutcome::Accepted => {
                debug!(destination = %self.destination, "credentials accepted");
                self.navigator.navigate(&self.destination);
            }
            SubmissionOutcome::Rejected => {
                self.notifier.notify(INVALID_CREDENTIALS_NOTICE);
            }
        }

        Ok(outcome)
    }

    /// Acknowledge the rejection notice and return to `Idle`
    pub fn acknowledge_notice(&mut self) -> Result<()> {
        self.state = self.state.transition(GateEvent::Acknowledge)?;
        self.notifier.dismiss();
        Ok(())
    }

    /// Give up the gate, handing back its ports
    pub fn into_parts(self) -> (V, N, T) {
        (self.validator, self.navigator, self.notifier)
    }
}
