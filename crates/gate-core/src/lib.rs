//! Gate Core - Form state, credential check, and navigation gate
//!
//! This crate holds the UI-free half of the credential gate: the two
//! editable form fields, the pluggable credential check that turns a
//! submission into an outcome, and the state machine that routes that
//! outcome either to the protected view or to a blocking user notice.
//!
//! Front ends supply the side effects through the [`Navigator`] and
//! [`Notifier`] ports; nothing here touches a terminal, a router, or I/O.

pub mod credentials;
pub mod error;
pub mod form;
pub mod gate;
pub mod outcome;
pub mod validator;

pub use credentials::{AcceptedCredential, Credentials};
pub use error::{GateError, Result};
pub use form::{Field, FormState};
pub use gate::{GateEvent, GateState, LoginGate, Navigator, Notifier, Route};
pub use outcome::SubmissionOutcome;
pub use validator::{CredentialValidator, FixedPairValidator};

/// Username of the built-in accepted pair
pub const DEFAULT_USERNAME: &str = "admin";

/// Password of the built-in accepted pair
pub const DEFAULT_PASSWORD: &str = "password";

/// Path of the protected view reached on acceptance
pub const DEFAULT_DESTINATION: &str = "/dashboard";

/// Text of the notice raised on rejection
pub const INVALID_CREDENTIALS_NOTICE: &str = "Invalid credentials";
