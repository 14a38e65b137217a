//! Error types for the gate

use thiserror::Error;

use crate::gate::{GateEvent, GateState};
use crate::INVALID_CREDENTIALS_NOTICE;

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The submitted pair did not match; never says which field was wrong
    #[error("{}", INVALID_CREDENTIALS_NOTICE)]
    InvalidCredentials,

    #[error("Invalid gate transition: {event:?} while {from:?}")]
    InvalidTransition { from: GateState, event: GateEvent },
}
