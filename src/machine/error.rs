//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when constructing a machine.
///
/// Every definition problem is caught up front, so a constructed
/// machine can never reach a transition target it does not know.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State list is empty. Define at least one state")]
    NoStates,

    #[error("Duplicate state name '{0}'. State names must be unique")]
    DuplicateState(String),

    #[error("No such state '{0}' to use as the initial state")]
    UnknownInitialState(String),

    #[error("No such state '{0}' to use as the final state")]
    UnknownFinalState(String),

    #[error("State '{from}' declares a transition to undeclared state '{to}'")]
    UndeclaredTarget { from: String, to: String },
}
