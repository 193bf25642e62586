//! Error taxonomy for the bootstrap core.
//!
//! Every failure here is local and non-fatal: it degrades to an error the
//! presentation layer can show, and a human re-triggers the action. Nothing
//! is retried automatically and nothing terminates the process.

use session_shared::TransportError;
use thiserror::Error;

use crate::role::Role;

#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A session is already active; roles are assigned once per session.
    #[error("session already started as {0}")]
    AlreadyStarted(Role),
    /// No session transport was handed to the controller.
    #[error("session transport not found")]
    TransportUnavailable,
    /// The transport rejected the start operation.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;
