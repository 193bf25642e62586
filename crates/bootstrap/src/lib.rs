//! Role bootstrap for multiplayer sessions.
//!
//! A peer picks one of three roles (host, client, dedicated server); the
//! [`SessionController`] starts the session transport accordingly and, for
//! host and client, spawns a one-shot [`RoleAssignmentWaiter`] that
//! provisions the peer's role-specific representation once the connection
//! reaches the role's target state.
//!
//! The core is poll driven: something calls [`SessionController::refresh`]
//! once per tick (a frame loop, a tokio interval, a test loop) and reads
//! [`SessionController::status_text`] back. No background tasks, no locking.

pub mod config;
pub mod controller;
pub mod error;
pub mod role;
pub mod state;
pub mod waiter;

mod status;

pub use config::BootstrapConfig;
pub use controller::SessionController;
pub use error::{BootstrapError, BootstrapResult};
pub use role::Role;
pub use state::{SessionPhase, SessionState};
pub use waiter::{RoleAssignmentWaiter, WaiterProgress};

/// Convenience prelude for front ends.
pub mod prelude {
    pub use crate::{
        BootstrapConfig, BootstrapError, BootstrapResult, Role, SessionController, SessionPhase,
        SessionState,
    };
    pub use session_shared::prelude::*;
}
