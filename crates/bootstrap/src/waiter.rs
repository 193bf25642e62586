//! One-shot waiter that provisions a peer's representation once its
//! connection reaches the role's target state.
//!
//! The waiter is a resumable task in poll form: the controller re-enters it
//! on every scheduler tick, it re-checks its precondition and fires the
//! provisioning request the first time the precondition holds. It tolerates
//! a precondition that never becomes true by staying `Pending` forever.

use session_shared::{ProvisioningService, SessionTransport};
use tracing::{info, warn};

use crate::role::Role;

/// Outcome of a single waiter poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaiterProgress {
    /// Precondition not met yet; poll again next tick.
    Pending,
    /// The provisioning request was issued with the contained tag.
    Provisioned { tag: String },
    /// Precondition held but no provisioning service is available.
    /// Terminal; the request is not retried.
    ServiceMissing,
    /// The waiter reached a terminal state on an earlier poll.
    Finished,
}

/// Suspended task that issues the provisioning request exactly once.
///
/// Owns no persistent state beyond its role, its tag and the one-shot flag;
/// transport and provisioning service are borrowed per poll.
#[derive(Debug)]
pub struct RoleAssignmentWaiter {
    role: Role,
    tag: String,
    done: bool,
}

impl RoleAssignmentWaiter {
    pub fn new(role: Role, tag: impl Into<String>) -> Self {
        Self {
            role,
            tag: tag.into(),
            done: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Precondition gating the provisioning request.
    ///
    /// Hosts wait for the embedded server to be up, clients for the
    /// completed handshake. The server role never spawns a waiter.
    fn precondition_met(&self, transport: &dyn SessionTransport) -> bool {
        match self.role {
            Role::Host => transport.is_server(),
            Role::Client => transport.is_connected_client(),
            Role::Server => false,
        }
    }

    /// Re-checks the precondition; non-blocking, called once per tick.
    ///
    /// The provisioning call happens-after the precondition is observed true
    /// and happens-before the caller's status write for the returned
    /// outcome. A waiter whose precondition already holds fires on its very
    /// first poll.
    pub fn poll(
        &mut self,
        transport: &dyn SessionTransport,
        provisioning: Option<&dyn ProvisioningService>,
    ) -> WaiterProgress {
        if self.done {
            return WaiterProgress::Finished;
        }
        if !self.precondition_met(transport) {
            return WaiterProgress::Pending;
        }

        self.done = true;
        let Some(service) = provisioning else {
            warn!(role = %self.role, "provisioning service not found, representation left unassigned");
            return WaiterProgress::ServiceMissing;
        };

        let peer = transport.local_peer_id();
        service.replace_representation(peer, &self.tag);
        info!(role = %self.role, %peer, tag = %self.tag, "representation provisioned");
        WaiterProgress::Provisioned {
            tag: self.tag.clone(),
        }
    }
}
