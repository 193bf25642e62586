//! Session controller: starts roles, owns the status surface and drives the
//! role-assignment waiter.
//!
//! The controller is poll driven. A front end calls the start operation for
//! the chosen role once, then calls [`SessionController::refresh`] on every
//! tick and reads [`SessionController::status_text`] back. The controller,
//! the waiter and the presentation refresh all run on one logical thread of
//! control, which is the only serialization the status string needs.

use std::sync::Arc;

use session_shared::{ProvisioningService, SessionTransport};
use tracing::{info, warn};

use crate::{
    config::BootstrapConfig,
    error::{BootstrapError, BootstrapResult},
    role::Role,
    state::{SessionPhase, SessionState},
    status,
    waiter::{RoleAssignmentWaiter, WaiterProgress},
};

pub struct SessionController {
    transport: Option<Arc<dyn SessionTransport>>,
    provisioning: Option<Arc<dyn ProvisioningService>>,
    config: BootstrapConfig,
    phase: SessionPhase,
    waiter: Option<RoleAssignmentWaiter>,
    status: String,
}

impl SessionController {
    /// Controller with default role tags.
    ///
    /// Passing `None` for the transport models a front end whose transport
    /// failed to come up: all start operations fail and the status surface
    /// reports the missing transport.
    pub fn new(
        transport: Option<Arc<dyn SessionTransport>>,
        provisioning: Option<Arc<dyn ProvisioningService>>,
    ) -> Self {
        Self::with_config(transport, provisioning, BootstrapConfig::default())
    }

    pub fn with_config(
        transport: Option<Arc<dyn SessionTransport>>,
        provisioning: Option<Arc<dyn ProvisioningService>>,
        config: BootstrapConfig,
    ) -> Self {
        let status = if transport.is_some() {
            status::NOT_CONNECTED
        } else {
            status::TRANSPORT_MISSING
        };
        Self {
            transport,
            provisioning,
            config,
            phase: SessionPhase::Idle,
            waiter: None,
            status: status.to_owned(),
        }
    }

    pub fn start_host(&mut self) -> BootstrapResult<()> {
        self.start(Role::Host)
    }

    pub fn start_client(&mut self) -> BootstrapResult<()> {
        self.start(Role::Client)
    }

    pub fn start_server(&mut self) -> BootstrapResult<()> {
        self.start(Role::Server)
    }

    fn start(&mut self, role: Role) -> BootstrapResult<()> {
        if let Some(active) = self.phase.role() {
            warn!(requested = %role, %active, "start rejected, session already active");
            return Err(BootstrapError::AlreadyStarted(active));
        }
        let transport = self
            .transport
            .clone()
            .ok_or(BootstrapError::TransportUnavailable)?;

        match role {
            Role::Host => transport.start_host()?,
            Role::Client => transport.start_client()?,
            Role::Server => transport.start_server()?,
        }

        self.phase = SessionPhase::Starting(role);
        self.status = status::starting(role);
        self.waiter = self
            .config
            .role_tag(role)
            .map(|tag| RoleAssignmentWaiter::new(role, tag));
        info!(%role, provisioning_pending = self.waiter.is_some(), "session starting");
        Ok(())
    }

    /// One scheduler tick: re-polls the waiter and advances the phase.
    ///
    /// Safe to call forever; a waiter whose precondition never holds simply
    /// stays pending. The provisioning call is issued strictly between the
    /// tick that observes the precondition and the status write reporting
    /// the outcome.
    pub fn refresh(&mut self) {
        let Some(transport) = self.transport.clone() else {
            self.status = status::TRANSPORT_MISSING.to_owned();
            return;
        };

        if let Some(waiter) = self.waiter.as_mut() {
            match waiter.poll(transport.as_ref(), self.provisioning.as_deref()) {
                WaiterProgress::Pending => {}
                WaiterProgress::Provisioned { tag } => {
                    self.status = status::representation_set(&tag);
                    self.waiter = None;
                }
                WaiterProgress::ServiceMissing => {
                    self.status = status::PROVISIONING_MISSING.to_owned();
                    self.waiter = None;
                }
                WaiterProgress::Finished => {
                    self.waiter = None;
                }
            }
        }

        if let SessionPhase::Starting(role) = self.phase {
            if self.query_state().ready_for(role) {
                info!(%role, "session connected");
                self.phase = SessionPhase::Connected(role);
            }
        }
    }

    /// Snapshot of the transport's connection state. All false without a
    /// transport.
    pub fn query_state(&self) -> SessionState {
        self.transport
            .as_deref()
            .map(SessionState::capture)
            .unwrap_or_default()
    }

    /// Latest status line. Overwritten on every controller or waiter state
    /// change; the presentation layer polls this once per tick.
    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the three start actions should be offered. Only while idle
    /// and only with a transport present.
    pub fn start_actions_visible(&self) -> bool {
        self.transport.is_some() && self.phase.is_idle()
    }

    /// Transport/mode summary for an active session, e.g.
    /// `Transport: loopback | Mode: Host`.
    ///
    /// Derived per call instead of written into the status line, so the
    /// one-shot provisioning status is never clobbered by the per-tick
    /// summary.
    pub fn connection_summary(&self) -> Option<String> {
        let transport = self.transport.as_deref()?;
        let mode = SessionState::capture(transport).mode_label()?;
        Some(format!(
            "Transport: {} | Mode: {}",
            transport.transport_name(),
            mode
        ))
    }
}
