//! Session state snapshot and lifecycle phase.

use session_shared::SessionTransport;

use crate::role::Role;

/// Point-in-time snapshot of the transport's connection state.
///
/// Derived on demand from [`SessionTransport`] queries, never stored.
/// `is_host` implies both `is_client` and `is_server`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_client: bool,
    pub is_server: bool,
    pub is_host: bool,
    pub is_connected_client: bool,
}

impl SessionState {
    pub fn capture(transport: &dyn SessionTransport) -> Self {
        Self {
            is_client: transport.is_client(),
            is_server: transport.is_server(),
            is_host: transport.is_host(),
            is_connected_client: transport.is_connected_client(),
        }
    }

    /// True once the transport participates in a session in any role.
    pub fn is_active(&self) -> bool {
        self.is_client || self.is_server
    }

    /// Whether the transport reached the state the given role waits for.
    ///
    /// Host and server sessions are ready once the server side is up;
    /// a joining client is ready only after the handshake completed.
    pub fn ready_for(&self, role: Role) -> bool {
        match role {
            Role::Host | Role::Server => self.is_server,
            Role::Client => self.is_connected_client,
        }
    }

    /// Label of the semantically current role. Host wins over server wins
    /// over client, mirroring that a host is client and server at once.
    pub fn mode_label(&self) -> Option<&'static str> {
        if self.is_host {
            Some(Role::Host.label())
        } else if self.is_server {
            Some(Role::Server.label())
        } else if self.is_client {
            Some(Role::Client.label())
        } else {
            None
        }
    }
}

/// Lifecycle phase of the local session.
///
/// No reverse transition is modeled; a connected session lasts until process
/// exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Starting(Role),
    Connected(Role),
}

impl SessionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    /// Role of the running session, if any.
    pub fn role(&self) -> Option<Role> {
        match self {
            SessionPhase::Idle => None,
            SessionPhase::Starting(role) | SessionPhase::Connected(role) => Some(*role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_label_prefers_host() {
        let state = SessionState {
            is_client: true,
            is_server: true,
            is_host: true,
            is_connected_client: true,
        };
        assert_eq!(state.mode_label(), Some("Host"));
    }

    #[test]
    fn mode_label_server_before_client() {
        let state = SessionState {
            is_server: true,
            ..Default::default()
        };
        assert_eq!(state.mode_label(), Some("Server"));

        let state = SessionState {
            is_client: true,
            ..Default::default()
        };
        assert_eq!(state.mode_label(), Some("Client"));
    }

    #[test]
    fn client_readiness_requires_handshake() {
        let started = SessionState {
            is_client: true,
            ..Default::default()
        };
        assert!(started.is_active());
        assert!(!started.ready_for(Role::Client));

        let connected = SessionState {
            is_client: true,
            is_connected_client: true,
            ..Default::default()
        };
        assert!(connected.ready_for(Role::Client));
    }
}
