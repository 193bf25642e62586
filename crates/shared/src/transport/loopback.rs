//! Loopback transport keeping the whole session in one process.
//!
//! Provides a [`SessionTransport`] implementation that never touches the
//! network stack. This is primarily used for singleplayer runs and local
//! testing: the host side reports a ready server as soon as the start call
//! returns, while a joining client stays unconnected until
//! [`LoopbackTransport::complete_connection`] simulates the server accept.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use tracing::warn;
use uuid::uuid;

use super::{SessionTransport, TransportError, TransportResult};
use crate::PeerId;

/// Peer id handed out by the loopback transport.
/// Fixed so logs and assertions stay reproducible across runs.
const LOOPBACK_PEER_ID: PeerId = uuid!("67e55044-10b1-426f-9247-bb680e5fe0c8");

/// Error type for loopback transport operations.
#[derive(Debug, thiserror::Error)]
pub enum LoopbackError {
    #[error("loopback transport already started")]
    AlreadyStarted,
    #[error("loopback transport not started")]
    NotStarted,
}

impl From<LoopbackError> for TransportError {
    fn from(err: LoopbackError) -> Self {
        match err {
            LoopbackError::AlreadyStarted => {
                TransportError::Other("loopback transport already started".into())
            }
            LoopbackError::NotStarted => TransportError::NotReady,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopbackMode {
    Offline,
    Host,
    Client,
    Server,
}

#[derive(Debug)]
struct SharedLoopbackState {
    mode: Mutex<LoopbackMode>,
    /// Set once the (simulated) handshake has completed.
    connected: AtomicBool,
    peer_id: PeerId,
}

/// In-memory transport; clones share the same session state.
#[derive(Debug, Clone)]
pub struct LoopbackTransport {
    state: Arc<SharedLoopbackState>,
}

impl LoopbackTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(SharedLoopbackState {
                mode: Mutex::new(LoopbackMode::Offline),
                connected: AtomicBool::new(false),
                peer_id: LOOPBACK_PEER_ID,
            }),
        }
    }

    fn mode(&self) -> LoopbackMode {
        self.state
            .mode
            .lock()
            .map(|mode| *mode)
            .unwrap_or(LoopbackMode::Offline)
    }

    fn start_as(&self, mode: LoopbackMode) -> TransportResult<()> {
        let mut current = self
            .state
            .mode
            .lock()
            .map_err(|_| TransportError::Other("loopback state poisoned".into()))?;
        if *current != LoopbackMode::Offline {
            warn!(current = ?*current, requested = ?mode, "loopback start rejected");
            return Err(LoopbackError::AlreadyStarted.into());
        }
        *current = mode;

        // The embedded server is up as soon as the start call returns, so
        // host and dedicated-server sessions are connected immediately.
        if matches!(mode, LoopbackMode::Host | LoopbackMode::Server) {
            self.state.connected.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    /// Completes the simulated server accept for a joining client.
    ///
    /// Host and server sessions do not need this; they are connected as soon
    /// as their start operation returns.
    pub fn complete_connection(&self) {
        self.state.connected.store(true, Ordering::SeqCst);
    }
}

impl Default for LoopbackTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTransport for LoopbackTransport {
    fn start_host(&self) -> TransportResult<()> {
        self.start_as(LoopbackMode::Host)
    }

    fn start_client(&self) -> TransportResult<()> {
        self.start_as(LoopbackMode::Client)
    }

    fn start_server(&self) -> TransportResult<()> {
        self.start_as(LoopbackMode::Server)
    }

    fn is_client(&self) -> bool {
        matches!(self.mode(), LoopbackMode::Host | LoopbackMode::Client)
    }

    fn is_server(&self) -> bool {
        matches!(self.mode(), LoopbackMode::Host | LoopbackMode::Server)
    }

    fn is_host(&self) -> bool {
        self.mode() == LoopbackMode::Host
    }

    fn is_connected_client(&self) -> bool {
        self.is_client() && self.state.connected.load(Ordering::SeqCst)
    }

    fn local_peer_id(&self) -> PeerId {
        self.state.peer_id
    }

    fn transport_name(&self) -> &'static str {
        "loopback"
    }
}
