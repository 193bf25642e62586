//! Transport seam: role startup operations and connection state queries.

mod loopback;

pub use loopback::{LoopbackError, LoopbackTransport};

use thiserror::Error;

use crate::PeerId;

/// Generic transport level error surfaced to higher layers.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport not ready")]
    NotReady,
    #[error("configuration error: {0}")]
    InvalidConfig(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("other: {0}")]
    Other(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Session transport consumed by the bootstrap core.
///
/// The bootstrap core only ever reads connection state; it mutates the
/// transport solely through the three start operations. Implementations own
/// their interior synchronization, so every method takes `&self` and handles
/// stay clonable behind an `Arc`.
pub trait SessionTransport: Send + Sync {
    /// Starts an embedded server plus a local client (host mode).
    fn start_host(&self) -> TransportResult<()>;
    /// Starts a client that joins a remote server.
    fn start_client(&self) -> TransportResult<()>;
    /// Starts a dedicated server with no local player.
    fn start_server(&self) -> TransportResult<()>;

    /// True once the local peer participates as a client. Hosts count.
    fn is_client(&self) -> bool;
    /// True once the local peer runs server logic. Hosts count.
    fn is_server(&self) -> bool;
    /// True when the local peer is a host (client and server at once).
    fn is_host(&self) -> bool;
    /// True once the client handshake against the server has completed.
    fn is_connected_client(&self) -> bool;

    /// Id assigned to the local peer for the session's lifetime.
    fn local_peer_id(&self) -> PeerId;
    /// Short implementation name, used in connection summaries.
    fn transport_name(&self) -> &'static str;
}
