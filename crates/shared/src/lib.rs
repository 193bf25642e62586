//! Shared session vocabulary for the bootstrap stack.
//!
//! This crate hosts the seams between the bootstrap core and its external
//! collaborators:
//! - transport: the [`SessionTransport`] trait plus the loopback implementation
//! - provisioning: the authoritative [`ProvisioningService`] trait
//!
//! Keep this crate lean (no runtime, no UI). Front ends depend on it together
//! with `session_bootstrap`.

/// Provisioning seam for authoritative representation swaps
pub mod provisioning;
/// Transport seam shared by front ends and transport implementations
pub mod transport;

/// Represents the id the transport assigned to the local peer.
///
/// Opaque from this stack's perspective; stable for the session's lifetime.
pub type PeerId = uuid::Uuid;

pub use provisioning::ProvisioningService;
pub use transport::{SessionTransport, TransportError, TransportResult};

/// Convenience prelude for downstream crates.
pub mod prelude {
    pub use crate::PeerId;
    pub use crate::provisioning::ProvisioningService;
    pub use crate::transport::{SessionTransport, TransportError, TransportResult};
}
