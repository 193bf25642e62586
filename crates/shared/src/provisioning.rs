//! Provisioning seam for authoritative representation swaps.

use crate::PeerId;

/// Authoritative service that replaces a peer's placeholder representation
/// with its role-specific one.
///
/// Implementations execute with server-side authority regardless of which
/// peer issues the call; the service owns that authority boundary. The
/// bootstrap core issues at most one call per session and never retries, so
/// implementations should treat it as fire-and-forget.
pub trait ProvisioningService: Send + Sync {
    fn replace_representation(&self, peer: PeerId, role_tag: &str);
}
