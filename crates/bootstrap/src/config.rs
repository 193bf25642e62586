//! Bootstrap configuration.

use serde::{Deserialize, Serialize};

use crate::role::{DEFAULT_CLIENT_TAG, DEFAULT_HOST_TAG, Role};

/// Configuration for the session controller.
///
/// The role-to-tag mapping is fixed (hosts and clients provision, servers do
/// not); the tags themselves are configurable so deployments can rename
/// their representations without recompiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Representation tag requested for hosts.
    pub host_tag: String,
    /// Representation tag requested for joining clients.
    pub client_tag: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            host_tag: DEFAULT_HOST_TAG.to_owned(),
            client_tag: DEFAULT_CLIENT_TAG.to_owned(),
        }
    }
}

impl BootstrapConfig {
    /// Tag provisioned for the given role; `None` for roles that provision
    /// nothing.
    pub fn role_tag(&self, role: Role) -> Option<&str> {
        match role {
            Role::Host => Some(&self.host_tag),
            Role::Client => Some(&self.client_tag),
            Role::Server => None,
        }
    }
}
