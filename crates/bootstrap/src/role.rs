//! Network roles a peer can bootstrap into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default representation tag assigned to hosts.
pub const DEFAULT_HOST_TAG: &str = "frog";
/// Default representation tag assigned to joining clients.
pub const DEFAULT_CLIENT_TAG: &str = "evil";

/// Role the local peer plays in a session. Set once per session lifetime;
/// there is no reassignment and no teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Embedded server plus local client.
    Host,
    /// Joins a remote server.
    Client,
    /// Dedicated server, no local player.
    Server,
}

impl Role {
    /// Human readable label, used in logs and connection summaries.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Host => "Host",
            Role::Client => "Client",
            Role::Server => "Server",
        }
    }

    /// Whether starting this role triggers a provisioning request.
    /// A pure server owns no representation, so nothing is provisioned.
    pub const fn provisions_representation(self) -> bool {
        !matches!(self, Role::Server)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_role_provisions_nothing() {
        assert!(Role::Host.provisions_representation());
        assert!(Role::Client.provisions_representation());
        assert!(!Role::Server.provisions_representation());
    }
}
