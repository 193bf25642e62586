//! Status text surfaced to the presentation layer.
//!
//! Last-write-wins: the controller and the waiter overwrite the same string,
//! serialized by the single-threaded tick discipline.

use crate::role::Role;

pub(crate) const NOT_CONNECTED: &str = "Not connected";
pub(crate) const TRANSPORT_MISSING: &str = "SessionTransport not found";
pub(crate) const PROVISIONING_MISSING: &str = "ProvisioningService not found";

pub(crate) fn starting(role: Role) -> String {
    format!("Starting {}...", role.label())
}

pub(crate) fn representation_set(tag: &str) -> String {
    format!("Representation set: {tag}")
}
