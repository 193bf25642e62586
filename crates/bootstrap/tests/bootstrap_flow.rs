//! End-to-end bootstrap flows over the loopback transport.
//!
//! Exercises the full path: start a role, tick the controller, observe the
//! status surface and the provisioning calls the authoritative service
//! receives.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use session_bootstrap::{BootstrapError, Role, SessionController, SessionPhase};
use session_shared::transport::LoopbackTransport;
use session_shared::{PeerId, ProvisioningService, SessionTransport};

#[derive(Default)]
struct RecordingProvisioner {
    calls: Mutex<Vec<(PeerId, String)>>,
}

impl RecordingProvisioner {
    fn calls(&self) -> Vec<(PeerId, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProvisioningService for RecordingProvisioner {
    fn replace_representation(&self, peer: PeerId, role_tag: &str) {
        self.calls.lock().unwrap().push((peer, role_tag.to_owned()));
    }
}

fn controller_with(
    transport: &LoopbackTransport,
    provisioner: Option<Arc<RecordingProvisioner>>,
) -> SessionController {
    let handle: Arc<dyn SessionTransport> = Arc::new(transport.clone());
    let service = provisioner.map(|p| p as Arc<dyn ProvisioningService>);
    SessionController::new(Some(handle), service)
}

#[test]
fn host_provisions_frog_on_first_refresh() {
    let transport = LoopbackTransport::new();
    let provisioner = Arc::new(RecordingProvisioner::default());
    let mut controller = controller_with(&transport, Some(provisioner.clone()));

    controller.start_host().unwrap();
    assert_eq!(controller.status_text(), "Starting Host...");

    // Loopback hosts are server-ready immediately, so the very first tick
    // must fire the provisioning request.
    controller.refresh();
    assert_eq!(controller.status_text(), "Representation set: frog");
    assert_eq!(
        provisioner.calls(),
        vec![(transport.local_peer_id(), "frog".to_owned())]
    );
    assert_eq!(controller.phase(), SessionPhase::Connected(Role::Host));
}

#[test]
fn client_provisions_evil_once_handshake_completes() {
    let transport = LoopbackTransport::new();
    let provisioner = Arc::new(RecordingProvisioner::default());
    let mut controller = controller_with(&transport, Some(provisioner.clone()));

    controller.start_client().unwrap();
    for _ in 0..10 {
        controller.refresh();
    }
    assert_eq!(controller.status_text(), "Starting Client...");
    assert!(provisioner.calls().is_empty());
    assert_eq!(controller.phase(), SessionPhase::Starting(Role::Client));

    transport.complete_connection();
    controller.refresh();
    assert_eq!(controller.status_text(), "Representation set: evil");
    assert_eq!(
        provisioner.calls(),
        vec![(transport.local_peer_id(), "evil".to_owned())]
    );
    assert_eq!(controller.phase(), SessionPhase::Connected(Role::Client));
}

#[test]
fn client_that_never_connects_waits_indefinitely() {
    let transport = LoopbackTransport::new();
    let provisioner = Arc::new(RecordingProvisioner::default());
    let mut controller = controller_with(&transport, Some(provisioner.clone()));

    controller.start_client().unwrap();
    for _ in 0..100 {
        controller.refresh();
    }

    assert_eq!(controller.status_text(), "Starting Client...");
    assert!(provisioner.calls().is_empty());
}

#[test]
fn server_start_never_provisions() {
    let transport = LoopbackTransport::new();
    let provisioner = Arc::new(RecordingProvisioner::default());
    let mut controller = controller_with(&transport, Some(provisioner.clone()));

    controller.start_server().unwrap();
    assert_eq!(controller.status_text(), "Starting Server...");

    for _ in 0..20 {
        controller.refresh();
    }
    assert!(provisioner.calls().is_empty());
    assert_eq!(controller.phase(), SessionPhase::Connected(Role::Server));
    assert_eq!(
        controller.connection_summary().as_deref(),
        Some("Transport: loopback | Mode: Server")
    );
}

#[test]
fn missing_provisioning_service_degrades_to_status() {
    let transport = LoopbackTransport::new();
    let mut controller = controller_with(&transport, None);

    controller.start_host().unwrap();
    controller.refresh();
    assert_eq!(controller.status_text(), "ProvisioningService not found");

    // No retry, no escalation; later ticks leave the status alone.
    controller.refresh();
    assert_eq!(controller.status_text(), "ProvisioningService not found");
}

#[test]
fn second_start_fails_and_leaves_session_intact() {
    let transport = LoopbackTransport::new();
    let provisioner = Arc::new(RecordingProvisioner::default());
    let mut controller = controller_with(&transport, Some(provisioner.clone()));

    controller.start_host().unwrap();
    controller.refresh();

    let err = controller.start_client().unwrap_err();
    assert!(matches!(err, BootstrapError::AlreadyStarted(Role::Host)));

    controller.refresh();
    assert_eq!(controller.status_text(), "Representation set: frog");
    assert_eq!(provisioner.calls().len(), 1);
}

#[tokio::test]
async fn interval_driven_client_flow_provisions_within_bounded_ticks() {
    let transport = LoopbackTransport::new();
    let provisioner = Arc::new(RecordingProvisioner::default());
    let mut controller = controller_with(&transport, Some(provisioner.clone()));

    controller.start_client().unwrap();

    let mut interval = tokio::time::interval(Duration::from_millis(1));
    for tick in 0..10u32 {
        interval.tick().await;
        if tick == 3 {
            transport.complete_connection();
        }
        controller.refresh();
    }

    assert_eq!(controller.status_text(), "Representation set: evil");
    assert_eq!(provisioner.calls().len(), 1);
}
