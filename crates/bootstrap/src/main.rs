//! Demo front end: boots a loopback session into the chosen role and polls
//! the controller until the representation is provisioned.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use session_bootstrap::{Role, SessionController, SessionPhase};
use session_shared::transport::LoopbackTransport;
use session_shared::{PeerId, ProvisioningService, SessionTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "session_demo")]
struct Args {
    /// Role to bootstrap into.
    #[arg(long, value_enum, default_value_t = CliRole::Host)]
    role: CliRole,
    /// Ticks until the simulated server accepts a joining client.
    #[arg(long, default_value_t = 5)]
    accept_after: u32,
    /// Total ticks to run before exiting.
    #[arg(long, default_value_t = 30)]
    ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliRole {
    Host,
    Client,
    Server,
}

impl fmt::Display for CliRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CliRole::Host => "host",
            CliRole::Client => "client",
            CliRole::Server => "server",
        };
        f.write_str(name)
    }
}

impl From<CliRole> for Role {
    fn from(role: CliRole) -> Self {
        match role {
            CliRole::Host => Role::Host,
            CliRole::Client => Role::Client,
            CliRole::Server => Role::Server,
        }
    }
}

/// Provisioner that just logs the authoritative swap.
struct LoggingProvisioner;

impl ProvisioningService for LoggingProvisioner {
    fn replace_representation(&self, peer: PeerId, role_tag: &str) {
        info!(%peer, tag = role_tag, "replacing placeholder representation");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let role = Role::from(args.role);

    let transport = LoopbackTransport::new();
    let handle: Arc<dyn SessionTransport> = Arc::new(transport.clone());
    let mut controller = SessionController::new(Some(handle), Some(Arc::new(LoggingProvisioner)));

    match role {
        Role::Host => controller.start_host()?,
        Role::Client => controller.start_client()?,
        Role::Server => controller.start_server()?,
    }
    println!("{}", controller.status_text());

    let mut interval = tokio::time::interval(Duration::from_millis(100));
    for tick in 0..args.ticks {
        interval.tick().await;

        if role == Role::Client && tick == args.accept_after {
            // Pretend the remote server finished the handshake.
            transport.complete_connection();
        }

        let before = controller.status_text().to_owned();
        controller.refresh();
        if controller.status_text() != before {
            println!("{}", controller.status_text());
        }

        // Nothing left to wait for once the session is connected and the
        // waiter reported its outcome (servers spawn no waiter).
        if matches!(controller.phase(), SessionPhase::Connected(_))
            && (role == Role::Server || controller.status_text() != before)
        {
            break;
        }
    }

    if let Some(summary) = controller.connection_summary() {
        println!("{summary}");
    }
    Ok(())
}
