//! Opt-in tracing setup.
//!
//! The engine emits [`tracing`] events on every degrade-and-continue path
//! (unregistered routes, rejected batches, superseded transitions). Hosts
//! with their own subscriber should ignore this module; the helpers here
//! exist for demos and tests that just want the events on stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_DIRECTIVE: &str = "info,tiller_core=debug,tiller_presentation=debug";

/// Installs a formatted stderr subscriber honoring `RUST_LOG`.
///
/// Falls back to an informative default filter when `RUST_LOG` is unset.
/// Does nothing if a global subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
        .is_ok()
    {
        tracing::debug!("tiller logging installed");
    }
}
