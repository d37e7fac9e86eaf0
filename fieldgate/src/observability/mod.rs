//! Tracing setup for applications embedding the framework.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedding application's choice. This helper wires up a sensible
//! default honoring `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to the given default directive when `RUST_LOG` is unset.
/// Does nothing when a subscriber is already installed, so it is safe to
/// call from tests and binaries alike.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("debug");
        // Second call hits the already-installed path.
        init_tracing("info");
    }
}
