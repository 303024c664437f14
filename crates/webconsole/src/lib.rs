//! In-page diagnostic console overlay.
//!
//! Wires the console core to a host page:
//! - Query-flag activation
//! - Panic-hook capture of uncaught errors
//! - A tracing layer bridging host events into the overlay
//! - The overlay lifecycle (bootstrap, prepare, start, stop)

pub mod bootstrap;
pub mod hook;
pub mod layer;
pub mod query;

pub use bootstrap::{Overlay, OverlayConfig};
pub use layer::ConsoleLayer;
pub use query::{QueryParams, ACTIVATION_FLAG};

/// Overlay version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
