//! Shared types used across the console overlay crates.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{OverlayError, OverlayResult};
