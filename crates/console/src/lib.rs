//! Diagnostic console core.
//!
//! This crate provides the logging pipeline behind the in-page console:
//! - Log value formatting
//! - `%c` style-marker expansion
//! - Label registries for counters and timers
//! - Call-stack capture
//! - Deferred rendering buffer over a pluggable output surface
//! - The console facade tying them together

pub mod buffer;
pub mod facade;
pub mod format;
pub mod labels;
pub mod stack;
pub mod surface;
pub mod value;

pub use buffer::{LogEntry, RenderBuffer};
pub use facade::{Console, Palette};
pub use labels::{CounterEntry, LabelRegistry, Labeled, TimerEntry};
pub use stack::CallFrame;
pub use surface::{MemorySurface, RenderSurface};
pub use value::LogValue;
