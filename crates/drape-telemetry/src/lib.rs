//! # drape-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (timing, contacts, energy) that can be consumed by pluggable
//! sinks (in-memory capture, `tracing` output).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
