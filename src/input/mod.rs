//! Input handling: event types and the input processor that turns raw
//! window events into per-frame camera updates.

/// Platform-agnostic input events.
pub mod event;
/// Accumulates events and applies them to a camera once per frame.
pub mod processor;

pub use event::InputEvent;
pub use processor::InputProcessor;
