//! Shared utilities.
//!
//! Currently just frame timing: the wall-clock source for per-frame
//! `delta_time` values.

pub mod frame_timing;

pub use frame_timing::FrameClock;
