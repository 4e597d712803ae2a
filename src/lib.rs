// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person free-look camera for real-time 3D rendering.
//!
//! Freelook maintains a viewer's position and yaw/pitch orientation,
//! derives an orthonormal forward/right basis, and produces a right-handed
//! view matrix plus a field-of-view value for the renderer's projection.
//! State mutates from three input channels: keyboard movement, mouse look,
//! and scroll zoom.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position/orientation state and the view transform
//! - [`input::InputProcessor`] - accumulates window events and applies them
//!   once per frame
//! - [`options::Options`] - runtime configuration (speed, sensitivity,
//!   keybindings) with TOML presets
//! - [`util::FrameClock`] - wall-clock `delta_time` source
//!
//! # Architecture
//!
//! The crate is a pure in-memory component: no windowing, no graphics API
//! calls. The host render loop feeds platform events into an
//! [`input::InputProcessor`], calls
//! [`apply`](input::InputProcessor::apply) once per frame with the elapsed
//! time from a [`util::FrameClock`], then reads
//! [`view`](camera::Camera::view) and
//! [`field_of_view`](camera::Camera::field_of_view) to build its matrices.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
