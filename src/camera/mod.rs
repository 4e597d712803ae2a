//! Free-look camera for first-person scene viewing.
//!
//! Provides a yaw/pitch camera with keyboard movement, mouse look, and
//! scroll zoom, producing a right-handed view matrix each frame.

/// Core camera struct, movement directions, and orientation math.
pub mod core;

pub use self::core::{
    Camera, MovementDirection, DEFAULT_PITCH, DEFAULT_YAW, MAX_FOV, MIN_FOV,
    PITCH_LIMIT, WORLD_UP,
};
