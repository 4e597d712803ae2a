use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_PITCH, DEFAULT_YAW, MAX_FOV};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera movement, look, and zoom parameters.
pub struct CameraOptions {
    /// Movement speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub field_of_view: f32,
    /// Initial yaw in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Clamp pitch short of the poles during mouse look.
    #[schemars(skip)]
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            field_of_view: MAX_FOV,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            constrain_pitch: true,
        }
    }
}
