use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// World-up reference direction. The camera's `up` vector is fixed to this
/// constant and never independently mutated.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Default yaw in degrees. Chosen so the initial forward vector points along
/// negative Z (right-handed world, Y-up).
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees (level with the horizon).
pub const DEFAULT_PITCH: f32 = 0.0;

/// Pitch is clamped to ±this value (degrees) when constraint is requested,
/// keeping the orientation away from the gimbal singularity at the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// Lower scroll-delta clamp bound in degrees.
pub const MIN_FOV: f32 = 1.0;
/// Upper scroll-delta clamp bound in degrees.
pub const MAX_FOV: f32 = 45.0;

const DEFAULT_SPEED: f32 = 2.5;
const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Movement directions the keyboard channel can request.
///
/// Serde serializes as `snake_case` strings so TOML keybinding presets stay
/// readable:
/// ```toml
/// [keybindings]
/// forward = "KeyW"
/// strafe_left = "KeyA"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementDirection {
    /// Move along the camera's forward vector.
    Forward,
    /// Move against the camera's forward vector.
    Backward,
    /// Strafe against the camera's right vector.
    StrafeLeft,
    /// Strafe along the camera's right vector.
    StrafeRight,
}

/// First-person free-look camera: a world-space position plus a yaw/pitch
/// orientation (no roll).
///
/// The basis vectors `forward` and `right` are derived from yaw/pitch via
/// the standard spherical-to-Cartesian mapping and recomputed wholesale
/// after every orientation change, so they stay unit length and mutually
/// orthogonal regardless of the update sequence. `up` is pinned to
/// [`WORLD_UP`].
///
/// The camera consumes per-frame input *deltas* (key-held directions, cursor
/// movement, scroll) and produces a view matrix; the projection matrix is the
/// renderer's job, built from [`field_of_view`](Self::field_of_view).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,

    /// Rotation about the world vertical axis, degrees. Unbounded; wraps
    /// implicitly through the trigonometric mapping.
    yaw: f32,
    /// Rotation about the local horizontal axis, degrees.
    pitch: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    field_of_view: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera at `position` with the given yaw/pitch in degrees.
    ///
    /// Angles are unconstrained at construction; derived vectors are
    /// computed immediately.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            field_of_view: MAX_FOV,
        };
        camera.update_vectors();
        camera
    }

    /// Create a camera at `position` with speed, sensitivity, starting
    /// angles, and field of view taken from `options`.
    #[must_use]
    pub fn from_options(position: Vec3, options: &CameraOptions) -> Self {
        let mut camera = Self::new(position, options.yaw, options.pitch);
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.field_of_view = options.field_of_view;
        camera
    }

    /// Build the right-handed view matrix for the current state.
    ///
    /// Pure function of camera state; the eye is `position`, the target is
    /// `position + forward`.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, WORLD_UP)
    }

    /// Vertical field of view in degrees, for the renderer's projection.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit forward (view) direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Displace the camera along its basis vectors.
    ///
    /// Moves `movement_speed * delta_time` world units along `forward`
    /// (forward/backward) or `right` (strafing). `delta_time` is the
    /// caller-supplied frame time in seconds; it is not validated, so a
    /// negative value moves the camera the opposite way. No world-boundary
    /// logic — that belongs to the caller.
    pub fn handle_keyboard(
        &mut self,
        direction: MovementDirection,
        delta_time: f32,
    ) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            MovementDirection::Forward => {
                self.position += self.forward * velocity;
            }
            MovementDirection::Backward => {
                self.position -= self.forward * velocity;
            }
            MovementDirection::StrafeLeft => {
                self.position -= self.right * velocity;
            }
            MovementDirection::StrafeRight => {
                self.position += self.right * velocity;
            }
        }
    }

    /// Turn the camera from raw cursor deltas.
    ///
    /// Offsets are scaled by `mouse_sensitivity` and applied to yaw/pitch;
    /// the vertical offset is inverted so moving the pointer up tilts the
    /// view up. When `constrain_pitch` is set, pitch is clamped to
    /// ±[`PITCH_LIMIT`] so the view never flips over the poles.
    pub fn handle_mouse(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch -= y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Zoom by narrowing/widening the field of view from a scroll delta.
    ///
    /// Clamps the scroll *delta* to the [`MIN_FOV`]..[`MAX_FOV`] range, not
    /// the resulting angle, so repeated large scrolls can drift the field
    /// of view outside that range. Long-standing behavior callers tune
    /// against; kept as is.
    pub fn handle_scroll(&mut self, y_offset: f32) {
        self.field_of_view -= y_offset.clamp(MIN_FOV, MAX_FOV);
        if !(MIN_FOV..=MAX_FOV).contains(&self.field_of_view) {
            log::debug!(
                "field of view drifted to {:.1}°",
                self.field_of_view
            );
        }
    }

    /// Recompute `forward` and `right` from yaw/pitch.
    ///
    /// Standard spherical-to-Cartesian mapping for a yaw/pitch orientation;
    /// normalizing both vectors here restores the orthonormal-basis
    /// invariant wholesale rather than maintaining it incrementally.
    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.forward = Vec3::new(
            yaw_cos * pitch_cos,
            pitch_sin,
            yaw_sin * pitch_cos,
        )
        .normalize();
        self.right = self.forward.cross(WORLD_UP).normalize();
    }
}
