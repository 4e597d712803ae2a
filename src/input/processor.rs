//! Accumulates raw platform events and applies them to a camera.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held movement keys, pending scroll) and the key-binding map. It is the
//! explicit context object that replaces ambient globals shared with window
//! callbacks: the event loop feeds it events as they arrive, then calls
//! [`apply`](InputProcessor::apply) once per frame with the frame's
//! `delta_time`.

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use crate::camera::{Camera, MovementDirection};
use crate::options::{KeybindingOptions, Options};

/// Converts raw window events into per-frame camera updates.
///
/// Cursor and scroll deltas accumulate between frames; held movement keys
/// are tracked as a set. [`apply`](Self::apply) flushes everything into the
/// camera and resets the accumulators.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// processor.handle_event(event);
/// if processor.handle_key("KeyW", pressed) {
///     // consumed as a movement binding
/// }
///
/// // Once per frame:
/// processor.apply(&mut camera, delta_time);
/// ```
pub struct InputProcessor {
    /// Last observed cursor position; `None` until the first sample so the
    /// initial cursor placement does not register as a look delta.
    last_cursor: Option<Vec2>,
    /// Cursor movement accumulated since the last `apply`.
    look_delta: Vec2,
    /// Scroll accumulated since the last `apply`.
    scroll_delta: f32,
    /// Movement directions currently held.
    held: HashSet<MovementDirection>,
    /// Key string → movement direction mapping.
    keybindings: KeybindingOptions,
    /// Whether `apply` clamps pitch at the poles.
    constrain_pitch: bool,
}

impl InputProcessor {
    /// Create a processor with default WASD bindings and pitch clamping on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor: None,
            look_delta: Vec2::ZERO,
            scroll_delta: 0.0,
            held: HashSet::new(),
            keybindings: KeybindingOptions::default(),
            constrain_pitch: true,
        }
    }

    /// Create a processor configured from loaded options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            keybindings: options.keybindings.clone(),
            constrain_pitch: options.camera.constrain_pitch,
            ..Self::new()
        }
    }

    /// Last observed cursor position in physical pixels, if any.
    #[must_use]
    pub fn cursor_pos(&self) -> Option<(f32, f32)> {
        self.last_cursor.map(|pos| (pos.x, pos.y))
    }

    /// Whether the given movement direction is currently held.
    #[must_use]
    pub fn is_held(&self, direction: MovementDirection) -> bool {
        self.held.contains(&direction)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn keybindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.keybindings
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(x, y);
                if let Some(last) = self.last_cursor {
                    self.look_delta += current - last;
                }
                self.last_cursor = Some(current);
            }
            InputEvent::Scroll { delta } => self.scroll_delta += delta,
            InputEvent::FocusLost => self.reset(),
        }
    }

    /// Process a key press/release by physical key string
    /// (`winit::keyboard::KeyCode` debug format: `"KeyW"`, `"KeyA"`, …).
    ///
    /// Returns `true` if the key is bound to a movement direction and was
    /// consumed.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        let Some(direction) = self.keybindings.lookup(key) else {
            return false;
        };
        if pressed {
            let _ = self.held.insert(direction);
        } else {
            let _ = self.held.remove(&direction);
        }
        true
    }

    /// Flush accumulated input into the camera for one frame.
    ///
    /// Drives one `handle_keyboard` call per held direction with the given
    /// `delta_time` (seconds), then flushes any pending look and scroll
    /// deltas. Accumulators reset; the held-key set persists until the keys
    /// are released.
    pub fn apply(&mut self, camera: &mut Camera, delta_time: f32) {
        // Deterministic order; displacements commute anyway since the basis
        // vectors only change on mouse input.
        for direction in [
            MovementDirection::Forward,
            MovementDirection::Backward,
            MovementDirection::StrafeLeft,
            MovementDirection::StrafeRight,
        ] {
            if self.held.contains(&direction) {
                camera.handle_keyboard(direction, delta_time);
            }
        }

        if self.look_delta.length_squared() > 0.0 {
            camera.handle_mouse(
                self.look_delta.x,
                self.look_delta.y,
                self.constrain_pitch,
            );
            self.look_delta = Vec2::ZERO;
        }

        if self.scroll_delta.abs() > 0.0 {
            camera.handle_scroll(self.scroll_delta);
            self.scroll_delta = 0.0;
        }
    }

    /// Drop all transient state: held keys, pending deltas, and cursor
    /// tracking. The next cursor sample re-establishes the reference
    /// position without producing a look delta.
    fn reset(&mut self) {
        self.held.clear();
        self.look_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
        self.last_cursor = None;
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{DEFAULT_YAW, MAX_FOV};

    #[test]
    fn first_cursor_sample_produces_no_look_delta() {
        let mut processor = InputProcessor::new();
        let mut camera = Camera::default();

        processor.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        processor.apply(&mut camera, 0.016);
        assert_eq!(camera.yaw(), DEFAULT_YAW);

        // Subsequent samples do turn the camera.
        processor.handle_event(InputEvent::CursorMoved { x: 410.0, y: 300.0 });
        processor.apply(&mut camera, 0.016);
        assert!(camera.yaw() > DEFAULT_YAW);
    }

    #[test]
    fn cursor_deltas_accumulate_between_frames() {
        let mut processor = InputProcessor::new();
        let mut camera = Camera::default();

        processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        processor.handle_event(InputEvent::CursorMoved { x: 5.0, y: 0.0 });
        processor.handle_event(InputEvent::CursorMoved { x: 10.0, y: 0.0 });
        processor.apply(&mut camera, 0.016);

        // 10 px total at default sensitivity 0.1 → 1° of yaw.
        assert!((camera.yaw() - (DEFAULT_YAW + 1.0)).abs() < 1e-4);

        // Flushed: a second apply leaves the camera untouched.
        let yaw = camera.yaw();
        processor.apply(&mut camera, 0.016);
        assert_eq!(camera.yaw(), yaw);
    }

    #[test]
    fn held_movement_keys_drive_the_camera_each_frame() {
        let mut processor = InputProcessor::new();
        let mut camera = Camera::default();

        assert!(processor.handle_key("KeyW", true));
        assert!(processor.is_held(MovementDirection::Forward));

        processor.apply(&mut camera, 0.5);
        processor.apply(&mut camera, 0.5);
        // 2.5 units/s for 1 s along -Z.
        assert!((camera.position().z + 2.5).abs() < 1e-4);

        assert!(processor.handle_key("KeyW", false));
        processor.apply(&mut camera, 0.5);
        assert!((camera.position().z + 2.5).abs() < 1e-4);
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut processor = InputProcessor::new();
        assert!(!processor.handle_key("KeyZ", true));
        assert!(!processor.is_held(MovementDirection::Forward));
    }

    #[test]
    fn scroll_accumulates_and_flushes() {
        let mut processor = InputProcessor::new();
        let mut camera = Camera::default();

        processor.handle_event(InputEvent::Scroll { delta: 2.0 });
        processor.handle_event(InputEvent::Scroll { delta: 3.0 });
        processor.apply(&mut camera, 0.016);
        assert!((camera.field_of_view() - (MAX_FOV - 5.0)).abs() < 1e-4);
    }

    #[test]
    fn focus_lost_clears_held_keys_and_cursor_tracking() {
        let mut processor = InputProcessor::new();
        let mut camera = Camera::default();

        let _ = processor.handle_key("KeyW", true);
        processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        processor.handle_event(InputEvent::FocusLost);

        assert!(!processor.is_held(MovementDirection::Forward));
        assert_eq!(processor.cursor_pos(), None);

        // Re-entry cursor placement must not turn the camera.
        processor.handle_event(InputEvent::CursorMoved { x: 900.0, y: 900.0 });
        processor.apply(&mut camera, 0.016);
        assert_eq!(camera.yaw(), DEFAULT_YAW);
        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn from_options_honors_unconstrained_pitch() {
        let mut options = Options::default();
        options.camera.constrain_pitch = false;
        let mut processor = InputProcessor::from_options(&options);
        let mut camera = Camera::default();

        processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: -2000.0 });
        processor.apply(&mut camera, 0.016);
        assert!(camera.pitch() > 89.0);
    }
}
