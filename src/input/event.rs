/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// accumulates them and applies the result to a
/// [`Camera`](crate::camera::Camera) once per frame. Key presses go through
/// [`InputProcessor::handle_key`](super::InputProcessor::handle_key)
/// instead, since they carry a borrowed key-code string.
///
/// # Example
///
/// ```ignore
/// processor.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
/// processor.handle_event(InputEvent::Scroll { delta: 1.0 });
/// processor.apply(&mut camera, frame_clock.tick());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel (positive narrows the field of view).
    Scroll {
        /// Scroll amount in lines/notches.
        delta: f32,
    },
    /// The window lost input focus; held keys and cursor tracking reset so
    /// the camera does not jump when focus returns.
    FocusLost,
}
