use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::controller::{Button, Controller};

/// Lines scrolled per wheel detent, used to normalize pixel deltas
const PIXELS_PER_LINE: f32 = 50.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    /// Scroll wheel delta since last reset, in lines
    scroll_delta: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_pressed(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.set_pressed(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.mouse_position {
                    self.mouse_delta.0 += new_pos.0 - old_pos.0;
                    self.mouse_delta.1 += new_pos.1 - old_pos.1;
                }
                self.mouse_position = Some(new_pos);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            _ => {}
        }
    }

    /// Reset per-frame state (mouse and scroll deltas)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    fn set_pressed(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(button);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Winit event construction requires internal fields that are not
    // publicly accessible. These tests verify the Controller trait
    // implementation and the delta bookkeeping.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::MouseLeft));
        assert_eq!(controller.mouse_position(), None);
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();

        controller.set_pressed(Button::MouseLeft, ElementState::Pressed);
        assert!(controller.is_down(Button::MouseLeft));

        controller.set_pressed(Button::MouseLeft, ElementState::Released);
        assert!(!controller.is_down(Button::MouseLeft));
    }

    #[test]
    fn test_delta_reset() {
        let mut controller = WinitController::new();
        controller.mouse_delta = (10.0, 5.0);
        controller.scroll_delta = 2.0;
        controller.mouse_position = Some((100.0, 200.0));

        controller.reset_deltas();

        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
        // Position should remain
        assert_eq!(controller.mouse_position(), Some((100.0, 200.0)));
    }
}
