/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - handles button and pointer input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Accumulated mouse movement since the last delta reset
    fn mouse_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Accumulated scroll wheel movement since the last delta reset
    fn scroll_delta(&self) -> f32 {
        0.0
    }
}
