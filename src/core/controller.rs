/// Input button identifier, decoupled from the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
}

/// Controller - polled button state for one frame
pub trait Controller {
    /// Check if a button is currently down
    fn is_down(&self, button: Button) -> bool;
}
