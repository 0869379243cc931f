//! Atomic layer: input and visibility events seen by the controller

/// Keys the host reports to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    Space,
    Other,
}

impl Key {
    /// Keys that scroll the page when pressed
    #[inline]
    pub fn is_scroll_key(self) -> bool {
        !matches!(self, Key::Other)
    }
}

/// Input from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown,
    TouchStart,
    TouchMove,
    Wheel,
    Key(Key),
    /// Generic scroll notification; also fired by the controller's own writes
    Scroll,
}

impl InputEvent {
    /// Whether this event means the user wants manual control
    ///
    /// Only direct input-device events count. `Scroll` never does, or every
    /// write the controller makes would suspend it.
    pub fn is_interaction(&self) -> bool {
        match self {
            InputEvent::PointerDown
            | InputEvent::TouchStart
            | InputEvent::TouchMove
            | InputEvent::Wheel => true,
            InputEvent::Key(key) => key.is_scroll_key(),
            InputEvent::Scroll => false,
        }
    }
}

/// Page visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}
