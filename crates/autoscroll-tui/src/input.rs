use autoscroll_core::{InputEvent, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Rows moved per wheel notch
const WHEEL_ROWS: i32 = 3;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleAutoScroll, // 's': explicit start/stop
    SpeedUp,
    SpeedDown,
    ToggleReducedMotion,
    ToggleHelp,
    ScrollRows(i32),
    ScrollPages(i32),
    JumpToTop,
    JumpToBottom,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: &KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ToggleAutoScroll,
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::SpeedUp,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::SpeedDown,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleReducedMotion,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollRows(1),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollRows(-1),
        (KeyCode::Char('f'), KeyModifiers::CONTROL)
        | (KeyCode::PageDown, _)
        | (KeyCode::Char(' '), _) => Action::ScrollPages(1),
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
            Action::ScrollPages(-1)
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,

        _ => Action::None,
    }
}

/// What the controller sees for a key press
///
/// Every key that scrolls the document counts as interaction, the control
/// keys (`s`, `+`, `q`, ...) do not.
pub fn interaction_for_key(key: &KeyEvent) -> InputEvent {
    let key = match (key.code, key.modifiers) {
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Key::ArrowUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Key::ArrowDown,
        (KeyCode::Left, _) => Key::ArrowLeft,
        (KeyCode::Right, _) => Key::ArrowRight,
        (KeyCode::PageUp, _) | (KeyCode::Char('b'), KeyModifiers::CONTROL) => Key::PageUp,
        (KeyCode::PageDown, _) | (KeyCode::Char('f'), KeyModifiers::CONTROL) => Key::PageDown,
        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => Key::Home,
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => Key::End,
        (KeyCode::Char(' '), _) => Key::Space,
        _ => Key::Other,
    };
    InputEvent::Key(key)
}

/// What the controller sees for a mouse event, if anything
pub fn interaction_for_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::ScrollDown
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => Some(InputEvent::Wheel),
        MouseEventKind::Down(_) => Some(InputEvent::PointerDown),
        // Closest terminal analogue of a touch drag
        MouseEventKind::Drag(_) => Some(InputEvent::TouchMove),
        MouseEventKind::Up(_) | MouseEventKind::Moved => None,
    }
}

/// Manual scrolling for a mouse event
pub fn handle_mouse_event(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollRows(WHEEL_ROWS),
        MouseEventKind::ScrollUp => Action::ScrollRows(-WHEEL_ROWS),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_scroll_keys_are_interaction() {
        for (code, mods) in [
            (KeyCode::Down, KeyModifiers::NONE),
            (KeyCode::Char('j'), KeyModifiers::NONE),
            (KeyCode::PageDown, KeyModifiers::NONE),
            (KeyCode::Char(' '), KeyModifiers::NONE),
            (KeyCode::Home, KeyModifiers::NONE),
            (KeyCode::Char('G'), KeyModifiers::SHIFT),
            (KeyCode::Left, KeyModifiers::NONE),
        ] {
            assert!(interaction_for_key(&key(code, mods)).is_interaction(), "{:?}", code);
        }
    }

    #[test]
    fn test_control_keys_are_not_interaction() {
        for code in [
            KeyCode::Char('s'),
            KeyCode::Char('q'),
            KeyCode::Char('+'),
            KeyCode::Char('m'),
            KeyCode::Char('?'),
        ] {
            let event = interaction_for_key(&key(code, KeyModifiers::NONE));
            assert_eq!(event, InputEvent::Key(Key::Other));
            assert!(!event.is_interaction());
        }
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(
            handle_key_event(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(&key(KeyCode::Char('s'), KeyModifiers::NONE)),
            Action::ToggleAutoScroll
        );
        assert_eq!(
            handle_key_event(&key(KeyCode::PageUp, KeyModifiers::NONE)),
            Action::ScrollPages(-1)
        );
        assert_eq!(
            handle_key_event(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Action::JumpToBottom
        );
        assert_eq!(
            handle_key_event(&key(KeyCode::Char('x'), KeyModifiers::NONE)),
            Action::None
        );
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(
            interaction_for_mouse(&mouse(MouseEventKind::ScrollDown)),
            Some(InputEvent::Wheel)
        );
        assert_eq!(
            interaction_for_mouse(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(InputEvent::PointerDown)
        );
        assert_eq!(interaction_for_mouse(&mouse(MouseEventKind::Moved)), None);
        assert_eq!(
            handle_mouse_event(&mouse(MouseEventKind::ScrollUp)),
            Action::ScrollRows(-WHEEL_ROWS)
        );
    }
}
