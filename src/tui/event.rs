use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from any mode
    ForceQuit,
    Escape,
    Submit,
    InputChar(char),
    Paste(String),
    Backspace,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Ignore key releases reported by terminals with keyboard enhancement
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_slash_is_plain_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('/'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('/'))
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut release = key(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
