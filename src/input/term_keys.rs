//! Crossterm-backed button source.
//!
//! Terminals deliver presses as events and often never report a release,
//! so each control is held from its last press event until an explicit
//! release arrives or a short timeout expires. Without the timeout a
//! single tap would read as a sustained hold and jam the debounce latch.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::handler::{ButtonSource, ButtonState};

/// How long a key counts as held after its last press when the terminal
/// does not emit release events.
const KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy)]
enum Control {
    Left,
    Right,
    Forward,
    Confirm,
}

/// Map a key code to the physical control it stands for. Down-arrow keys
/// land on the confirm control, which doubles as the backward step in
/// play.
fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Control::Forward),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Enter
        | KeyCode::Char(' ') => Some(Control::Confirm),
        _ => None,
    }
}

/// Check if key should quit the game.
fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Held-key tracker fed by the crossterm event queue.
#[derive(Debug, Default)]
pub struct TermKeys {
    left: Option<Instant>,
    right: Option<Instant>,
    forward: Option<Instant>,
    confirm: Option<Instant>,
    quit: bool,
}

impl TermKeys {
    pub fn new() -> Self {
        Self::default()
    }

    fn drain_events(&mut self) {
        while event::poll(Duration::from_millis(0)).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => self.apply_key(key),
                Ok(_) => {}
                Err(_) => break,
            }
        }
    }

    fn apply_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Release && is_quit(key) {
            self.quit = true;
            return;
        }
        let Some(control) = control_for(key.code) else {
            return;
        };
        let slot = match control {
            Control::Left => &mut self.left,
            Control::Right => &mut self.right,
            Control::Forward => &mut self.forward,
            Control::Confirm => &mut self.confirm,
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => *slot = Some(Instant::now()),
            KeyEventKind::Release => *slot = None,
        }
    }

    fn expire_stale_holds(&mut self) {
        let timeout = Duration::from_millis(KEY_RELEASE_TIMEOUT_MS);
        for slot in [
            &mut self.left,
            &mut self.right,
            &mut self.forward,
            &mut self.confirm,
        ] {
            if slot.is_some_and(|since| since.elapsed() > timeout) {
                *slot = None;
            }
        }
    }
}

impl ButtonSource for TermKeys {
    fn sample(&mut self) -> ButtonState {
        self.drain_events();
        self.expire_stale_holds();
        ButtonState {
            left: self.left.is_some(),
            right: self.right.is_some(),
            forward: self.forward.is_some(),
            confirm: self.confirm.is_some(),
            quit: self.quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert!(matches!(control_for(KeyCode::Left), Some(Control::Left)));
        assert!(matches!(control_for(KeyCode::Char('H')), Some(Control::Left)));
        assert!(matches!(control_for(KeyCode::Right), Some(Control::Right)));
        assert!(matches!(control_for(KeyCode::Up), Some(Control::Forward)));
        assert!(matches!(control_for(KeyCode::Char('w')), Some(Control::Forward)));
    }

    #[test]
    fn test_confirm_keys_include_backward_aliases() {
        assert!(matches!(control_for(KeyCode::Enter), Some(Control::Confirm)));
        assert!(matches!(control_for(KeyCode::Char(' ')), Some(Control::Confirm)));
        assert!(matches!(control_for(KeyCode::Down), Some(Control::Confirm)));
        assert!(control_for(KeyCode::Char('x')).is_none());
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(is_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(is_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_press_and_release_toggle_the_hold() {
        let mut keys = TermKeys::new();
        keys.apply_key(KeyEvent::from(KeyCode::Left));
        assert!(keys.left.is_some());

        keys.apply_key(KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(keys.left.is_none());
    }
}
