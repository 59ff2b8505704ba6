//! The edge latch over a polled button source.

use std::thread;
use std::time::Duration;

/// One latched button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Forward,
    Confirm,
    /// Terminal-shell extension: not a game control, never debounced.
    Quit,
}

/// Instantaneous state of the physical controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub confirm: bool,
    pub quit: bool,
}

impl ButtonState {
    /// Whether any game control (quit aside) is held.
    pub fn any_held(&self) -> bool {
        self.left || self.right || self.forward || self.confirm
    }
}

/// Polled, non-blocking view of the physical controls.
pub trait ButtonSource {
    fn sample(&mut self) -> ButtonState;
}

/// Sleep between samples while blocked at a confirm gate.
const GATE_POLL_MS: u64 = 10;

/// Edge latch over a `ButtonSource`: a press is reported exactly once,
/// then swallowed until `unlock` observes every control released.
#[derive(Debug)]
pub struct DebouncedButtons<S> {
    source: S,
    accept: bool,
}

impl<S: ButtonSource> DebouncedButtons<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            accept: true,
        }
    }

    /// Report at most one press. Scan priority: forward, left, confirm,
    /// right.
    pub fn poll(&mut self) -> Option<Button> {
        let state = self.source.sample();
        if state.quit {
            return Some(Button::Quit);
        }
        if !self.accept {
            return None;
        }

        let button = if state.forward {
            Button::Forward
        } else if state.left {
            Button::Left
        } else if state.confirm {
            Button::Confirm
        } else if state.right {
            Button::Right
        } else {
            return None;
        };
        self.accept = false;
        Some(button)
    }

    /// Re-arm the latch once every control is released. Called once per
    /// tick, after the frame is drawn.
    pub fn unlock(&mut self) {
        if !self.source.sample().any_held() {
            self.accept = true;
        }
    }

    /// Block until a confirm edge (or quit). This is the wait the start
    /// and round-end gates park on.
    pub fn wait_for_confirm(&mut self) -> Button {
        loop {
            match self.poll() {
                Some(Button::Confirm) => return Button::Confirm,
                Some(Button::Quit) => return Button::Quit,
                _ => {}
            }
            self.unlock();
            thread::sleep(Duration::from_millis(GATE_POLL_MS));
        }
    }
}
