//! Terminal mini-frogger (binary entrypoint).
//!
//! Brings the terminal up, runs the engine, and always restores the
//! terminal state on the way out.

use anyhow::Result;

use tui_frogger::core::rng::ClockRng;
use tui_frogger::engine;
use tui_frogger::input::{DebouncedButtons, TermKeys};
use tui_frogger::term::TerminalScreen;

fn main() -> Result<()> {
    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen) -> Result<()> {
    let mut input = DebouncedButtons::new(TermKeys::new());
    let mut rng = ClockRng::new();
    engine::run(screen, &mut input, &mut rng)
}
