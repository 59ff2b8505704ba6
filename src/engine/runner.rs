//! The blocking game loop: confirm gates, paced ticks, command mapping.
//!
//! The session itself is pure; everything wall-clock shaped lives here.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::rng::RngSource;
use crate::core::session::{GameSession, Phase};
use crate::input::{Button, ButtonSource, DebouncedButtons};
use crate::term::Screen;
use crate::types::{Command, RoundOutcome, TICK_MS};

const TITLE_LINE: &str = "MiniFrogger";
const START_LINE: &str = "Press enter";

/// Map an in-round button to a frog command. The confirm control doubles
/// as the backward step while playing.
fn command_for(button: Button) -> Option<Command> {
    match button {
        Button::Left => Some(Command::Left),
        Button::Right => Some(Command::Right),
        Button::Forward => Some(Command::Forward),
        Button::Confirm => Some(Command::Backward),
        Button::Quit => None,
    }
}

/// Run rounds until the player quits: start gate, paced Playing ticks,
/// end screen, restart gate, again.
pub fn run<S: ButtonSource>(
    screen: &mut dyn Screen,
    input: &mut DebouncedButtons<S>,
    rng: &mut dyn RngSource,
) -> Result<()> {
    let mut session = GameSession::new();

    screen.draw_message(TITLE_LINE, START_LINE)?;
    if input.wait_for_confirm() == Button::Quit {
        return Ok(());
    }

    loop {
        session.start_round(rng);

        let outcome = loop {
            let tick_start = Instant::now();

            let button = input.poll();
            if button == Some(Button::Quit) {
                return Ok(());
            }
            session.tick(button.and_then(command_for));

            if let Phase::RoundEnd(outcome) = session.phase {
                break outcome;
            }

            screen.draw_playfield(&session.visible_rows())?;
            input.unlock();

            if let Some(rest) = Duration::from_millis(TICK_MS).checked_sub(tick_start.elapsed()) {
                thread::sleep(rest);
            }
        };

        match outcome {
            RoundOutcome::Win { bonus } => {
                screen.draw_message("YOU WIN!", &format!("Score:{} +{}", session.score, bonus))?;
            }
            RoundOutcome::Fail => {
                screen.draw_message("GAME OVER!", &format!("Score: {}", session.score))?;
            }
        }

        if input.wait_for_confirm() == Button::Quit {
            return Ok(());
        }
    }
}
