//! The game session: one aggregate owning every piece of round state,
//! and the fixed-order tick that advances it.
//!
//! Ownership is tree-shaped (session -> lanes -> logs, session -> frog,
//! session -> viewport); components never reference each other and the
//! tick sequence is the only writer. Fields are public: tests set up
//! scenarios by poking state directly.

use crate::core::lanes::Lanes;
use crate::core::rng::RngSource;
use crate::core::scoring::{compute_bonus, BACKWARD_POINTS, FORWARD_POINTS};
use crate::types::{Command, RoundOutcome, Tile, TileRows, MAP_COLS, MAP_ROWS, VISIBLE_ROWS};

/// The player token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frog {
    pub row: i16,
    pub col: i16,
}

/// The visible window: `VISIBLE_ROWS` map rows starting at `top_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_row: i16,
}

impl Viewport {
    /// Follow the frog by at most one row per tick: scroll up when the
    /// frog reaches the window's top edge, down when it falls below the
    /// bottom edge.
    pub fn update(&mut self, frog_row: i16) {
        if frog_row == self.top_row {
            self.top_row -= 1;
        } else if frog_row > self.top_row + VISIBLE_ROWS as i16 - 1 {
            self.top_row += 1;
        }
    }
}

/// Round lifecycle. The gate phases block on a confirm edge; waiting is
/// the driver's job, the session just parks there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    StartGate,
    Playing,
    RoundEnd(RoundOutcome),
}

/// All mutable state of one round.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub lanes: Lanes,
    pub frog: Frog,
    pub viewport: Viewport,
    pub score: i32,
    pub ticks: u32,
    pub phase: Phase,
}

impl GameSession {
    /// A fresh session, parked at the start gate.
    pub fn new() -> Self {
        Self {
            lanes: Lanes::empty(),
            frog: Frog {
                row: MAP_ROWS - 1,
                col: MAP_COLS / 2,
            },
            viewport: Viewport {
                top_row: MAP_ROWS - 2,
            },
            score: 0,
            ticks: 0,
            phase: Phase::StartGate,
        }
    }

    /// (Re)initialize for a new round: frog at bottom-center, window on
    /// the bottom two rows, fresh lanes, score and tick counter cleared.
    pub fn start_round(&mut self, rng: &mut dyn RngSource) {
        self.frog = Frog {
            row: MAP_ROWS - 1,
            col: MAP_COLS / 2,
        };
        self.viewport = Viewport {
            top_row: MAP_ROWS - 2,
        };
        self.lanes = Lanes::generate(rng);
        self.score = 0;
        self.ticks = 0;
        self.phase = Phase::Playing;
    }

    /// One simulation tick, in fixed order: logs advance, the frog's
    /// footing is resolved (drown / carry / carried off the map), the
    /// sampled command applies, the window follows, and reaching the top
    /// row wins. A tick that ends the round is not counted.
    pub fn tick(&mut self, cmd: Option<Command>) {
        if self.phase != Phase::Playing {
            return;
        }

        self.lanes.advance();

        if !self.resolve_support() {
            self.phase = Phase::RoundEnd(RoundOutcome::Fail);
            return;
        }

        self.apply_command(cmd);
        self.viewport.update(self.frog.row);

        if self.frog.row == 0 {
            let bonus = compute_bonus(self.ticks);
            self.score += bonus as i32;
            self.phase = Phase::RoundEnd(RoundOutcome::Win { bonus });
            return;
        }

        self.ticks += 1;
    }

    /// Check the frog's footing. Ground rows always hold. On water, no
    /// support means open water; a supporting log that stepped this tick
    /// carries the frog along, and a carry past the map edge ends the
    /// round. Returns false when the round ends here.
    fn resolve_support(&mut self) -> bool {
        let Some(lane) = self.lanes.at(self.frog.row) else {
            return true;
        };
        match lane.find_support(self.frog.col) {
            Some(support) => {
                if support.moved {
                    self.frog.col += support.flow.dx();
                    if self.frog.col < 0 || self.frog.col >= MAP_COLS {
                        return false;
                    }
                }
                true
            }
            None => false,
        }
    }

    fn apply_command(&mut self, cmd: Option<Command>) {
        match cmd {
            Some(Command::Left) => self.frog.col = clamp(self.frog.col - 1, 0, MAP_COLS - 1),
            Some(Command::Right) => self.frog.col = clamp(self.frog.col + 1, 0, MAP_COLS - 1),
            Some(Command::Forward) => {
                if self.frog.row > 0 {
                    self.frog.row -= 1;
                    self.score += FORWARD_POINTS;
                }
            }
            Some(Command::Backward) => {
                if self.frog.row < MAP_ROWS - 1 {
                    self.frog.row += 1;
                    self.score += BACKWARD_POINTS;
                }
            }
            None => {}
        }
    }

    /// Compose the visible window for the render sink: ground or water
    /// base per row, the on-screen log tiles, then the frog.
    pub fn visible_rows(&self) -> TileRows {
        let mut rows = [[Tile::Water; MAP_COLS as usize]; VISIBLE_ROWS];
        for (i, tiles) in rows.iter_mut().enumerate() {
            let row = self.viewport.top_row + i as i16;
            if row == 0 || row == MAP_ROWS - 1 {
                *tiles = [Tile::Ground; MAP_COLS as usize];
            } else if let Some(lane) = self.lanes.at(row) {
                for log in &lane.logs {
                    for col in log.start_col..log.start_col + log.length {
                        if (0..MAP_COLS).contains(&col) {
                            tiles[col as usize] = Tile::Log;
                        }
                    }
                }
            }
            if self.frog.row == row {
                tiles[self.frog.col as usize] = Tile::Frog;
            }
        }
        rows
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Saturating bound: below `lo` gives `lo`, above `hi` gives `hi`.
pub fn clamp(x: i16, lo: i16, hi: i16) -> i16 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}
