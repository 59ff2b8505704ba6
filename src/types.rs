//! Core types shared across the application.
//!
//! Pure data with no external dependencies: the map geometry, the fixed
//! lane archetype table, timing/bonus constants, and the small enums the
//! simulation and the terminal shell exchange.

/// Map dimensions. Row `0` and row `MAP_ROWS - 1` are ground; every row
/// between them is a water lane.
pub const MAP_COLS: i16 = 16;
pub const MAP_ROWS: i16 = 12;

/// Rows visible at once (the playfield mimics a 16x2 character LCD).
pub const VISIBLE_ROWS: usize = 2;

/// Logs per water lane, and the fixed open-water gap between consecutive
/// logs in a lane.
pub const LOGS_PER_ROW: usize = 3;
pub const GAP_BETWEEN_LOGS: i16 = 3;

/// Completion bonus: starts at the max and loses one point per elapsed
/// decay interval.
pub const QUICK_BONUS_MAX: u32 = 50;
pub const QUICK_BONUS_DECAY_TICKS: u32 = 50;

/// Tick pacing for the terminal runner, in milliseconds. The core itself
/// counts ticks and never reads a clock.
pub const TICK_MS: u64 = 100;

/// A lane archetype: log length plus movement cadence in ticks per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneArchetype {
    pub length: i16,
    pub speed: u8,
}

/// The fixed table every lane is drawn from.
pub const LANE_ARCHETYPES: [LaneArchetype; 9] = [
    LaneArchetype { length: 5, speed: 10 },
    LaneArchetype { length: 5, speed: 8 },
    LaneArchetype { length: 5, speed: 6 },
    LaneArchetype { length: 4, speed: 10 },
    LaneArchetype { length: 4, speed: 8 },
    LaneArchetype { length: 4, speed: 6 },
    LaneArchetype { length: 3, speed: 10 },
    LaneArchetype { length: 3, speed: 8 },
    LaneArchetype { length: 3, speed: 6 },
];

/// Horizontal drift of a lane and its logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Left,
    Right,
}

impl Flow {
    /// Column delta for one step.
    pub fn dx(self) -> i16 {
        match self {
            Flow::Left => -1,
            Flow::Right => 1,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Flow::Left => Flow::Right,
            Flow::Right => Flow::Left,
        }
    }
}

/// One frog command. The session consumes at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Forward,
    Backward,
}

/// Tile alphabet the render sink understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Ground,
    Water,
    Log,
    Frog,
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Reached the top row. Carries the completion bonus (already folded
    /// into the final score) for the end screen.
    Win { bonus: u32 },
    /// Open water, or carried off the map edge.
    Fail,
}

/// The visible slice of the map handed to the render sink each tick.
pub type TileRows = [[Tile; MAP_COLS as usize]; VISIBLE_ROWS];
