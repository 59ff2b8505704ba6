//! Water lanes: log generation, per-tick motion, and support detection.
//!
//! Every water row carries `LOGS_PER_ROW` logs of one archetype, evenly
//! spaced, all drifting the same way. Log coordinates are modular: a log
//! that leaves the map entirely is shifted by one full `total_len`, so it
//! re-enters from the other edge and lane density never changes.

use arrayvec::ArrayVec;

use crate::core::rng::RngSource;
use crate::types::{
    Flow, LaneArchetype, GAP_BETWEEN_LOGS, LANE_ARCHETYPES, LOGS_PER_ROW, MAP_COLS, MAP_ROWS,
};

/// Number of water rows: everything strictly between the two ground rows.
pub const WATER_ROWS: usize = (MAP_ROWS - 2) as usize;

/// One drifting log. `start_col` is the leftmost tile and may sit outside
/// `[0, MAP_COLS)` while the log is partially or fully off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Log {
    pub start_col: i16,
    pub length: i16,
    pub flow: Flow,
    /// Ticks per one-column step.
    pub speed: u8,
    /// Step counter; `0` exactly on the tick the log just stepped.
    pub tick: u8,
}

impl Log {
    /// Whether `col` is one of this log's tiles.
    pub fn covers(&self, col: i16) -> bool {
        col >= self.start_col && col < self.start_col + self.length
    }

    /// The tile this log left behind when it last stepped: one behind the
    /// trailing edge relative to its flow.
    pub fn vacated_col(&self) -> i16 {
        match self.flow {
            Flow::Right => self.start_col - 1,
            Flow::Left => self.start_col + self.length,
        }
    }
}

/// The footing under a column, as seen by the frog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Support {
    pub flow: Flow,
    /// True exactly when the supporting log stepped this tick; the frog
    /// is carried one column along in that case.
    pub moved: bool,
}

/// One water lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub logs: ArrayVec<Log, LOGS_PER_ROW>,
    /// Cached wraparound period: total log length plus all gaps.
    pub total_len: i16,
}

impl Lane {
    /// Lay out a fresh lane: logs placed from the upstream edge, each
    /// offset from the previous one by `length + gap` in the flow
    /// direction.
    pub fn generate(archetype: LaneArchetype, flow: Flow) -> Self {
        let mut logs = ArrayVec::new();
        let mut pos = match flow {
            Flow::Right => 0,
            Flow::Left => MAP_COLS - 1,
        };
        for _ in 0..LOGS_PER_ROW {
            logs.push(Log {
                start_col: pos,
                length: archetype.length,
                flow,
                speed: archetype.speed,
                tick: 0,
            });
            pos += (archetype.length + GAP_BETWEEN_LOGS) * flow.dx();
        }

        let total_len =
            logs.iter().map(|l| l.length).sum::<i16>() + GAP_BETWEEN_LOGS * LOGS_PER_ROW as i16;

        Self { logs, total_len }
    }

    /// Advance every log by one tick. A log steps one column each `speed`
    /// ticks; a log that has left the map entirely is wrapped by one full
    /// period, which preserves inter-log spacing.
    pub fn advance(&mut self) {
        for log in &mut self.logs {
            log.tick += 1;
            if log.tick >= log.speed {
                log.start_col += log.flow.dx();
                match log.flow {
                    Flow::Right if log.start_col >= MAP_COLS => {
                        log.start_col -= self.total_len;
                    }
                    Flow::Left if log.start_col <= -log.length => {
                        log.start_col += self.total_len;
                    }
                    _ => {}
                }
                log.tick = 0;
            }
        }
    }

    /// Find the log supporting `col`, if any.
    ///
    /// A column is supported if a log covers it, or - the grace case - if
    /// a log stepped this tick and `col` is exactly the tile it vacated.
    /// Without the second check a frog standing on the trailing tile would
    /// read as drowned on the very tick its log slides out from under it;
    /// instead it is still riding and gets carried.
    pub fn find_support(&self, col: i16) -> Option<Support> {
        for log in &self.logs {
            if log.covers(col) {
                return Some(Support {
                    flow: log.flow,
                    moved: log.tick == 0,
                });
            }
        }
        for log in &self.logs {
            if log.tick == 0 && log.vacated_col() == col {
                return Some(Support {
                    flow: log.flow,
                    moved: true,
                });
            }
        }
        None
    }
}

/// All water lanes of one round, indexed by map row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lanes {
    pub lanes: ArrayVec<Lane, WATER_ROWS>,
}

impl Lanes {
    /// No lanes yet; the state a session holds before its first round.
    pub fn empty() -> Self {
        Self {
            lanes: ArrayVec::new(),
        }
    }

    /// Generate the full set for a round, top row first.
    ///
    /// The first lane's flow is drawn from the rng; every following lane
    /// flips it, so neighbouring lanes always drift opposite ways. Each
    /// lane's archetype index is drawn uniformly from the fixed table.
    pub fn generate(rng: &mut dyn RngSource) -> Self {
        let mut flow = if rng.next(2) == 0 {
            Flow::Right
        } else {
            Flow::Left
        };

        let mut lanes = ArrayVec::new();
        for _ in 0..WATER_ROWS {
            let archetype = LANE_ARCHETYPES[rng.next(LANE_ARCHETYPES.len() as u32) as usize];
            lanes.push(Lane::generate(archetype, flow));
            flow = flow.flip();
        }
        Self { lanes }
    }

    /// The lane under a map row, or `None` for the two ground rows.
    pub fn at(&self, row: i16) -> Option<&Lane> {
        if row <= 0 || row >= MAP_ROWS - 1 {
            return None;
        }
        self.lanes.get((row - 1) as usize)
    }

    pub fn advance(&mut self) {
        for lane in &mut self.lanes {
            lane.advance();
        }
    }
}
