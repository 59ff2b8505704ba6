//! End-to-end round behavior through the session state machine.

use arrayvec::ArrayVec;
use tui_frogger::core::lanes::{Lane, Lanes, Log, WATER_ROWS};
use tui_frogger::core::rng::SimpleRng;
use tui_frogger::core::session::{Frog, GameSession, Phase};
use tui_frogger::types::{
    Command, Flow, LaneArchetype, RoundOutcome, Tile, MAP_COLS, MAP_ROWS,
};

/// A session whose logs never step within a round and always cover the
/// spawn column, so the frog can climb straight up.
fn still_water_session() -> GameSession {
    let mut session = GameSession::new();
    let mut lanes = ArrayVec::new();
    for i in 0..WATER_ROWS {
        let flow = if i % 2 == 0 { Flow::Right } else { Flow::Left };
        lanes.push(Lane::generate(LaneArchetype { length: 5, speed: 200 }, flow));
    }
    session.lanes = Lanes { lanes };
    session.phase = Phase::Playing;
    session
}

fn stepping_lane(starts: [i16; 3], length: i16) -> Lane {
    let mut logs = ArrayVec::new();
    for start_col in starts {
        logs.push(Log {
            start_col,
            length,
            flow: Flow::Right,
            speed: 1,
            tick: 0,
        });
    }
    Lane {
        logs,
        total_len: 3 * length + 9,
    }
}

#[test]
fn eleven_forwards_win_from_the_bottom() {
    let mut session = still_water_session();
    assert_eq!(session.frog, Frog { row: 11, col: 8 });

    for _ in 0..11 {
        assert_eq!(session.phase, Phase::Playing);
        session.tick(Some(Command::Forward));
    }

    assert_eq!(session.frog.row, 0);
    assert_eq!(session.phase, Phase::RoundEnd(RoundOutcome::Win { bonus: 50 }));
    assert_eq!(session.score, 11 + 50);
    // The winning tick is not counted.
    assert_eq!(session.ticks, 10);
}

#[test]
fn open_water_fails_and_keeps_score() {
    let mut session = still_water_session();
    // Left-flow length-3 logs leave columns 6..=8 open on the first
    // water row the frog steps onto.
    session.lanes.lanes[9] =
        Lane::generate(LaneArchetype { length: 3, speed: 200 }, Flow::Left);

    session.tick(Some(Command::Forward));
    assert_eq!(session.frog, Frog { row: 10, col: 8 });
    assert_eq!(session.score, 1);

    session.tick(None);
    assert_eq!(session.phase, Phase::RoundEnd(RoundOutcome::Fail));
    assert_eq!(session.score, 1);
    assert_eq!(session.ticks, 1);
}

#[test]
fn carry_past_the_edge_fails() {
    let mut session = still_water_session();
    session.lanes.lanes[9] = stepping_lane([11, 3, -5], 5);
    session.frog = Frog { row: 10, col: 15 };

    session.tick(None);
    assert_eq!(session.phase, Phase::RoundEnd(RoundOutcome::Fail));
}

#[test]
fn frog_rides_the_vacated_tile_when_its_log_steps() {
    let mut session = still_water_session();
    session.lanes.lanes[9] = stepping_lane([4, 12, -4], 5);
    session.frog = Frog { row: 10, col: 4 }; // trailing tile of the first log

    session.tick(None);
    // The log stepped to 5..=9; the vacated tile still counted and the
    // frog was carried along with it.
    assert_eq!(session.frog, Frog { row: 10, col: 5 });
    assert_eq!(session.phase, Phase::Playing);
}

#[test]
fn window_scrolls_with_the_frog() {
    let mut session = still_water_session();
    assert_eq!(session.viewport.top_row, 10);

    session.tick(Some(Command::Forward));
    assert_eq!(session.frog.row, 10);
    assert_eq!(session.viewport.top_row, 9);

    session.tick(Some(Command::Backward));
    assert_eq!(session.frog.row, 11);
    assert_eq!(session.viewport.top_row, 10);
    assert_eq!(session.score, 0);
}

#[test]
fn ticks_are_ignored_at_the_gates() {
    let mut session = GameSession::new();
    assert_eq!(session.phase, Phase::StartGate);

    session.tick(Some(Command::Forward));
    assert_eq!(session.phase, Phase::StartGate);
    assert_eq!(session.frog.row, MAP_ROWS - 1);
    assert_eq!(session.ticks, 0);
}

#[test]
fn round_restart_resets_state() {
    let mut rng = SimpleRng::new(42);
    let mut session = GameSession::new();

    session.start_round(&mut rng);
    assert_eq!(session.phase, Phase::Playing);
    session.tick(Some(Command::Forward));
    assert_eq!(session.score, 1);

    session.start_round(&mut rng);
    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.score, 0);
    assert_eq!(session.ticks, 0);
    assert_eq!(
        session.frog,
        Frog {
            row: MAP_ROWS - 1,
            col: MAP_COLS / 2
        }
    );
    assert_eq!(session.viewport.top_row, MAP_ROWS - 2);
}

#[test]
fn visible_rows_compose_ground_logs_and_frog() {
    let session = still_water_session();
    let rows = session.visible_rows();

    // Bottom window: water row 10 above, ground row 11 below. Row 10 is
    // the tenth generated lane, flowing left: logs at 15, 7, -1.
    assert_eq!(rows[0][5], Tile::Water);
    assert_eq!(rows[0][8], Tile::Log);
    assert_eq!(rows[0][15], Tile::Log);
    assert_eq!(rows[1][0], Tile::Ground);
    assert_eq!(rows[1][8], Tile::Frog);
}
