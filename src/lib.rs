//! Terminal MiniFrogger.
//!
//! `core` is the pure simulation: lane and log motion, support detection,
//! the per-tick session state machine, and scoring. `input` and `term`
//! adapt a real terminal to the button and screen interfaces the engine
//! drives, so the core stays deterministic and testable.

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;
