//! Core module - pure game logic with no I/O dependencies.
//!
//! Everything here is deterministic given an injected `RngSource`: lane
//! generation, log motion, support detection, scoring, and the session
//! state machine that ties them together.

pub mod lanes;
pub mod rng;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use lanes::{Lane, Lanes, Log, Support};
pub use rng::{ClockRng, RngSource, SimpleRng};
pub use scoring::compute_bonus;
pub use session::{Frog, GameSession, Phase, Viewport};
