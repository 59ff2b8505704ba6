//! Button input: edge-triggered debounce over a polled source.
//!
//! `DebouncedButtons` keeps the latch debounced hardware buttons have: a
//! press is reported exactly once and swallowed until every control is
//! seen released. `TermKeys` adapts crossterm key events to the polled
//! `ButtonSource` shape.

pub mod handler;
pub mod term_keys;

pub use handler::{Button, ButtonSource, ButtonState, DebouncedButtons};
pub use term_keys::TermKeys;
