//! Terminal "game renderer" module.
//!
//! A small framebuffer pipeline for a 16x2 panel: `GameView` is pure
//! (tiles or text in, framebuffer out) and unit-testable; the
//! `TerminalScreen` owns the crossterm lifecycle and implements the
//! `Screen` sink the engine draws through.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{Screen, TerminalScreen};
