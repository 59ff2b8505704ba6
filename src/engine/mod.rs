//! Real-time driver: paces the simulation, feeds it input, and draws.

pub mod runner;

pub use runner::run;
