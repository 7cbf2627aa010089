//! Darkwood — a one-night survival adventure for the terminal.
//!
//! The story is a fixed graph of scenes keyed by identifier. The engine
//! renders each scene with typewriter pacing, reads numbered choices from
//! the player, and follows the graph to one of its endings.

pub mod engine;
pub mod story;
