//! Core model – ring geometry, colours, and the indicator state machine.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod color;
pub mod geometry;
pub mod indicator;
