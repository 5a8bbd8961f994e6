//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* indicator state and turns it into pixels on
//! the terminal.  No timers or I/O happen here.

pub mod indicator_widget;
pub mod layout;
pub mod popup;
pub mod surface;
pub mod theme;
