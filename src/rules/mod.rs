//! Game rules for Omok
//!
//! Plain five-in-a-row: no captures, no forbidden moves, overlines win.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, find_winning_line, DIRECTIONS};
