//! Fixed game configuration.
//!
//! Board size lives next to the board itself ([`crate::board::BOARD_SIZE`]);
//! everything else that shapes a session is collected here.

/// Seconds a player has to move before a random stone is placed for them.
pub const TURN_DURATION_SECS: u32 = 30;

/// Run length that wins the game. Longer runs (overlines) also win.
pub const WIN_LENGTH: usize = 5;

/// Cells scanned in each direction from the placed stone.
pub const SCAN_REACH: i32 = WIN_LENGTH as i32 - 1;

/// Remaining seconds at which the clock turns amber.
pub const TIMER_WARNING_SECS: u32 = 10;

/// Remaining seconds at which the clock turns red.
pub const TIMER_CRITICAL_SECS: u32 = 5;

// Window geometry
pub const WINDOW_SIZE: [f32; 2] = [960.0, 720.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 560.0];
pub const WINDOW_TITLE: &str = "Omok";
