//! Omok: two-player five-in-a-row with a turn clock
//!
//! Two players alternate placing stones on a 19x19 board, Black first.
//! The first to line up five or more stones horizontally, vertically or
//! diagonally wins. Each player has 30 seconds per move; when the clock runs
//! out a stone is placed for them on a random empty cell.
//!
//! # Architecture
//!
//! - [`board`]: Board storage and the single placement path
//! - [`rules`]: Five-in-a-row detection around the last stone
//! - [`game`]: Turn order and the per-turn countdown
//! - [`engine`]: Session orchestration driven by clicks and elapsed time
//! - [`config`]: Fixed configuration constants
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use omok::{EngineEvent, GameEngine, MoveSource, Stone};
//!
//! let mut engine = GameEngine::seeded(1);
//! engine.request_move(MoveSource::User { row: 9, col: 9 });
//! assert_eq!(engine.current_player(), Stone::White);
//!
//! // White lets the clock run out; a stone is placed for them
//! let events = engine.advance(Duration::from_secs(30));
//! assert!(matches!(events.last(), Some(EngineEvent::TimedOut(_))));
//! assert_eq!(engine.board().stone_count(), 2);
//! assert_eq!(engine.current_player(), Stone::Black);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Pos, Stone, BOARD_SIZE};
pub use engine::{EngineEvent, EngineState, GameEngine, MoveOutcome, MoveSource, Outcome};
pub use game::{TimerEvent, TurnController, TurnTimer};
