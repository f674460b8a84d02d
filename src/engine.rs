//! Game engine orchestrating board, turns and the turn clock
//!
//! The engine is driven entirely from outside, on a single thread:
//!
//! 1. **Clicks** arrive as [`MoveSource::User`] requests. Invalid positions are
//!    ignored without touching any state.
//! 2. **Elapsed time** arrives through [`GameEngine::advance`]. When the turn
//!    clock runs out, a stone is placed for the current player on a uniformly
//!    random empty cell, exactly as a [`MoveSource::Timeout`] request would.
//!
//! Each accepted move is checked for five-in-a-row, then the turn passes to
//! the other player and the clock is replaced by a fresh one. A win or a full
//! board ends the game; the engine then ignores everything until
//! [`GameEngine::reset`].
//!
//! # Example
//!
//! ```
//! use omok::{GameEngine, MoveOutcome, MoveSource, Stone};
//!
//! let mut engine = GameEngine::seeded(7);
//!
//! let outcome = engine.request_move(MoveSource::User { row: 9, col: 9 });
//! assert!(matches!(outcome, MoveOutcome::Placed { next: Stone::White, .. }));
//!
//! // Clicking an occupied cell does nothing
//! let outcome = engine.request_move(MoveSource::User { row: 9, col: 9 });
//! assert!(matches!(outcome, MoveOutcome::Ignored(_)));
//! assert_eq!(engine.current_player(), Stone::White);
//! ```

use std::time::Duration;

use log::{debug, info, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, BoardError, Pos, Stone};
use crate::game::{TimerEvent, TurnController, TurnTimer};
use crate::rules::{check_win, find_winning_line};

/// Where a move request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// A click on raw board coordinates; may be off the board
    User { row: i32, col: i32 },
    /// The turn clock ran out; the engine picks the cell
    Timeout,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    /// Board filled without a five
    Draw,
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    AwaitingMove(Stone),
    GameOver(Outcome),
}

/// Result of a single move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// User move rejected; nothing changed
    Ignored(BoardError),
    /// Stone placed and the turn passed to `next`
    Placed { pos: Pos, stone: Stone, next: Stone },
    /// Stone placed and it completed a winning run
    Won { pos: Pos, stone: Stone, line: Vec<Pos> },
    /// Stone filled the last empty cell without winning
    Drawn { pos: Pos, stone: Stone },
    /// The game is over; call [`GameEngine::reset`] to play again
    NotInProgress,
}

impl MoveOutcome {
    /// Placed position and color, if a stone went down
    pub fn placed(&self) -> Option<(Pos, Stone)> {
        match *self {
            MoveOutcome::Placed { pos, stone, .. }
            | MoveOutcome::Won { pos, stone, .. }
            | MoveOutcome::Drawn { pos, stone } => Some((pos, stone)),
            MoveOutcome::Ignored(_) | MoveOutcome::NotInProgress => None,
        }
    }
}

/// Notification produced by [`GameEngine::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A second went by; remaining seconds for the current player
    Tick(u32),
    /// The clock ran out and a fallback move was attempted
    TimedOut(MoveOutcome),
}

/// Five-in-a-row game session.
///
/// Owns the board, the turn order and the clock for one game. The random
/// source used for timeout moves is injectable so sessions can be replayed.
pub struct GameEngine<R = SmallRng> {
    board: Board,
    turn: TurnController,
    timer: TurnTimer,
    state: EngineState,
    rng: R,
    move_count: usize,
    last_move: Option<Pos>,
}

impl GameEngine<SmallRng> {
    /// Create an engine with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Create an engine whose timeout moves are reproducible.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine using `rng` to pick timeout moves.
    ///
    /// The clock for Black's first move starts immediately.
    pub fn with_rng(rng: R) -> Self {
        let turn = TurnController::new();
        Self {
            board: Board::new(),
            turn,
            timer: TurnTimer::start(),
            state: EngineState::AwaitingMove(turn.current()),
            rng,
            move_count: 0,
            last_move: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The player to move
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.turn.current()
    }

    /// Seconds left for the current player
    #[inline]
    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining()
    }

    #[inline]
    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.state, EngineState::GameOver(_))
    }

    /// Stones placed since the last reset
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Handle a move request.
    ///
    /// User moves on invalid or occupied cells are ignored. Timeout moves go
    /// to a uniformly random empty cell.
    pub fn request_move(&mut self, source: MoveSource) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::NotInProgress;
        }

        let stone = self.turn.current();
        let placed = match source {
            MoveSource::User { row, col } => self.board.place(row, col, stone),
            MoveSource::Timeout => {
                let Some(&pos) = self.board.empty_cells().choose(&mut self.rng) else {
                    // Placements through the engine hit the full-board draw first
                    self.finish(Outcome::Draw);
                    return MoveOutcome::NotInProgress;
                };
                debug!("{} ran out of time, placing at {}", stone, pos);
                self.board.place(pos.row as i32, pos.col as i32, stone)
            }
        };

        match placed {
            Ok(pos) => self.after_placement(pos, stone),
            Err(err) => {
                debug!("ignored move for {}: {}", stone, err);
                MoveOutcome::Ignored(err)
            }
        }
    }

    /// Feed elapsed wall-clock time to the turn clock.
    ///
    /// Returns a tick per elapsed second and, if the clock ran out, the
    /// outcome of the fallback move. Does nothing once the game is over.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }

        for event in self.timer.advance(elapsed) {
            match event {
                TimerEvent::Tick(remaining) => {
                    trace!("{} has {}s left", self.turn.current(), remaining);
                    events.push(EngineEvent::Tick(remaining));
                }
                TimerEvent::Expired => {
                    let outcome = self.request_move(MoveSource::Timeout);
                    events.push(EngineEvent::TimedOut(outcome));
                }
            }
        }
        events
    }

    /// Cancel the running clock and start a full one for the current player.
    pub fn restart_timer(&mut self) {
        self.timer.cancel();
        self.timer = TurnTimer::start();
    }

    /// Discard the session and start a new game with Black to move.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.board = Board::new();
        self.turn = TurnController::new();
        self.timer = TurnTimer::start();
        self.state = EngineState::AwaitingMove(self.turn.current());
        self.move_count = 0;
        self.last_move = None;
        info!("new game, {} to move", self.turn.current());
    }

    fn after_placement(&mut self, pos: Pos, stone: Stone) -> MoveOutcome {
        self.move_count += 1;
        self.last_move = Some(pos);

        if check_win(&self.board, pos) {
            let line = find_winning_line(&self.board, pos).unwrap_or_else(|| vec![pos]);
            self.finish(Outcome::Win(stone));
            return MoveOutcome::Won { pos, stone, line };
        }

        if self.board.is_full() {
            self.finish(Outcome::Draw);
            return MoveOutcome::Drawn { pos, stone };
        }

        self.turn.toggle();
        self.state = EngineState::AwaitingMove(self.turn.current());
        self.restart_timer();
        MoveOutcome::Placed {
            pos,
            stone,
            next: self.turn.current(),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.timer.cancel();
        self.state = EngineState::GameOver(outcome);
        match outcome {
            Outcome::Win(winner) => info!("{} wins after {} moves", winner, self.move_count),
            Outcome::Draw => info!("draw after {} moves", self.move_count),
        }
    }
}
