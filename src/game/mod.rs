//! Turn bookkeeping: whose move it is and how long they have left

pub mod timer;
pub mod turn;

pub use timer::{TimerEvent, TurnTimer};
pub use turn::TurnController;
