//! Per-turn countdown
//!
//! The timer owns no clock. The host event loop feeds it elapsed time via
//! [`TurnTimer::advance`], which reports one [`TimerEvent::Tick`] per whole
//! second and a single [`TimerEvent::Expired`] when the count reaches zero.
//! Sub-second remainders carry over to the next call.
//!
//! A timer is a handle for exactly one turn. Starting a new turn means
//! cancelling the old handle and creating a fresh one; a cancelled or expired
//! handle never emits again.

use std::time::Duration;

use crate::config::TURN_DURATION_SECS;

const TICK: Duration = Duration::from_secs(1);

/// Notification produced while advancing a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A second elapsed; carries the updated remaining seconds (always > 0)
    Tick(u32),
    /// The countdown reached zero
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Running,
    Cancelled,
    Expired,
}

/// Countdown handle for a single turn
#[derive(Debug, Clone)]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
    carry: Duration,
    state: TimerState,
}

impl TurnTimer {
    /// Start a countdown of [`TURN_DURATION_SECS`]
    pub fn start() -> Self {
        Self::with_duration(TURN_DURATION_SECS)
    }

    /// Start a countdown of `secs` seconds (at least one)
    pub fn with_duration(secs: u32) -> Self {
        let duration = secs.max(1);
        Self {
            duration,
            remaining: duration,
            carry: Duration::ZERO,
            state: TimerState::Running,
        }
    }

    /// Stop the countdown without firing its expiry
    pub fn cancel(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Cancelled;
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Seconds left on the clock
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seconds the countdown started from
    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Remaining time as a fraction of the full turn, for progress bars
    pub fn fraction_left(&self) -> f32 {
        let exact = self.remaining as f32 - self.carry.as_secs_f32();
        (exact / self.duration as f32).clamp(0.0, 1.0)
    }

    /// Feed elapsed wall-clock time into the countdown.
    ///
    /// Emits a tick per whole second covered by `elapsed` (plus any carried
    /// remainder), ending with [`TimerEvent::Expired`] if zero is reached.
    /// Inert timers return no events.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        self.carry += elapsed;
        while self.carry >= TICK {
            self.carry -= TICK;
            self.remaining -= 1;

            if self.remaining == 0 {
                self.state = TimerState::Expired;
                self.carry = Duration::ZERO;
                events.push(TimerEvent::Expired);
                break;
            }
            events.push(TimerEvent::Tick(self.remaining));
        }
        events
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_start_uses_turn_duration() {
        let timer = TurnTimer::start();
        assert_eq!(timer.remaining(), 30);
        assert_eq!(timer.duration(), 30);
        assert!(timer.is_running());
    }

    #[test]
    fn test_ticks_once_per_second() {
        let mut timer = TurnTimer::with_duration(5);
        assert!(timer.advance(Duration::from_millis(400)).is_empty());
        assert_eq!(timer.advance(Duration::from_millis(700)), vec![TimerEvent::Tick(4)]);
        assert_eq!(timer.remaining(), 4);
        assert_eq!(
            timer.advance(Duration::from_secs(2)),
            vec![TimerEvent::Tick(3), TimerEvent::Tick(2)]
        );
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = TurnTimer::with_duration(3);
        let events = timer.advance(Duration::from_secs(10));
        assert_eq!(
            events,
            vec![TimerEvent::Tick(2), TimerEvent::Tick(1), TimerEvent::Expired]
        );
        assert!(timer.is_expired());
        assert_eq!(timer.remaining(), 0);
        assert!(timer.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_full_turn_expires_at_thirty_seconds() {
        let mut timer = TurnTimer::start();
        let mut ticks = 0;
        for _ in 0..29 {
            let events = timer.advance(TICK);
            assert_eq!(events.len(), 1);
            ticks += 1;
        }
        assert_eq!(ticks, 29);
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.advance(TICK), vec![TimerEvent::Expired]);
    }

    #[test]
    fn test_cancel_suppresses_expiry() {
        let mut timer = TurnTimer::with_duration(2);
        timer.advance(TICK);
        timer.cancel();
        assert!(!timer.is_running());
        assert!(timer.advance(Duration::from_secs(5)).is_empty());
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_cancel_after_expiry_keeps_expired() {
        let mut timer = TurnTimer::with_duration(1);
        assert_eq!(timer.advance(TICK), vec![TimerEvent::Expired]);
        timer.cancel();
        assert!(timer.is_expired());
    }

    #[test]
    fn test_zero_duration_clamped() {
        let mut timer = TurnTimer::with_duration(0);
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.advance(TICK), vec![TimerEvent::Expired]);
    }

    #[test]
    fn test_fraction_left() {
        let mut timer = TurnTimer::with_duration(10);
        assert_eq!(timer.fraction_left(), 1.0);
        timer.advance(Duration::from_secs(5));
        assert!((timer.fraction_left() - 0.5).abs() < 1e-6);
    }
}
