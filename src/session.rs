use std::time::{Duration, Instant};

use rand::rngs::StdRng;

use crate::error::GameError;
use crate::game::{GameState, StepOutcome};
use crate::input::GameInput;
use crate::random::{RandomSource, RngSource};

/// The single periodic tick source of a session.
///
/// Starting an already running ticker replaces its deadline, so there is
/// never more than one pending tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Schedules the next tick one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now` and schedules the next one
    /// an interval later. Missed ticks are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// How long until the next tick, or `None` when stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// What the game loop should do after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionControl {
    Continue,
    Quit,
}

/// One game session: the state and its tick source, owned by the caller.
#[derive(Debug, Clone)]
pub struct Session<R = RngSource<StdRng>> {
    state: GameState<R>,
    ticker: Ticker,
}

impl<R: RandomSource> Session<R> {
    /// Wraps `state`; the ticker stays stopped until [`start`](Self::start).
    #[must_use]
    pub fn new(state: GameState<R>, interval: Duration) -> Self {
        Self {
            state,
            ticker: Ticker::new(interval),
        }
    }

    pub fn start(&mut self, now: Instant) {
        log::info!(
            "session started, tick interval {} ms",
            self.ticker.interval().as_millis()
        );
        self.ticker.start(now);
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Applies one input event between ticks.
    ///
    /// # Errors
    ///
    /// Propagates a failed reset; see [`reset`](Self::reset).
    pub fn handle_input(
        &mut self,
        input: GameInput,
        now: Instant,
    ) -> Result<SessionControl, GameError> {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.state.set_direction(direction);
            }
            GameInput::Pause => {
                self.state.toggle_pause();
                log::debug!("pause toggled, status now {:?}", self.state.status());
            }
            GameInput::Reset => self.reset(now)?,
            GameInput::Quit => {
                self.stop();
                return Ok(SessionControl::Quit);
            }
        }
        Ok(SessionControl::Continue)
    }

    /// Starts a fresh game with the same random source, restarting the ticker.
    ///
    /// # Errors
    ///
    /// Fails only if the initial food cannot be placed. The previous state is
    /// kept in that case and the ticker still restarts.
    pub fn reset(&mut self, now: Instant) -> Result<(), GameError> {
        self.ticker.stop();
        let reset = self.state.reset();
        self.ticker.start(now);
        reset?;
        log::info!("game reset");
        Ok(())
    }

    /// Runs a step if the ticker is due at `now`.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::BoardFull`] from [`GameState::step`].
    pub fn tick(&mut self, now: Instant) -> Result<Option<StepOutcome>, GameError> {
        if !self.ticker.poll(now) {
            return Ok(None);
        }
        self.state.step().map(Some)
    }
}

impl<R> Session<R> {
    #[must_use]
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Time the loop may wait for input before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker
            .time_until_due(now)
            .unwrap_or(self.ticker.interval())
    }
}
