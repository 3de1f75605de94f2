//! Driver - the single owner that feeds actions and gravity into the engine.
//!
//! Input actions and gravity ticks both go through `&mut self`, so they can
//! never interleave mid-transition. Observers get change notifications through
//! a `tokio::sync::watch` channel carrying the latest snapshot.

use tokio::sync::watch;
use tracing::debug;

use crate::clock::GravityClock;
use crate::core::{GameSnapshot, GameState, PieceSource, UniformSource};
use crate::types::{Direction, GameAction, LockEvent, Phase};

/// What one call to [`Driver::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Gravity steps applied (each one a downward move attempt)
    pub steps: u32,
    /// Pieces locked by those steps
    pub locks: u32,
}

pub struct Driver<S = UniformSource> {
    state: GameState<S>,
    clock: GravityClock,
    publisher: watch::Sender<GameSnapshot>,
    last_event: Option<LockEvent>,
    pieces_locked: u32,
    elapsed_ms: u64,
}

impl Driver<UniformSource> {
    /// Driver around a fresh seeded game (not started yet)
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameState::new(seed))
    }
}

impl<S: PieceSource> Driver<S> {
    pub fn new(state: GameState<S>) -> Self {
        let (publisher, _) = watch::channel(state.snapshot());
        Self {
            state,
            clock: GravityClock::new(),
            publisher,
            last_event: None,
            pieces_locked: 0,
            elapsed_ms: 0,
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Receiver that sees every committed state change.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.publisher.subscribe()
    }

    /// Pieces locked since the current game started
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Simulated time fed through [`Driver::tick`] since the current game started
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Take the most recent lock report.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply an input action. Returns the engine's verdict.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let accepted = self.state.apply_action(action);
        if action == GameAction::Start {
            self.clock.reset();
            self.pieces_locked = 0;
            self.elapsed_ms = 0;
            self.last_event = None;
        }
        self.absorb_lock();
        self.publish();
        accepted
    }

    /// Advance time. Gravity only runs while the game is running; paused,
    /// finished and unstarted games accumulate nothing.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickReport {
        let mut report = TickReport::default();
        if self.state.phase() != Phase::Running {
            return report;
        }

        self.elapsed_ms += u64::from(elapsed_ms);
        self.clock.advance(elapsed_ms);
        while self.state.playable() && self.clock.try_fire(self.state.drop_interval_ms()) {
            self.state.move_piece(Direction::Down);
            report.steps += 1;
            if self.absorb_lock() {
                report.locks += 1;
            }
        }

        if self.state.game_over() {
            self.clock.reset();
        }
        if report.steps > 0 {
            self.publish();
        }
        report
    }

    /// Milliseconds until the next gravity step, if gravity is running.
    pub fn time_to_next_step(&self) -> Option<u32> {
        (self.state.phase() == Phase::Running).then(|| {
            self.state
                .drop_interval_ms()
                .saturating_sub(self.clock.pending_ms())
        })
    }

    fn absorb_lock(&mut self) -> bool {
        let Some(event) = self.state.take_last_event() else {
            return false;
        };
        self.pieces_locked += 1;
        self.last_event = Some(event);
        debug!(
            pieces = self.pieces_locked,
            lines_cleared = event.lines_cleared,
            score_delta = event.score_delta,
            "lock absorbed"
        );
        true
    }

    fn publish(&self) {
        let snapshot = self.state.snapshot();
        self.publisher.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}
