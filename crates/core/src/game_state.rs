//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, piece source and scoring. Every
//! public action is a complete transition: it either commits a new consistent
//! state or leaves the old one untouched and reports a rejection.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::snapshot::{DisplayCell, DisplayGrid, GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    started: bool,
    /// Last lock-in report (consumed by observers).
    last_event: Option<LockEvent>,
    source: S,
}

impl GameState<UniformSource> {
    /// Create a new game whose pieces come from a seeded uniform source
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformSource::seeded(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new, not yet started game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            paused: false,
            game_over: false,
            started: false,
            last_event: None,
            source,
        }
    }

    /// Start (or restart) the game: empty board, zeroed counters, fresh
    /// active and next pieces. Legal from every phase.
    pub fn start(&mut self) {
        let active = self.spawn_piece();
        let next = self.spawn_piece();

        self.board = Board::new();
        self.active = Some(active);
        self.next = Some(next);
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.last_event = None;

        debug!(active = %active.kind, next = %next.kind, "game started");
    }

    /// Toggle pause. Returns false (no change) before the first start and
    /// after game over.
    ///
    /// Pausing only moves between `Running` and `Paused`; a game that was
    /// never started has no piece in play, so there is nothing to suspend.
    pub fn pause(&mut self) -> bool {
        if !self.started || self.game_over {
            trace!(phase = ?self.phase(), "pause ignored");
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Whether movement actions are currently accepted
    pub fn playable(&self) -> bool {
        self.active.is_some() && !self.game_over && !self.paused
    }

    /// Get current drop interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    fn spawn_piece(&mut self) -> Piece {
        Piece::spawn(self.source.next_piece(), BOARD_WIDTH)
    }

    /// Try to move the active piece one cell.
    ///
    /// A rejected downward move locks the piece in place (running
    /// the lock-in step) and still reports `false`.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        let Some(active) = self.active.filter(|_| self.playable()) else {
            trace!(?direction, phase = ?self.phase(), "move rejected: not playable");
            return false;
        };

        let (dx, dy) = direction.delta();
        let candidate = active.moved(dx, dy);
        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            return true;
        }

        trace!(?direction, x = active.x, y = active.y, "move blocked");
        if direction == Direction::Down {
            self.lock_piece();
        }
        false
    }

    /// Try to rotate the active piece clockwise about its anchor.
    /// There is no wall-kick search: a blocked rotation simply fails.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active.filter(|_| self.playable()) else {
            trace!(phase = ?self.phase(), "rotate rejected: not playable");
            return false;
        };

        let candidate = active.rotated();
        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            true
        } else {
            trace!(kind = %active.kind, x = active.x, y = active.y, "rotation blocked");
            false
        }
    }

    /// Drop the active piece until it can no longer fall and lock it.
    ///
    /// Returns the number of rows the piece fell, or `None` if the game was
    /// not playable.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.playable() {
            trace!(phase = ?self.phase(), "hard drop rejected: not playable");
            return None;
        }

        let mut distance = 0;
        while self.move_piece(Direction::Down) {
            distance += 1;
        }
        Some(distance)
    }

    /// Lock the active piece onto the board, clear lines, score, and bring in
    /// the next piece. Ends the game if the next piece cannot spawn.
    ///
    /// Everything is computed before anything is written, so the transition
    /// is all-or-nothing.
    fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let placed = self.board.place(&active.shape, active.x, active.y);
        let (board, lines_cleared) = placed.clear_full_lines();

        let score_delta = calculate_line_score(lines_cleared, self.level);
        let lines = self.lines + lines_cleared as u32;
        let level = calculate_level(lines);

        let candidate = self.spawn_piece();
        let incoming = self.next.filter(|next| next.is_valid(&board));
        let game_over = incoming.is_none();

        self.board = board;
        self.score = self.score.saturating_add(score_delta);
        self.lines = lines;
        self.level = level;
        self.active = incoming;
        self.next = if game_over { None } else { Some(candidate) };
        self.game_over = game_over;
        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: lines_cleared as u32,
            score_delta,
            game_over,
        });

        debug!(
            kind = %active.kind,
            x = active.x,
            y = active.y,
            lines_cleared,
            score_delta,
            level,
            "piece locked"
        );
        if game_over {
            info!(score = self.score, lines = self.lines, level = self.level, "game over");
        }
    }

    /// Take and clear the last lock-in report.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    ///
    /// `HardDrop`, `Pause` and `Start` report whether they ran; moves and
    /// rotation report whether the piece actually moved.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_piece(direction),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Pause => self.pause(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Board with the active piece overlaid, row 0 first.
    ///
    /// Active cells outside the board are clipped.
    pub fn display_grid(&self) -> DisplayGrid {
        let mut grid = [[DisplayCell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (row, cells) in grid.iter_mut().zip(self.board.rows()) {
            for (dst, cell) in row.iter_mut().zip(cells) {
                if cell.is_filled() {
                    *dst = DisplayCell::Locked;
                }
            }
        }

        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    grid[y as usize][x as usize] = DisplayCell::Active(active.kind);
                }
            }
        }

        grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.phase = self.phase();
        out.drop_interval_ms = self.drop_interval_ms();
    }

    /// Immutable copy of everything a presentation layer needs
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}
