//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: piece variants and their colors, the action
//! vocabulary a driver speaks to the engine, and the fixed game constants.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (`BOARD_WIDTH / 2 - 1`, 0) = (4, 0)
//!
//! # Timing
//!
//! The gravity interval shrinks by 100ms per level and bottoms out at 50ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10 | 100ms |
//! | 11+ | 50ms |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Direction, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece: PieceKind = "t".parse().unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), "#800080");
//!
//! let action: GameAction = "moveLeft".parse().unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_DROP_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines, multiplied by the current level:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Clears outside the table score nothing.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Display color of a locked cell. Locked cells forget which piece they came from.
pub const LOCKED_COLOR: &str = "#888888";

/// Errors produced when parsing the string forms of the types in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown piece kind: {0:?}")]
    PieceKind(String),

    #[error("unknown direction: {0:?}")]
    Direction(String),

    #[error("unknown game action: {0:?}")]
    GameAction(String),
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every variant, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Fixed display color as a `#RRGGBB` hex string.
    pub fn color(self) -> &'static str {
        match self {
            PieceKind::I => "#00FFFF",
            PieceKind::O => "#FFFF00",
            PieceKind::T => "#800080",
            PieceKind::S => "#00FF00",
            PieceKind::Z => "#FF0000",
            PieceKind::J => "#0000FF",
            PieceKind::L => "#FFA500",
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::O.as_str(), "o");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

impl FromStr for PieceKind {
    type Err = ParseError;

    /// Parse piece kind from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "o" => Ok(PieceKind::O),
            "t" => Ok(PieceKind::T),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            _ => Err(ParseError::PieceKind(s.to_string())),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single-cell move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Anchor offset `(dx, dy)` applied by a move in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are what a driver sends the engine, whether they come from a key
/// press, a gravity tick or an automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Shift the piece one cell. A rejected downward move locks the piece.
    Move(Direction),
    /// Rotate the piece 90° clockwise (no wall kicks)
    Rotate,
    /// Drop the piece as far as it goes and lock it
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a fresh game (legal at any time)
    Start,
}

impl GameAction {
    pub const MOVE_LEFT: GameAction = GameAction::Move(Direction::Left);
    pub const MOVE_RIGHT: GameAction = GameAction::Move(Direction::Right);
    pub const MOVE_DOWN: GameAction = GameAction::Move(Direction::Down);

    /// Convert to the camelCase wire name
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::MOVE_DOWN.as_str(), "moveDown");
    /// assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
        }
    }
}

impl FromStr for GameAction {
    type Err = ParseError;

    /// Parse action from its camelCase name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moveleft" => Ok(GameAction::MOVE_LEFT),
            "moveright" => Ok(GameAction::MOVE_RIGHT),
            "movedown" => Ok(GameAction::MOVE_DOWN),
            "rotate" => Ok(GameAction::Rotate),
            "harddrop" => Ok(GameAction::HardDrop),
            "pause" => Ok(GameAction::Pause),
            "start" => Ok(GameAction::Start),
            _ => Err(ParseError::GameAction(s.to_string())),
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Before the first `start`
    #[default]
    NotStarted,
    Running,
    Paused,
    /// Terminal until the next `start`
    GameOver,
}

/// Report emitted each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    /// Kind of the piece that locked
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points added by this lock
    pub score_delta: u32,
    /// Whether the following piece was blocked at spawn
    pub game_over: bool,
}

/// A cell on the game board
///
/// Filled cells are a single generic marker; the piece that produced them is
/// not remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }
}
