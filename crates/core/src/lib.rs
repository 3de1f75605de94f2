//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on rendering, input devices, networking, or I/O:
//!
//! - **Deterministic**: Same piece source produces identical games
//! - **Testable**: Pieces can be scripted, boards prepared cell by cell
//! - **Portable**: Any driver (terminal, browser bridge, headless) can run it
//!
//! # Module Structure
//!
//! - [`shapes`]: Tetromino catalog and clockwise matrix rotation
//! - [`board`]: 10x20 board with collision testing and line clearing
//! - [`piece`]: The active falling piece
//! - [`rng`]: Injectable piece sources (seeded uniform, scripted)
//! - [`scoring`]: Line-clear points, levels, gravity intervals
//! - [`game_state`]: The engine: actions, lock-in, game over
//! - [`snapshot`]: Read-only views for presentation layers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **Naive rotation**: clockwise about the matrix anchor, no wall kicks
//! - **Open top**: pieces may hang above row 0 without colliding
//! - **Lock on landing**: a blocked downward move locks immediately
//! - **Scoring**: 40/100/300/1200 times the current level
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::GameState;
//! use falling_blocks_types::{Direction, GameAction};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.move_piece(Direction::Left);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Check game state
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. A driver asks
//! [`GameState::drop_interval_ms`](game_state::GameState::drop_interval_ms)
//! how long to wait and then sends a downward move.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{PieceSource, ScriptedSource, UniformSource};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
pub use shapes::{get_shape, shape_of, ShapeMatrix};
pub use snapshot::{DisplayCell, DisplayGrid, GameSnapshot, PieceSnapshot};
