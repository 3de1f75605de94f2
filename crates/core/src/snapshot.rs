use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::shapes::ShapeMatrix;
use crate::types::{PieceKind, Phase, BOARD_HEIGHT, BOARD_WIDTH, LOCKED_COLOR, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 1 = filled, 0 = empty; row 0 is the top
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
    pub phase: Phase,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.active.is_some() && !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            paused: false,
            game_over: false,
            phase: Phase::NotStarted,
            drop_interval_ms: 0,
        }
    }
}

/// One cell of the composite view a renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayCell {
    #[default]
    Empty,
    Locked,
    Active(PieceKind),
}

impl DisplayCell {
    pub fn color(self) -> Option<&'static str> {
        match self {
            DisplayCell::Empty => None,
            DisplayCell::Locked => Some(LOCKED_COLOR),
            DisplayCell::Active(kind) => Some(kind.color()),
        }
    }
}

/// Board plus active piece, row 0 first
pub type DisplayGrid = [[DisplayCell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
