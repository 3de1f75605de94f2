//! RNG module - where new pieces come from
//!
//! The engine never calls a global random generator. It asks a
//! [`PieceSource`] for the next kind, so games can be replayed from a seed and
//! tests can script the exact sequence they need.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplier of piece kinds for spawning
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

/// Uniform choice over the seven kinds
#[derive(Debug, Clone)]
pub struct UniformSource<R = StdRng> {
    rng: R,
}

impl UniformSource<StdRng> {
    /// Deterministic source: same seed, same piece sequence
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformSource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PieceSource for UniformSource<R> {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Fixed sequence of kinds, repeated forever
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    pieces: Vec<PieceKind>,
    index: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn new(pieces: impl IntoIterator<Item = PieceKind>) -> Self {
        let pieces: Vec<_> = pieces.into_iter().collect();
        assert!(!pieces.is_empty(), "scripted piece sequence must not be empty");
        Self { pieces, index: 0 }
    }

    /// The same kind every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }

    /// Number of pieces handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for ScriptedSource {
    fn next_piece(&mut self) -> PieceKind {
        let piece = self.pieces[self.index % self.pieces.len()];
        self.index += 1;
        piece
    }
}
