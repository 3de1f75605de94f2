//! Falling blocks (workspace facade crate).
//!
//! Re-exports the member crates under `falling_blocks::{core,engine,types}` and
//! hosts the headless runner used by the default binary.

pub use falling_blocks_core as core;
pub use falling_blocks_engine as engine;
pub use falling_blocks_types as types;

pub mod config;
pub mod runner;
