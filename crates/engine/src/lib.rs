//! Timing and control around the pure game engine.
//!
//! - [`clock`]: gravity timing from elapsed milliseconds
//! - [`driver`]: single owner of a [`GameState`](crate::core::GameState) that serializes
//!   input and gravity and publishes snapshots to observers
//! - [`policy`]: input sources for unattended play

pub mod clock;
pub mod driver;
pub mod policy;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use clock::GravityClock;
pub use driver::{Driver, TickReport};
pub use policy::{DropPolicy, Policy, RandomPolicy};
