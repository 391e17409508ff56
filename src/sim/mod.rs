//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//! - The only clock is the tick counter

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bird_hit_boundary, bird_hit_pipes};
pub use rect::Rect;
pub use state::{ActiveEffect, Bird, GameState, PipePair, PowerUp, PowerUpKind};
pub use tick::{tick, GameEvent, TickInput};
