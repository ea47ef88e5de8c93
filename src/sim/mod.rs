//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - Seeded RNG only
//! - Stable pipe order (spawn order equals left-to-right screen order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{check_collision, hit_ceiling, hit_ground, hit_pipe, overlaps_horizontally};
pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
