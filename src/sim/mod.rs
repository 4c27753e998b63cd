//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform dependencies:
//! - One step per frame, no delta-time scaling
//! - Seeded RNG only (world generation)
//! - Order-preserving removal from entity collections
//! - Side effects (sound cues) surface as `GameEvent`s for the caller

pub mod collision;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{Rect, overlaps};
pub use state::{Car, Coin, FuelPickup, GameEvent, GameState, NitroZone, Obstacle};
pub use tick::{TickInput, apply_survival_bonus, tick};
pub use world::populate;
