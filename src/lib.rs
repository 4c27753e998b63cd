//! Fuel Rush - a single-screen arcade driving game
//!
//! Core modules:
//! - `sim`: Simulation (car kinematics, fuel economy, collisions, world generation)
//! - `input`: Key events to car control deltas
//! - `renderer`: Drawing surface abstraction and the scene/HUD renderer
//! - `audio`: Fire-and-forget sound cues
//! - `game`: Frame driver tying simulation, audio and rendering together
//! - `platform`: Browser and headless hosts
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;
pub use sim::state::CarTuning;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (headless runs)
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Entities of each kind placed at startup
    pub const DEFAULT_ENTITY_COUNT: usize = 6;

    /// Car defaults
    pub const CAR_WIDTH: f32 = 40.0;
    pub const CAR_HEIGHT: f32 = 20.0;
    /// Car spawns this far above the bottom edge
    pub const CAR_START_BOTTOM_OFFSET: f32 = 80.0;
    pub const CAR_MAX_SPEED: f32 = 5.0;
    pub const CAR_ACCELERATION: f32 = 0.2;
    pub const CAR_FRICTION: f32 = 0.05;
    /// Heading change per Left/Right key press (radians)
    pub const CAR_TURN_RATE: f32 = 0.1;

    /// Entity sizes
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 20.0;
    pub const COIN_RADIUS: f32 = 15.0;
    pub const FUEL_PICKUP_RADIUS: f32 = 20.0;
    pub const NITRO_ZONE_SIZE: f32 = 60.0;

    /// Fuel economy
    pub const FUEL_MAX: f32 = 100.0;
    pub const FUEL_DRAIN_PER_FRAME: f32 = 0.05;
    pub const FUEL_PICKUP_AMOUNT: f32 = 25.0;

    /// Obstacle penalties, applied every overlapping frame
    pub const CRASH_SCORE_PENALTY: f32 = 5.0;
    pub const CRASH_FUEL_PENALTY: f32 = 5.0;

    pub const COIN_SCORE: f32 = 10.0;

    /// Nitro: speed bump per frame and how far past max speed it may push
    pub const NITRO_SPEED_BUMP: f32 = 1.0;
    pub const NITRO_SPEED_HEADROOM: f32 = 2.0;
    pub const NITRO_SCORE: f32 = 2.0;

    /// Passive score per frame while fuel remains
    pub const SURVIVAL_BONUS: f32 = 0.1;

    /// Frames simulated by the native headless runner
    pub const DEFAULT_HEADLESS_FRAMES: u64 = 600;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}
