//! Game state and entity catalog
//!
//! Everything a frame reads or writes lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Car handling parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarTuning {
    /// Speed cap enforced once per frame (nitro may exceed it briefly)
    pub max_speed: f32,
    /// Speed change per Up/Down key press
    pub acceleration: f32,
    /// Fraction of speed lost every frame
    pub friction: f32,
    /// Heading change per Left/Right key press (radians)
    pub turn_rate: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            max_speed: CAR_MAX_SPEED,
            acceleration: CAR_ACCELERATION,
            friction: CAR_FRICTION,
            turn_rate: CAR_TURN_RATE,
        }
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Top-left of the collision box, and the pivot the car is drawn around
    pub pos: Vec2,
    /// Heading (radians, 0 = facing right, positive turns clockwise on screen)
    pub angle: f32,
    /// Signed scalar speed along the heading (pixels per frame)
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub tuning: CarTuning,
}

impl Car {
    pub fn new(pos: Vec2, tuning: CarTuning) -> Self {
        Self {
            pos,
            angle: 0.0,
            speed: 0.0,
            width: CAR_WIDTH,
            height: CAR_HEIGHT,
            tuning,
        }
    }

    /// Collision box (anchored at `pos`, not centered on it)
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Unit vector along the current heading
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Ceiling a nitro zone may push speed to
    #[inline]
    pub fn nitro_ceiling(&self) -> f32 {
        self.tuning.max_speed + NITRO_SPEED_HEADROOM
    }
}

/// A static block that costs score and fuel on every overlapping frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        }
    }
}

/// A one-shot coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
}

impl Coin {
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: COIN_RADIUS,
        }
    }

    pub const fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// A one-shot fuel canister
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPickup {
    pub pos: Vec2,
    pub radius: f32,
}

impl FuelPickup {
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: FUEL_PICKUP_RADIUS,
        }
    }

    pub const fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// A static boost pad, re-triggered on every overlapping frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NitroZone {
    pub rect: Rect,
}

impl NitroZone {
    pub const fn at(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, NITRO_ZONE_SIZE, NITRO_ZONE_SIZE),
        }
    }
}

/// Things that happened during a step that the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Car overlapped an obstacle this frame
    Crash,
    /// A coin was picked up
    CoinCollected,
    /// A fuel canister was picked up
    FuelCollected,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena size in pixels
    pub width: f32,
    pub height: f32,
    pub car: Car,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub fuel_pickups: Vec<FuelPickup>,
    pub nitro_zones: Vec<NitroZone>,
    /// Score (unbounded, may go negative)
    pub score: f32,
    /// Fuel percentage, kept in [0, 100] between steps
    pub fuel: f32,
    /// Fuel burned every frame
    pub fuel_drain_per_frame: f32,
    /// Score trickle per frame while fuel remains
    pub survival_bonus: f32,
    /// Steps simulated so far
    pub frame: u64,
    /// Events raised by the most recent step (drained by the host)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an empty arena with the car parked near the bottom center
    pub fn new(width: f32, height: f32, tuning: CarTuning) -> Self {
        let start = Vec2::new(width / 2.0, height - CAR_START_BOTTOM_OFFSET);
        Self {
            width,
            height,
            car: Car::new(start, tuning),
            obstacles: Vec::new(),
            coins: Vec::new(),
            fuel_pickups: Vec::new(),
            nitro_zones: Vec::new(),
            score: 0.0,
            fuel: FUEL_MAX,
            fuel_drain_per_frame: FUEL_DRAIN_PER_FRAME,
            survival_bonus: SURVIVAL_BONUS,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Out of fuel. Purely a display state: the simulation keeps running.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.fuel <= 0.0
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
