//! Keyboard input
//!
//! Key presses are queued as they arrive and applied in one batch at the
//! start of the next simulation step. Speed is not capped here: several
//! presses between frames can overshoot `max_speed` until the step clamps it.

use std::collections::VecDeque;

use glam::Vec2;

use crate::normalize_angle;
use crate::sim::state::{Car, GameState};
use crate::sim::tick::TickInput;

/// The four logical directions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Apply a single key press to the car's controls
pub fn apply_key(car: &mut Car, key: Key) {
    match key {
        Key::Up => car.speed += car.tuning.acceleration,
        Key::Down => car.speed -= car.tuning.acceleration,
        Key::Left => car.angle -= car.tuning.turn_rate,
        Key::Right => car.angle += car.tuning.turn_rate,
    }
}

/// Key presses waiting for the next frame
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<Key>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press (arrival order is preserved)
    pub fn push(&mut self, key: Key) {
        self.pending.push_back(key);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain everything queued so far into the input for one step
    pub fn take(&mut self) -> TickInput {
        TickInput {
            keys: self.pending.drain(..).collect(),
        }
    }
}

/// Speed the autopilot cruises at, as a fraction of `max_speed`
const AUTOPILOT_CRUISE: f32 = 0.6;

/// Fuel level below which the autopilot goes for fuel before coins
const AUTOPILOT_LOW_FUEL: f32 = 40.0;

/// Simple steering AI for headless runs
///
/// Heads for the nearest coin, or the nearest fuel canister when running low.
/// Emits the same key presses a player would.
#[derive(Debug, Default, Clone, Copy)]
pub struct Autopilot;

impl Autopilot {
    pub fn keys(&self, state: &GameState) -> Vec<Key> {
        let car = &state.car;

        let nearest_coin = nearest_to(car.pos, state.coins.iter().map(|c| c.pos));
        let nearest_fuel = nearest_to(car.pos, state.fuel_pickups.iter().map(|f| f.pos));

        let target = if state.fuel < AUTOPILOT_LOW_FUEL {
            nearest_fuel.or(nearest_coin)
        } else {
            nearest_coin.or(nearest_fuel)
        };
        let Some(target) = target else {
            return Vec::new();
        };

        let mut keys = Vec::with_capacity(2);

        let to_target = target - car.pos;
        let desired = to_target.y.atan2(to_target.x);
        let delta = normalize_angle(desired - car.angle);
        let dead_zone = car.tuning.turn_rate / 2.0;
        if delta > dead_zone {
            keys.push(Key::Right);
        } else if delta < -dead_zone {
            keys.push(Key::Left);
        }

        if car.speed < car.tuning.max_speed * AUTOPILOT_CRUISE {
            keys.push(Key::Up);
        }

        keys
    }
}

fn nearest_to(origin: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| {
        a.distance_squared(origin)
            .partial_cmp(&b.distance_squared(origin))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
