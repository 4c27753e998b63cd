//! Per-frame simulation step
//!
//! One call advances the world by exactly one frame. There is no delta-time
//! scaling: speeds are pixels per frame, so gameplay pace follows the display
//! refresh rate.

use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::input::{Key, apply_key};

/// Input commands for a single step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Key presses received since the previous step, in arrival order
    pub keys: Vec<Key>,
}

/// Advance the game state by one frame
///
/// Order matters and is observable:
/// input, speed clamp, move, friction, fuel burn, obstacles, coins, fuel
/// pickups, nitro. Every obstacle and nitro zone applies on each frame of
/// overlap, not just on entry.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    for &key in &input.keys {
        apply_key(&mut state.car, key);
    }

    update_car(state);
    burn_fuel(state);
    resolve_obstacles(state);
    collect_coins(state);
    collect_fuel(state);
    apply_nitro(state);

    // Crash penalties can leave fuel below zero mid-step
    state.fuel = state.fuel.clamp(0.0, FUEL_MAX);
    state.frame += 1;
}

/// Passive score for staying alive
///
/// Runs after rendering so it sees the fuel level left by this frame's step.
pub fn apply_survival_bonus(state: &mut GameState) {
    if state.fuel > 0.0 {
        state.score += state.survival_bonus;
    }
}

fn update_car(state: &mut GameState) {
    let car = &mut state.car;
    let max_speed = car.tuning.max_speed;

    car.speed = car.speed.clamp(-max_speed, max_speed);
    car.pos += car.heading() * car.speed;
    car.speed *= 1.0 - car.tuning.friction;
}

fn burn_fuel(state: &mut GameState) {
    state.fuel = (state.fuel - state.fuel_drain_per_frame).max(0.0);
}

fn resolve_obstacles(state: &mut GameState) {
    let car_box = state.car.bounds();
    for obstacle in &state.obstacles {
        if car_box.overlaps(&obstacle.rect) {
            log::debug!("Crash at ({:.0}, {:.0})", obstacle.rect.x, obstacle.rect.y);
            state.events.push(GameEvent::Crash);
            state.score -= CRASH_SCORE_PENALTY;
            state.fuel -= CRASH_FUEL_PENALTY;
        }
    }
}

fn collect_coins(state: &mut GameState) {
    let car_box = state.car.bounds();
    let mut collected = 0;
    state.coins.retain(|coin| {
        if car_box.overlaps(&coin.bounds()) {
            collected += 1;
            false
        } else {
            true
        }
    });

    for _ in 0..collected {
        state.events.push(GameEvent::CoinCollected);
        state.score += COIN_SCORE;
    }
    if collected > 0 {
        log::debug!("Collected {} coin(s), {} left", collected, state.coins.len());
    }
}

fn collect_fuel(state: &mut GameState) {
    let car_box = state.car.bounds();
    let mut collected = 0;
    state.fuel_pickups.retain(|pickup| {
        if car_box.overlaps(&pickup.bounds()) {
            collected += 1;
            false
        } else {
            true
        }
    });

    for _ in 0..collected {
        state.events.push(GameEvent::FuelCollected);
        state.fuel = (state.fuel + FUEL_PICKUP_AMOUNT).min(FUEL_MAX);
    }
    if collected > 0 {
        log::debug!("Refueled to {:.1}", state.fuel);
    }
}

fn apply_nitro(state: &mut GameState) {
    let car_box = state.car.bounds();
    let ceiling = state.car.nitro_ceiling();
    for zone in &state.nitro_zones {
        if car_box.overlaps(&zone.rect) {
            state.car.speed = (state.car.speed + NITRO_SPEED_BUMP).min(ceiling);
            state.score += NITRO_SCORE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{CarTuning, Coin, FuelPickup, NitroZone, Obstacle};
    use glam::Vec2;

    /// Empty 800x600 arena with the car parked at (100, 100)
    fn arena() -> GameState {
        let mut state = GameState::new(800.0, 600.0, CarTuning::default());
        state.car.pos = Vec2::new(100.0, 100.0);
        state
    }

    fn step(state: &mut GameState) {
        tick(state, &TickInput::default());
    }

    #[test]
    fn test_coin_collected_once() {
        let mut state = arena();
        state.coins.push(Coin::at(100.0, 100.0));
        state.coins.push(Coin::at(700.0, 50.0));

        step(&mut state);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.score, 10.0);
        assert_eq!(state.events, vec![GameEvent::CoinCollected]);

        // Same spot, coin already gone
        step(&mut state);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.score, 10.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_collection_preserves_order_of_survivors() {
        let mut state = arena();
        state.coins.push(Coin::at(700.0, 10.0));
        state.coins.push(Coin::at(100.0, 100.0));
        state.coins.push(Coin::at(10.0, 300.0));

        step(&mut state);
        assert_eq!(state.coins, vec![Coin::at(700.0, 10.0), Coin::at(10.0, 300.0)]);
    }

    #[test]
    fn test_fuel_pickup_caps_at_max() {
        let mut state = arena();
        state.fuel = 90.0;
        state.fuel_pickups.push(FuelPickup::at(100.0, 100.0));

        step(&mut state);
        assert_eq!(state.fuel, 100.0);
        assert!(state.fuel_pickups.is_empty());
        assert_eq!(state.events, vec![GameEvent::FuelCollected]);
    }

    #[test]
    fn test_empty_tank_stays_at_zero_while_crashing() {
        let mut state = arena();
        state.fuel = 0.0;
        state.obstacles.push(Obstacle::at(100.0, 100.0));

        step(&mut state);
        assert_eq!(state.fuel, 0.0);
        assert_eq!(state.score, -5.0);

        // Penalty repeats for as long as the overlap lasts
        step(&mut state);
        assert_eq!(state.fuel, 0.0);
        assert_eq!(state.score, -10.0);
        assert_eq!(state.events, vec![GameEvent::Crash]);
    }

    #[test]
    fn test_crash_then_refuel_in_same_frame() {
        let mut state = arena();
        state.fuel = 2.0;
        state.obstacles.push(Obstacle::at(100.0, 100.0));
        state.fuel_pickups.push(FuelPickup::at(100.0, 100.0));

        step(&mut state);
        // 2 - 0.05 - 5 + 25: the crash dip below zero is carried into the refuel
        assert!((state.fuel - 21.95).abs() < 1e-4);
        assert_eq!(state.events, vec![GameEvent::Crash, GameEvent::FuelCollected]);
    }

    #[test]
    fn test_nitro_bump_from_rest() {
        let mut state = arena();
        state.nitro_zones.push(NitroZone::at(100.0, 100.0));

        step(&mut state);
        assert_eq!(state.car.speed, 1.0);
        assert_eq!(state.score, 2.0);
    }

    #[test]
    fn test_nitro_ceiling_holds() {
        let mut state = arena();
        state.car.tuning.friction = 0.0;
        state.car.speed = 7.0;
        // Large zone so the car stays inside after moving
        state.nitro_zones.push(NitroZone::at(0.0, 0.0));
        state.nitro_zones[0].rect.width = 800.0;
        state.nitro_zones[0].rect.height = 600.0;

        // Clamp to 5, move, then nitro pushes back to the ceiling
        step(&mut state);
        assert_eq!(state.car.speed, 6.0);
        step(&mut state);
        assert_eq!(state.car.speed, 6.0);

        // Ceiling check on its own, without the clamp in between
        state.car.speed = 7.0;
        apply_nitro(&mut state);
        assert_eq!(state.car.speed, 7.0);
    }

    #[test]
    fn test_friction_decays_geometrically() {
        let mut state = arena();
        state.car.speed = 4.0;
        let friction = state.car.tuning.friction;

        for _ in 0..30 {
            step(&mut state);
            assert!(state.car.speed > 0.0);
        }
        let expected = 4.0 * (1.0 - friction).powi(30);
        assert!((state.car.speed - expected).abs() < 1e-4);
    }

    #[test]
    fn test_reverse_speed_decays_toward_zero() {
        let mut state = arena();
        state.car.speed = -3.0;
        for _ in 0..10 {
            step(&mut state);
            assert!(state.car.speed < 0.0);
        }
    }

    #[test]
    fn test_clamp_happens_before_move() {
        let mut state = arena();
        state.car.speed = 12.0;

        step(&mut state);
        // Moved by the clamped speed, then friction applied to it
        assert!((state.car.pos.x - 105.0).abs() < 1e-4);
        assert!((state.car.speed - 4.75).abs() < 1e-4);
    }

    #[test]
    fn test_keys_accumulate_then_clamp() {
        let mut state = arena();
        let input = TickInput {
            keys: vec![Key::Up; 40],
        };

        tick(&mut state, &input);
        // 8 units of acceleration queued, but the move uses the capped 5
        assert!((state.car.pos.x - 105.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_drives_movement() {
        let mut state = arena();
        let input = TickInput {
            keys: vec![Key::Right; 5],
        };
        state.car.speed = 2.0;

        tick(&mut state, &input);
        let angle = 0.5f32;
        assert!((state.car.angle - angle).abs() < 1e-5);
        assert!((state.car.pos.x - (100.0 + angle.cos() * 2.0)).abs() < 1e-4);
        assert!((state.car.pos.y - (100.0 + angle.sin() * 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_fuel_burns_every_frame() {
        let mut state = arena();
        for _ in 0..100 {
            step(&mut state);
        }
        assert!((state.fuel - 95.0).abs() < 1e-3);
        assert_eq!(state.frame, 100);
    }

    #[test]
    fn test_game_over_does_not_halt_simulation() {
        let mut state = arena();
        state.fuel = 0.0;
        state.car.speed = 3.0;
        state.coins.push(Coin::at(103.0, 100.0));

        step(&mut state);
        assert!(state.is_game_over());
        assert!(state.car.pos.x > 100.0);
        assert_eq!(state.score, 10.0);
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_survival_bonus_only_with_fuel() {
        let mut state = arena();
        apply_survival_bonus(&mut state);
        assert!((state.score - 0.1).abs() < 1e-6);

        state.fuel = 0.0;
        apply_survival_bonus(&mut state);
        assert!((state.score - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_touching_obstacle_is_not_a_crash() {
        let mut state = arena();
        // Car box spans x 100..140; obstacle starts exactly at 140
        state.obstacles.push(Obstacle::at(140.0, 100.0));

        step(&mut state);
        assert_eq!(state.score, 0.0);
        assert!(state.events.is_empty());
    }
}
