//! Initial world population
//!
//! Entities are scattered uniformly over the full width and the upper half of
//! the arena, leaving the lower half (where the car starts) clear.

use rand::Rng;

use super::state::{Coin, FuelPickup, GameState, NitroZone, Obstacle};

/// Sample a coordinate in [0, extent); a degenerate axis pins to 0
fn sample_axis<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Fill the arena with `count` entities of each kind
///
/// Positions are drawn independently per entity. Existing entities are kept;
/// call this once on a fresh state.
pub fn populate<R: Rng>(state: &mut GameState, count: usize, rng: &mut R) {
    let width = state.width;
    let upper_half = state.height / 2.0;

    state.obstacles.reserve(count);
    state.coins.reserve(count);
    state.fuel_pickups.reserve(count);
    state.nitro_zones.reserve(count);

    for _ in 0..count {
        state.obstacles.push(Obstacle::at(
            sample_axis(rng, width),
            sample_axis(rng, upper_half),
        ));
        state.coins.push(Coin::at(
            sample_axis(rng, width),
            sample_axis(rng, upper_half),
        ));
        state.fuel_pickups.push(FuelPickup::at(
            sample_axis(rng, width),
            sample_axis(rng, upper_half),
        ));
        state.nitro_zones.push(NitroZone::at(
            sample_axis(rng, width),
            sample_axis(rng, upper_half),
        ));
    }

    log::info!(
        "World populated: {} obstacles, {} coins, {} fuel, {} nitro zones",
        state.obstacles.len(),
        state.coins.len(),
        state.fuel_pickups.len(),
        state.nitro_zones.len()
    );
}
