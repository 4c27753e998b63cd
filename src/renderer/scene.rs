//! Scene and HUD drawing

use super::{Surface, colors, fonts};
use crate::sim::GameState;

/// HUD text positions
const HUD_X: f32 = 20.0;
const SCORE_Y: f32 = 30.0;
const FUEL_Y: f32 = 55.0;
/// Offset that roughly centers "GAME OVER" at 32px
const GAME_OVER_HALF_WIDTH: f32 = 90.0;

/// Draw the current state. Does not clear the surface.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.set_fill_style(colors::OBSTACLE);
    for obstacle in &state.obstacles {
        let r = &obstacle.rect;
        surface.fill_rect(r.x, r.y, r.width, r.height);
    }

    surface.set_fill_style(colors::COIN);
    for coin in &state.coins {
        surface.fill_circle(coin.pos.x, coin.pos.y, coin.radius);
    }

    surface.set_fill_style(colors::FUEL);
    for pickup in &state.fuel_pickups {
        surface.fill_circle(pickup.pos.x, pickup.pos.y, pickup.radius);
    }

    surface.set_fill_style(colors::NITRO);
    for zone in &state.nitro_zones {
        let r = &zone.rect;
        surface.fill_rect(r.x, r.y, r.width, r.height);
    }

    draw_car(state, surface);
    draw_hud(state, surface);
}

/// Car body centered on its position, rotated to its heading
fn draw_car<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let car = &state.car;
    surface.save();
    surface.translate(car.pos.x, car.pos.y);
    surface.rotate(car.angle);
    surface.set_fill_style(colors::CAR);
    surface.fill_rect(-car.width / 2.0, -car.height / 2.0, car.width, car.height);
    surface.restore();
}

fn draw_hud<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.set_fill_style(colors::HUD_TEXT);
    surface.set_font(fonts::HUD);
    surface.fill_text(&score_label(state.score), HUD_X, SCORE_Y);
    surface.fill_text(&fuel_label(state.fuel), HUD_X, FUEL_Y);

    if state.is_game_over() {
        surface.set_fill_style(colors::GAME_OVER);
        surface.set_font(fonts::GAME_OVER);
        surface.fill_text(
            "GAME OVER",
            state.width / 2.0 - GAME_OVER_HALF_WIDTH,
            state.height / 2.0,
        );
    }
}

/// Floored, so -0.5 shows as -1
fn score_label(score: f32) -> String {
    format!("Score: {}", score.floor() as i64)
}

fn fuel_label(fuel: f32) -> String {
    format!("Fuel: {}%", fuel.floor() as i64)
}
