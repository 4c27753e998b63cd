//! Headless host
//!
//! Runs the frame driver for a fixed number of frames with the autopilot at
//! the wheel, drawing into a `DrawList` that is reset every frame.

use serde::Serialize;

use crate::audio::NullAudio;
use crate::game::Game;
use crate::input::Autopilot;
use crate::renderer::DrawList;
use crate::settings::Settings;

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: i64,
    pub fuel: i64,
    pub coins_left: usize,
    pub fuel_pickups_left: usize,
    pub cues_played: u64,
    pub game_over: bool,
}

/// Simulate `settings.headless_frames` frames
pub fn run(settings: &Settings, seed: u64) -> RunSummary {
    let mut game = Game::new(
        settings,
        settings.canvas_width,
        settings.canvas_height,
        seed,
        NullAudio::new(),
    );
    let autopilot = Autopilot;
    let mut surface = DrawList::new();

    for _ in 0..settings.headless_frames {
        for key in autopilot.keys(&game.state) {
            game.push_key(key);
        }
        surface.reset();
        game.frame(&mut surface);
    }

    let state = &game.state;
    RunSummary {
        seed,
        frames: state.frame,
        score: state.score.floor() as i64,
        fuel: state.fuel.floor() as i64,
        coins_left: state.coins.len(),
        fuel_pickups_left: state.fuel_pickups.len(),
        cues_played: game.audio().played(),
        game_over: state.is_game_over(),
    }
}
