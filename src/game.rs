//! Frame driver
//!
//! Owns the game state, the pending input and the cue player, and runs one
//! frame at a time: clear, simulate, play cues, render, survival bonus.
//! Hosts decide when frames happen.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{CuePlayer, SoundEffect};
use crate::input::{InputQueue, Key};
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{GameState, apply_survival_bonus, populate, tick};

/// Game instance holding all state
pub struct Game<A: CuePlayer> {
    pub state: GameState,
    input: InputQueue,
    audio: A,
    /// Whether the last frame ended out of fuel (logging only)
    was_game_over: bool,
}

impl<A: CuePlayer> Game<A> {
    /// Build a populated world sized `width` x `height`
    pub fn new(settings: &Settings, width: f32, height: f32, seed: u64, audio: A) -> Self {
        let mut state = GameState::new(width, height, settings.car);
        state.fuel_drain_per_frame = settings.fuel_drain_per_frame;
        state.survival_bonus = settings.survival_bonus;

        let mut rng = Pcg32::seed_from_u64(seed);
        populate(&mut state, settings.entity_count, &mut rng);
        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        Self::from_state(state, audio)
    }

    /// Wrap an existing state
    pub fn from_state(state: GameState, audio: A) -> Self {
        let was_game_over = state.is_game_over();
        Self {
            state,
            input: InputQueue::new(),
            audio,
            was_game_over,
        }
    }

    /// Queue a key press for the next frame
    pub fn push_key(&mut self, key: Key) {
        self.input.push(key);
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run one full frame against `surface`
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.state.width, self.state.height);

        let input = self.input.take();
        tick(&mut self.state, &input);

        for event in self.state.drain_events() {
            self.audio.play(SoundEffect::from(event));
        }

        render(&self.state, surface);
        apply_survival_bonus(&mut self.state);

        let game_over = self.state.is_game_over();
        if game_over && !self.was_game_over {
            log::info!(
                "Out of fuel at frame {} with score {}",
                self.state.frame,
                self.state.score.floor() as i64
            );
        } else if !game_over && self.was_game_over {
            log::info!("Back in the race at frame {}", self.state.frame);
        }
        self.was_game_over = game_over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::state::{CarTuning, Coin, Obstacle};
    use glam::Vec2;

    /// Cue player that remembers what it was asked to play
    #[derive(Default)]
    struct RecordingAudio(Vec<SoundEffect>);

    impl CuePlayer for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    fn bare_game() -> Game<RecordingAudio> {
        let mut state = GameState::new(800.0, 600.0, CarTuning::default());
        state.car.pos = Vec2::new(100.0, 100.0);
        Game::from_state(state, RecordingAudio::default())
    }

    #[test]
    fn test_new_game_populates_world() {
        let settings = Settings::default();
        let game = Game::new(&settings, 800.0, 600.0, 12345, RecordingAudio::default());
        assert_eq!(game.state.obstacles.len(), 6);
        assert_eq!(game.state.coins.len(), 6);
        assert_eq!(game.state.fuel_pickups.len(), 6);
        assert_eq!(game.state.nitro_zones.len(), 6);
        assert_eq!(game.state.car.pos, Vec2::new(400.0, 520.0));
    }

    #[test]
    fn test_frame_clears_then_draws() {
        let mut game = bare_game();
        let mut list = DrawList::new();
        game.frame(&mut list);

        assert_eq!(
            list.commands[0],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(list.texts().next(), Some("Score: 0"));
    }

    #[test]
    fn test_bonus_applies_after_render() {
        let mut game = bare_game();
        let mut list = DrawList::new();
        game.frame(&mut list);

        // HUD showed the pre-bonus score; state has the bonus now
        assert!((game.state.score - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_no_bonus_when_out_of_fuel() {
        let mut game = bare_game();
        game.state.fuel = 0.0;
        let mut list = DrawList::new();
        game.frame(&mut list);

        assert_eq!(game.state.score, 0.0);
        assert!(list.texts().any(|t| t == "GAME OVER"));
    }

    #[test]
    fn test_last_drop_of_fuel_ends_bonus_same_frame() {
        let mut game = bare_game();
        game.state.fuel = 0.04;
        let mut list = DrawList::new();
        game.frame(&mut list);

        assert_eq!(game.state.fuel, 0.0);
        assert_eq!(game.state.score, 0.0);
    }

    #[test]
    fn test_events_become_cues() {
        let mut game = bare_game();
        game.state.obstacles.push(Obstacle::at(100.0, 100.0));
        game.state.coins.push(Coin::at(100.0, 100.0));
        let mut list = DrawList::new();
        game.frame(&mut list);

        assert_eq!(game.audio().0, vec![SoundEffect::Crash, SoundEffect::Coin]);
        assert!(game.state.events.is_empty());

        // Obstacle keeps firing, coin is gone
        game.frame(&mut list);
        assert_eq!(
            game.audio().0,
            vec![SoundEffect::Crash, SoundEffect::Coin, SoundEffect::Crash]
        );
    }

    #[test]
    fn test_queued_keys_apply_on_next_frame() {
        let mut game = bare_game();
        game.push_key(Key::Up);
        game.push_key(Key::Up);
        let mut list = DrawList::new();
        game.frame(&mut list);

        // 0.4 speed moved the car, then friction
        assert!((game.state.car.pos.x - 100.4).abs() < 1e-4);
        assert!((game.state.car.speed - 0.38).abs() < 1e-4);

        // Nothing left queued
        let speed = game.state.car.speed;
        game.frame(&mut list);
        assert!(game.state.car.speed < speed);
    }
}
