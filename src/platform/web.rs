//! Browser host
//!
//! Expects a `<canvas id="canvas">` element. Optional JSON settings can be
//! supplied in its `data-config` attribute.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use crate::audio::{AudioManager, Mixer};
use crate::game::Game;
use crate::input::Key;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

type SharedGame = Rc<RefCell<Game<AudioManager>>>;

/// Set up the canvas, input and audio, then start the frame loop
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Fuel Rush starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| JsValue::from_str("no canvas"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

    let settings = canvas
        .get_attribute("data-config")
        .map(|json| Settings::from_json_or_default(&json))
        .unwrap_or_default();

    let seed = settings.seed_or(js_sys::Date::now() as u64);
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    let audio = AudioManager::new(Mixer::from_settings(&settings));
    let game = Rc::new(RefCell::new(Game::new(
        &settings, width, height, seed, audio,
    )));

    setup_keyboard(&window, game.clone())?;

    request_animation_frame(game, CanvasSurface::new(ctx));

    log::info!("Fuel Rush running!");
    Ok(())
}

fn setup_keyboard(window: &web_sys::Window, game: SharedGame) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let Some(key) = Key::from_dom_key(&event.key()) else {
            return;
        };
        // Keep arrow keys from scrolling the page
        event.prevent_default();

        let mut g = game.borrow_mut();
        // Key presses count as the user gesture audio needs
        g.audio().resume();
        g.push_key(key);
    });
    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: SharedGame, surface: CanvasSurface) {
    let Some(window) = web_sys::window() else {
        log::error!("Window gone, stopping frame loop");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game, surface);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
        return;
    }
    closure.forget();
}

fn game_loop(game: SharedGame, mut surface: CanvasSurface) {
    game.borrow_mut().frame(&mut surface);
    request_animation_frame(game, surface);
}
