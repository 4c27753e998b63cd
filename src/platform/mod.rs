//! Platform hosts
//!
//! Each host owns the frame schedule and feeds input to a `Game`:
//! - `web`: canvas 2D, keyboard events, Web Audio, `requestAnimationFrame`
//! - `headless`: fixed frame count, autopilot input, recording surface

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;
