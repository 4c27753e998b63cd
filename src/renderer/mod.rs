//! 2D rendering
//!
//! The scene is drawn through `Surface`, a minimal immediate-mode canvas:
//! filled rects and circles, text, and a save/translate/rotate/restore
//! transform stack. The browser backs it with a canvas 2D context; headless
//! runs and tests record the calls into a `DrawList`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, DrawList};
pub use scene::render;

/// Immediate-mode drawing target with a top-left origin
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// CSS color used by subsequent fills
    fn set_fill_style(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);
    /// CSS font used by subsequent text
    fn set_font(&mut self, font: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate subsequent drawing (radians, clockwise on screen)
    fn rotate(&mut self, angle: f32);
}

/// Colors for game elements
pub mod colors {
    pub const OBSTACLE: &str = "gray";
    pub const COIN: &str = "gold";
    pub const FUEL: &str = "green";
    pub const NITRO: &str = "blue";
    pub const CAR: &str = "red";
    pub const HUD_TEXT: &str = "#fff";
    pub const GAME_OVER: &str = "red";
}

/// HUD fonts
pub mod fonts {
    pub const HUD: &str = "18px Arial";
    pub const GAME_OVER: &str = "32px Arial";
}
