//! Recording surface
//!
//! Stores every draw call so headless runs and tests can inspect a frame.

use super::Surface;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillStyle(String),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    FillCircle { cx: f32, cy: f32, radius: f32 },
    Font(String),
    FillText { text: String, x: f32, y: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
}

/// A `Surface` that records instead of drawing
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Nesting depth of save/restore at the end of the list
    pub fn transform_depth(&self) -> i32 {
        self.commands.iter().fold(0, |depth, cmd| match cmd {
            DrawCommand::Save => depth + 1,
            DrawCommand::Restore => depth - 1,
            _ => depth,
        })
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { cx, cy, radius });
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
