//! Drawing surface abstraction
//!
//! The game only issues immediate-mode draw calls. Backends implement `Canvas`;
//! `RecordingCanvas` keeps the calls as data for headless runs and tests.

pub mod shapes;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use shapes::{draw_ball, draw_block, draw_hud};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color with random channels
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

/// Immediate-mode drawing primitives supplied by the host framework
pub trait Canvas {
    fn clear_background(&mut self, color: Color);
    fn set_line_color(&mut self, color: Color);
    fn set_line_size(&mut self, size: f32);
    fn set_fill_color(&mut self, color: Color);
    /// Filled rectangle with its top-left corner at `position`
    fn rectangle(&mut self, position: Vec2, size: Vec2);
    fn circle(&mut self, center: Vec2, radius: f32);
    /// Draw text; `\n` starts a new line
    fn text(&mut self, text: &str, position: Vec2);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    Rectangle {
        position: Vec2,
        size: Vec2,
        fill: Color,
        line: Color,
        line_size: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    Text {
        text: String,
        position: Vec2,
    },
}

/// Canvas that records every call instead of rasterizing
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    line_color: Color,
    line_size: f32,
    fill_color: Color,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            line_color: Color::BLACK,
            line_size: 1.0,
            fill_color: Color::WHITE,
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands (call once per frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings drawn since the last clear
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of rectangles drawn since the last clear
    pub fn rectangle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rectangle { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    fn set_line_size(&mut self, size: f32) {
        self.line_size = size;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn rectangle(&mut self, position: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Rectangle {
            position,
            size,
            fill: self.fill_color,
            line: self.line_color,
            line_size: self.line_size,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: self.fill_color,
        });
    }

    fn text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_captures_current_colors() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_fill_color(Color::RED);
        canvas.set_line_color(Color::CYAN);
        canvas.set_line_size(3.0);
        canvas.rectangle(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));

        assert_eq!(
            canvas.commands[0],
            DrawCommand::Rectangle {
                position: Vec2::new(1.0, 2.0),
                size: Vec2::new(3.0, 4.0),
                fill: Color::RED,
                line: Color::CYAN,
                line_size: 3.0,
            }
        );
    }

    #[test]
    fn test_random_color_is_opaque() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(Color::random(&mut rng).a, 255);
        }
    }
}
