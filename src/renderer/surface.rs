//! 2D drawing surface abstraction

use glam::Vec2;

use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::sim::Color;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// The whole playfield
    pub const PLAYFIELD: Rect = Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT);

    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// True if `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.pos.x >= self.pos.x
            && other.pos.y >= self.pos.y
            && other.pos.x + other.size.x <= self.pos.x + self.size.x
            && other.pos.y + other.size.y <= self.pos.y + self.size.y
    }
}

/// Immediate-mode raster target the frame is drawn onto
pub trait Surface {
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect(Rect, Color),
    FillTriangle([Vec2; 3], Color),
    FillText {
        text: String,
        pos: Vec2,
        font: String,
        color: Color,
    },
}

/// Surface that stores draw calls instead of rasterizing (headless runs, tests)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    /// Clearing the whole playfield also forgets the previous frame's calls
    fn clear(&mut self, rect: Rect) {
        if rect.contains(&Rect::PLAYFIELD) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.commands.push(DrawCommand::FillTriangle(points, color));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color,
        });
    }
}
