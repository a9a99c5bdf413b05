//! Render snapshot - what one frame looks like, independent of the renderer.
//!
//! Positions are screen pixels with the origin at the top-left corner and y
//! pointing down. The Bevy side maps them into world space when drawing.

use bevy::prelude::*;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const GROUND_COLOR: Color = Color::srgb(0.2, 0.8, 0.2);
pub const PLAYER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const COIN_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const SPIKE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const ENEMY_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const FLAG_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const LIFE_REMAINING_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const LIFE_LOST_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const SCORE_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const BANNER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

pub const COIN_RADIUS: f32 = 10.0;
pub const ENEMY_RADIUS: f32 = 20.0;
pub const LIFE_RADIUS: f32 = 8.0;
/// Horizontal distance between life markers.
pub const LIFE_SPACING: f32 = 20.0;

pub const SCORE_FONT_SIZE: f32 = 30.0;
pub const BANNER_FONT_SIZE: f32 = 40.0;
pub const BANNER_TEXT: &str = "Game Over";

/// A filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle.
    Quad(Rect),
    /// Upward-pointing isosceles triangle filling the rectangle.
    Triangle(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl Primitive {
    /// Rectangle from top-left corner and size.
    pub fn quad(x: f32, y: f32, w: f32, h: f32) -> Self {
        Primitive::Quad(Rect::new(x, y, x + w, y + h))
    }

    pub fn triangle(x: f32, y: f32, w: f32, h: f32) -> Self {
        Primitive::Triangle(Rect::new(x, y, x + w, y + h))
    }

    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Primitive::Circle {
            center: Vec2::new(x, y),
            radius,
        }
    }
}

/// One filled shape in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub color: Color,
}

impl DrawCommand {
    pub fn new(primitive: Primitive, color: Color) -> Self {
        Self { primitive, color }
    }
}

/// A line of text anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCommand<'a> {
    pub content: &'a str,
    pub position: Vec2,
    pub font_size: f32,
    pub color: Color,
}

/// Everything drawn in one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub shapes: Vec<DrawCommand>,
    pub score: TextCommand<'a>,
    /// Only present once the session is over.
    pub banner: Option<TextCommand<'a>>,
}
