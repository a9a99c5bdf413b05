//! Rendering module - the per-frame draw snapshot and its 2D mesh renderer.

pub mod frame;
mod plugin;

pub use frame::{DrawCommand, Frame, Primitive, TextCommand};
pub use plugin::{screen_to_world, shape_transform, FrameShape, RenderingPlugin, ShapeMeshes, ShapePool};
