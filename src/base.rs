pub mod chain;
pub mod grid;
pub mod parse;
mod vec2d;

pub use vec2d::Vec2D;
