//! Shape and text rasterization on top of the surface primitives.
//!
//! Everything here is expressed in terms of `set_pixel` and `fill_rect`, so
//! clipping and format handling come from the surface.

mod ellipse;
pub(crate) mod font;
mod line;
mod poly;
mod text;

pub use ellipse::Quadrants;

#[cfg(test)]
#[path = "../../tests/unit/draw/mod.rs"]
mod tests;
