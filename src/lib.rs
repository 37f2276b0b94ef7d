//!
//! An abstract representation of a 2D scene built from filled shapes
//!
//! Shapes are described as a tree: circles and polygons carry coordinates and
//! a colour, and groups collect other shapes (including other groups) in paint
//! order. A scene is rendered by walking the tree and asking a `DrawingSurface`
//! implementation to fill each leaf, so the same scene can be painted onto any
//! surface that can fill discs and closed polygons.
//!
#![warn(bare_trait_objects)]

mod point;
mod color;
mod shape;
mod surface;
mod transform;
mod render;

pub use self::point::*;
pub use self::color::*;
pub use self::shape::*;
pub use self::surface::*;
pub use self::transform::*;
pub use self::render::*;
