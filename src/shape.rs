use super::color::*;
use super::point::*;

use std::error::Error;
use std::fmt;

///
/// Defines a shape within a scene
///
/// Shapes form a tree: the `Circle` and `Polygon` variants are the leaves that
/// carry coordinates and a colour, and the `Group` variant collects other
/// shapes (including other groups) in paint order. The variants are closed:
/// the operations that walk a shape tree match against all of them, so a new
/// kind of shape extends every traversal at compile time.
///
/// Shapes are normally built with the constructor functions (`circle()`,
/// `square()`, `group()` and so on) rather than directly, as the constructors
/// guarantee a well-formed tree. The representation itself may change between
/// versions.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled circle
    Circle(Circle),

    /// Filled polygon, described by its outline
    Polygon(Polygon),

    /// Group of other shapes (with no shape itself)
    Group(Group),
}

///
/// A filled circle, placed by its centre point
///
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f32,
    pub color:  Color,
    pub center: ShapePoint,
}

///
/// A filled polygon, described by the points of its outline in edge order
///
/// The outline is implicitly closed: when the polygon is painted, the last
/// point joins back to the first.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<ShapePoint>,
    pub color:  Color,
}

///
/// An ordered collection of shapes, painted front to back
///
/// Later entries are painted over earlier ones. Groups carry no colour of
/// their own and may be empty or nested to any depth.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub shapes: Vec<Shape>,
}

///
/// Possible error from building a shape
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeError {
    /// A polygon outline needs at least one point
    EmptyPolygon,

    /// A circle needs a radius that is finite and greater than zero
    InvalidRadius(f32),

    /// A square or rectangle needs sides that are finite and greater than zero
    InvalidSize(f32),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::EmptyPolygon            => write!(formatter, "polygon outlines need at least one point"),
            ShapeError::InvalidRadius(radius)   => write!(formatter, "{} is not a valid circle radius", radius),
            ShapeError::InvalidSize(size)       => write!(formatter, "{} is not a valid side length", size),
        }
    }
}

impl Error for ShapeError {
}

///
/// Creates a circle of the given radius, centered at the origin
///
pub fn circle(color: Color, radius: f32) -> Result<Shape, ShapeError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ShapeError::InvalidRadius(radius));
    }

    Ok(Shape::Circle(Circle {
        radius: radius,
        color:  color,
        center: ShapePoint::origin(),
    }))
}

///
/// Creates a polygon from the points of its outline, in edge order
///
pub fn polygon(color: Color, points: Vec<ShapePoint>) -> Result<Shape, ShapeError> {
    if points.is_empty() {
        return Err(ShapeError::EmptyPolygon);
    }

    Ok(Shape::Polygon(Polygon {
        points: points,
        color:  color,
    }))
}

///
/// Creates a square of the given side length, centered at the origin
///
pub fn square(color: Color, side: f32) -> Result<Shape, ShapeError> {
    rectangle(color, side, side)
}

///
/// Creates a rectangle of the given width and height, centered at the origin
///
/// The corners are generated in the order top-left, top-right, bottom-right,
/// bottom-left (with y pointing down, as on a raster surface).
///
pub fn rectangle(color: Color, width: f32, height: f32) -> Result<Shape, ShapeError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ShapeError::InvalidSize(width));
    }
    if !height.is_finite() || height <= 0.0 {
        return Err(ShapeError::InvalidSize(height));
    }

    let half_width  = width / 2.0;
    let half_height = height / 2.0;
    let corners     = vec![
        ShapePoint::new(-half_width, -half_height),
        ShapePoint::new(half_width, -half_height),
        ShapePoint::new(half_width, half_height),
        ShapePoint::new(-half_width, half_height),
    ];

    polygon(color, corners)
}

///
/// Creates a group from an ordered list of shapes
///
/// The order is the paint order: later shapes are painted over earlier ones.
/// The list may be empty, and may contain other groups; no flattening is
/// performed.
///
pub fn group(shapes: Vec<Shape>) -> Shape {
    Shape::Group(Group { shapes: shapes })
}
