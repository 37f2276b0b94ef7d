use super::shape::*;

impl Shape {
    ///
    /// Returns a copy of this shape translated by (dx, dy)
    ///
    /// Every circle centre and every polygon point in the tree is offset by
    /// the same amount; groups are recursed into in order. The shape this is
    /// called on is left untouched, so translations can be layered without
    /// worrying about shared trees: `shape.translate(a, b).translate(c, d)`
    /// produces the same coordinates as `shape.translate(a+c, b+d)`.
    ///
    pub fn translate(&self, dx: f32, dy: f32) -> Shape {
        match self {
            Shape::Circle(circle)       => Shape::Circle(Circle {
                radius: circle.radius,
                color:  circle.color,
                center: circle.center.offset(dx, dy),
            }),

            Shape::Polygon(polygon)     => Shape::Polygon(Polygon {
                points: polygon.points.iter().map(|point| point.offset(dx, dy)).collect(),
                color:  polygon.color,
            }),

            Shape::Group(group)         => Shape::Group(Group {
                shapes: group.shapes.iter().map(|shape| shape.translate(dx, dy)).collect(),
            }),
        }
    }

    ///
    /// Translates this shape by (dx, dy) in place
    ///
    /// This is the mutating counterpart of `translate()`, for callers that
    /// want to reposition a large tree without copying it. The tree is
    /// rewritten: circle centres move, polygons replace their point list with
    /// a freshly offset one, and groups recurse into their children. Anything
    /// else holding the same shape value will observe the moved coordinates.
    ///
    pub fn translate_in_place(&mut self, dx: f32, dy: f32) {
        match self {
            Shape::Circle(circle)       => {
                circle.center = circle.center.offset(dx, dy);
            }

            Shape::Polygon(polygon)     => {
                polygon.points = polygon.points.iter().map(|point| point.offset(dx, dy)).collect();
            }

            Shape::Group(group)         => {
                for shape in group.shapes.iter_mut() {
                    shape.translate_in_place(dx, dy);
                }
            }
        }
    }
}
