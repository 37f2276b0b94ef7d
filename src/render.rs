use super::shape::*;
use super::surface::*;

use log::*;

impl Shape {
    ///
    /// Paints this shape onto a drawing surface
    ///
    /// The tree is walked depth-first with the children of a group painted in
    /// sequence order, so shapes that appear later in a group are painted over
    /// the ones that came before them. Rendering reads the tree but never
    /// changes it: the only thing that's modified is the surface.
    ///
    pub fn render(&self, surface: &mut dyn DrawingSurface) {
        match self {
            Shape::Circle(circle)       => surface.fill_disc(circle.center, circle.radius, circle.color),

            Shape::Polygon(polygon)     => surface.fill_polygon(&polygon.points, polygon.color),

            Shape::Group(group)         => {
                for shape in group.shapes.iter() {
                    shape.render(surface);
                }
            }
        }
    }

    ///
    /// Paints this shape onto a drawing surface with the origin moved to the surface's centre
    ///
    /// Shapes are usually described around the origin, so this is the common
    /// way to put a scene on screen: the tree is translated by half the
    /// surface's width and height and the translated copy is painted. The
    /// shape itself is not changed, so rendering the same scene again paints
    /// it in the same place.
    ///
    pub fn render_centered(&self, surface: &mut dyn DrawingSurface) {
        let dx = surface.width() / 2.0;
        let dy = surface.height() / 2.0;

        trace!("Centering scene at ({}, {})", dx, dy);

        self.translate(dx, dy).render(surface);
    }
}

#[cfg(test)]
mod test {
    use super::super::color::*;
    use super::super::point::*;
    use super::*;

    #[test]
    fn circles_fill_a_disc() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let disc        = circle(Color::RED, 5.0).unwrap().translate(100.0, 100.0);

        disc.render(&mut surface);

        assert!(surface.ops() == &[SurfaceOp::FillDisc(ShapePoint::new(100.0, 100.0), 5.0, Color::RED)]);
    }

    #[test]
    fn polygons_fill_their_outline() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let triangle    = polygon(Color::GREEN, vec![
            ShapePoint::new(0.0, 0.0),
            ShapePoint::new(4.0, 0.0),
            ShapePoint::new(2.0, 3.0),
        ]).unwrap();

        triangle.render(&mut surface);

        match &surface.ops()[0] {
            SurfaceOp::FillPolygon(points, color)   => {
                assert!(points.len() == 3);
                assert!(points[2] == ShapePoint::new(2.0, 3.0));
                assert!(color == &Color::GREEN);
            }

            other => panic!("Expected a polygon fill, got {:?}", other),
        }
    }

    #[test]
    fn groups_paint_their_children_in_order() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let scene       = group(vec![
            circle(Color::GREEN, 20.0).unwrap(),
            circle(Color::BLUE, 20.0).unwrap().translate(10.0, 0.0),
        ]);

        scene.render(&mut surface);

        match (&surface.ops()[0], &surface.ops()[1]) {
            (SurfaceOp::FillDisc(_, _, first), SurfaceOp::FillDisc(_, _, second)) => {
                assert!(first == &Color::GREEN);
                assert!(second == &Color::BLUE);
            }

            other => panic!("Expected two disc fills, got {:?}", other),
        }
    }

    #[test]
    fn empty_groups_paint_nothing() {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        group(vec![]).render(&mut surface);

        assert!(surface.ops().is_empty());
    }

    #[test]
    fn render_centered_offsets_by_half_the_surface() {
        let mut surface = RecordingSurface::new(100.0, 100.0);

        square(Color::BLUE, 20.0).unwrap().render_centered(&mut surface);

        assert!(surface.ops() == &[SurfaceOp::FillPolygon(vec![
            ShapePoint::new(40.0, 40.0),
            ShapePoint::new(60.0, 40.0),
            ShapePoint::new(60.0, 60.0),
            ShapePoint::new(40.0, 60.0),
        ], Color::BLUE)]);
    }

    #[test]
    fn render_centered_paints_the_same_place_every_time() {
        let scene           = square(Color::BLUE, 20.0).unwrap();
        let mut first_pass  = RecordingSurface::new(100.0, 100.0);
        let mut second_pass = RecordingSurface::new(100.0, 100.0);

        scene.render_centered(&mut first_pass);
        scene.render_centered(&mut second_pass);

        assert!(first_pass.ops() == second_pass.ops());
    }
}
