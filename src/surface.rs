use super::color::*;
use super::point::*;

///
/// A drawing surface provides the filling operations needed to paint a scene of shapes
///
/// Surfaces are raster targets: they report their size in pixels and know how
/// to fill a disc and a closed polygon with a solid colour. This is the whole
/// contract the renderer relies upon, so anything from a pixel buffer to a
/// window backed by a GPU can act as a surface.
///
/// `fill_polygon` is passed the outline points in edge order and is expected
/// to close the outline from the last point back to the first before filling
/// with its default winding rule.
///
pub trait DrawingSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_disc(&mut self, center: ShapePoint, radius: f32, color: Color);
    fn fill_polygon(&mut self, points: &[ShapePoint], color: Color);
}

///
/// The operations that can be performed against a drawing surface
///
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Fills a disc with the given centre and radius
    FillDisc(ShapePoint, f32, Color),

    /// Fills the closed outline described by the given points
    FillPolygon(Vec<ShapePoint>, Color),
}

///
/// A surface that stores the operations performed against it instead of painting anything
///
/// This doesn't provide a means to actually render a scene, but rather a way
/// to capture how it would be drawn so the operations can be passed on to a
/// renderer elsewhere (or inspected by tests).
///
pub struct RecordingSurface {
    /// Size of the surface being described
    width:  f32,
    height: f32,

    /// The operations performed against this surface, in order
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    ///
    /// Creates a recording surface of the given pixel size
    ///
    pub fn new(width: f32, height: f32) -> RecordingSurface {
        RecordingSurface {
            width:  width,
            height: height,
            ops:    vec![],
        }
    }

    ///
    /// The operations recorded so far, in the order they were performed
    ///
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl DrawingSurface for RecordingSurface {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    fn fill_disc(&mut self, center: ShapePoint, radius: f32, color: Color) {
        self.ops.push(SurfaceOp::FillDisc(center, radius, color));
    }

    #[inline]
    fn fill_polygon(&mut self, points: &[ShapePoint], color: Color) {
        self.ops.push(SurfaceOp::FillPolygon(points.to_vec(), color));
    }
}
