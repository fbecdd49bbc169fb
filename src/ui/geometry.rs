// src/ui/geometry.rs
//! Triangle geometry and hit regions
//!
//! A [`TrianglePath`] is a closed polygon of three vertices. From it we derive
//! an axis-aligned bounding rectangle and a [`HitRegion`] that answers
//! point-containment queries for integer pixel coordinates.
//!
//! Bounding rectangles are half-open: a triangle with vertices at x = 0 and
//! x = 100 covers pixel columns 0 through 99. Inside the rectangle, points on
//! the triangle's edges count as contained.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Closed three-point polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrianglePath {
    vertices: [Point; 3],
}

impl Default for TrianglePath {
    fn default() -> Self {
        Self {
            vertices: [Point::zero(); 3],
        }
    }
}

impl TrianglePath {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Upper-left half of a `size` rectangle at `origin`.
    ///
    /// ```text
    /// origin ------------> (origin.x + w, origin.y)
    ///   ^                 /
    ///   |              /
    ///   |           /
    ///   |        /
    ///   |     /
    ///   |  /
    /// (origin.x, origin.y + h)
    /// ```
    pub fn upper_left(origin: Point, size: Size) -> Self {
        let w = size.width as i32;
        let h = size.height as i32;
        Self::new(
            origin,
            Point::new(origin.x + w, origin.y),
            Point::new(origin.x, origin.y + h),
        )
    }

    /// Lower-right half of a `size` rectangle at `origin`.
    ///
    /// Starts at the bottom-left corner, runs along the bottom edge and up the
    /// right edge. Shares the hypotenuse with [`upper_left`](Self::upper_left).
    pub fn lower_right(origin: Point, size: Size) -> Self {
        let w = size.width as i32;
        let h = size.height as i32;
        Self::new(
            Point::new(origin.x, origin.y + h),
            Point::new(origin.x + w, origin.y + h),
            Point::new(origin.x + w, origin.y),
        )
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// Half-open axis-aligned bounds spanning the extreme vertex coordinates.
    pub fn bounding_box(&self) -> Rectangle {
        let [a, b, c] = self.vertices;
        let min = a.component_min(b).component_min(c);
        let max = a.component_max(b).component_max(c);
        Rectangle::new(
            min,
            Size::new((max.x - min.x) as u32, (max.y - min.y) as u32),
        )
    }

    /// Edge-inclusive containment, independent of vertex winding.
    pub fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.vertices;
        let d1 = edge(a, b, point);
        let d2 = edge(b, c, point);
        let d3 = edge(c, a, point);

        let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
        let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
        !(has_neg && has_pos)
    }
}

/// Signed area of the parallelogram spanned by `a -> b` and `a -> p`.
fn edge(a: Point, b: Point, p: Point) -> i64 {
    let abx = (b.x - a.x) as i64;
    let aby = (b.y - a.y) as i64;
    let apx = (p.x - a.x) as i64;
    let apy = (p.y - a.y) as i64;
    abx * apy - aby * apx
}

/// Containment-testable area: a triangle restricted to a clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    path: TrianglePath,
    clip: Rectangle,
}

impl Default for HitRegion {
    fn default() -> Self {
        Self {
            path: TrianglePath::default(),
            clip: Rectangle::zero(),
        }
    }
}

impl HitRegion {
    pub fn new(path: TrianglePath, clip: Rectangle) -> Self {
        Self { path, clip }
    }

    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    pub fn contains(&self, point: Point) -> bool {
        self.clip.contains(point) && self.path.contains(point)
    }
}

/// Polygon, bounds and hit region of one triangular half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleGeometry {
    pub path: TrianglePath,
    pub bounds: Rectangle,
    pub region: HitRegion,
}

impl Default for TriangleGeometry {
    fn default() -> Self {
        Self {
            path: TrianglePath::default(),
            bounds: Rectangle::zero(),
            region: HitRegion::default(),
        }
    }
}

impl TriangleGeometry {
    pub fn from_path(path: TrianglePath) -> Self {
        let bounds = path.bounding_box();
        Self {
            path,
            bounds,
            region: HitRegion::new(path, bounds),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.region.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (TriangleGeometry, TriangleGeometry) {
        let size = Size::new(100, 100);
        (
            TriangleGeometry::from_path(TrianglePath::upper_left(Point::zero(), size)),
            TriangleGeometry::from_path(TrianglePath::lower_right(Point::zero(), size)),
        )
    }

    #[test]
    fn test_vertices_follow_padding_origin() {
        let origin = Point::new(8, 4);
        let left = TrianglePath::upper_left(origin, Size::new(60, 40));
        assert_eq!(
            left.vertices(),
            [Point::new(8, 4), Point::new(68, 4), Point::new(8, 44)]
        );

        let right = TrianglePath::lower_right(origin, Size::new(50, 30));
        assert_eq!(
            right.vertices(),
            [Point::new(8, 34), Point::new(58, 34), Point::new(58, 4)]
        );
    }

    #[test]
    fn test_bounding_box_spans_extremes() {
        let path = TrianglePath::lower_right(Point::new(10, 20), Size::new(30, 40));
        assert_eq!(
            path.bounding_box(),
            Rectangle::new(Point::new(10, 20), Size::new(30, 40))
        );
    }

    #[test]
    fn test_halves_are_reflections_across_diagonal() {
        let (left, right) = square();
        // (x, y) -> (w - y, h - x) maps the anti-diagonal onto itself
        let mut reflected = left.path.vertices().map(|p| Point::new(100 - p.y, 100 - p.x));
        let mut expected = right.path.vertices();
        reflected.sort_by_key(|p| (p.x, p.y));
        expected.sort_by_key(|p| (p.x, p.y));
        assert_eq!(reflected, expected);
    }

    #[test]
    fn test_halves_tile_the_rectangle() {
        let (left, right) = square();
        for y in 0..100 {
            for x in 0..100 {
                let p = Point::new(x, y);
                let in_left = left.contains(p);
                let in_right = right.contains(p);
                if x + y == 100 {
                    assert!(in_left && in_right, "diagonal {p:?} should be shared");
                } else {
                    assert!(in_left ^ in_right, "{p:?} covered {in_left}/{in_right}");
                }
            }
        }
    }

    #[test]
    fn test_points_outside_bounds_are_not_contained() {
        let (left, right) = square();
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(100, 100),
            Point::new(100, 0),
            Point::new(500, 500),
            Point::new(-50, -50),
        ] {
            assert!(!left.contains(p), "{p:?}");
            assert!(!right.contains(p), "{p:?}");
        }
    }

    #[test]
    fn test_empty_geometry_contains_nothing() {
        let geometry = TriangleGeometry::default();
        assert!(!geometry.contains(Point::zero()));
        assert!(!HitRegion::default().contains(Point::new(1, 1)));

        let flat = TriangleGeometry::from_path(TrianglePath::upper_left(
            Point::zero(),
            Size::new(0, 50),
        ));
        assert!(!flat.contains(Point::new(0, 10)));
    }

    #[test]
    fn test_contains_ignores_winding() {
        let cw = TrianglePath::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        let ccw = TrianglePath::new(Point::new(0, 0), Point::new(0, 10), Point::new(10, 0));
        for p in [Point::new(2, 2), Point::new(5, 5), Point::new(8, 8)] {
            assert_eq!(cw.contains(p), ccw.contains(p));
        }
        assert!(cw.contains(Point::new(2, 2)));
        assert!(!cw.contains(Point::new(8, 8)));
    }
}
