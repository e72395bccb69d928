use crate::core::geometry::affine::Affine2;
use crate::core::geometry::vec2::Vec2;

/// Ordered vertices of a polyline. A closed path implicitly joins its last
/// vertex back to the first; the closing vertex is not stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometricPath {
    points: Vec<Vec2>,
    closed: bool,
}

impl GeometricPath {
    #[must_use]
    pub fn open(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    #[must_use]
    pub fn closed(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, including the closing segment of a closed path.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 1 => Some((last, first)),
            _ => None,
        };

        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        self.points.iter().fold(None, |acc, &p| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )),
        })
    }

    #[must_use]
    pub fn transformed(&self, transform: &Affine2) -> Self {
        Self {
            points: self.points.iter().map(|&p| transform.apply(p)).collect(),
            closed: self.closed,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Equilateral triangle with side `size` centred (by centroid) on `center`,
    /// flat edge at the top in y-down canvas space.
    #[must_use]
    pub fn equilateral(center: Vec2, size: f64) -> Self {
        let height = size * 3f64.sqrt() / 2.0;

        Self::new(
            Vec2::new(center.x - size / 2.0, center.y - height / 3.0),
            Vec2::new(center.x + size / 2.0, center.y - height / 3.0),
            Vec2::new(center.x, center.y + 2.0 * height / 3.0),
        )
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        ((b - a).cross(c - a) / 2.0).abs()
    }

    #[must_use]
    pub fn centroid(&self) -> Vec2 {
        let [a, b, c] = self.vertices;
        Vec2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Inclusive point-in-triangle test, independent of vertex winding.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        const EPSILON: f64 = 1e-9;

        let [a, b, c] = self.vertices;
        let d1 = (b - a).cross(point - a);
        let d2 = (c - b).cross(point - b);
        let d3 = (a - c).cross(point - c);

        let has_negative = d1 < -EPSILON || d2 < -EPSILON || d3 < -EPSILON;
        let has_positive = d1 > EPSILON || d2 > EPSILON || d3 > EPSILON;

        !(has_negative && has_positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_path_segments() {
        let path = GeometricPath::open(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ]);

        assert_eq!(path.segment_count(), 2);
        assert_eq!(path.segments().count(), 2);
    }

    #[test]
    fn test_closed_path_adds_closing_segment() {
        let path = GeometricPath::closed(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ]);
        let segments: Vec<(Vec2, Vec2)> = path.segments().collect();

        assert_eq!(path.segment_count(), 3);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], (Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_paths_have_no_segments() {
        assert_eq!(GeometricPath::closed(vec![]).segments().count(), 0);
        assert_eq!(GeometricPath::closed(vec![Vec2::ZERO]).segments().count(), 0);
        assert_eq!(GeometricPath::closed(vec![Vec2::ZERO]).segment_count(), 0);
    }

    #[test]
    fn test_bounds() {
        let path = GeometricPath::open(vec![
            Vec2::new(2.0, -1.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.5, 0.5),
        ]);

        assert_eq!(
            path.bounds(),
            Some((Vec2::new(-3.0, -1.0), Vec2::new(2.0, 4.0)))
        );
        assert_eq!(GeometricPath::default().bounds(), None);
    }

    #[test]
    fn test_equilateral_triangle_is_centred() {
        let triangle = Triangle::equilateral(Vec2::new(100.0, 50.0), 30.0);
        let centroid = triangle.centroid();

        assert!((centroid.x - 100.0).abs() < 1e-9);
        assert!((centroid.y - 50.0).abs() < 1e-9);
        assert!((triangle.area() - 30.0 * 30.0 * 3f64.sqrt() / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_contains() {
        let triangle = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        );

        assert!(triangle.contains(Vec2::new(1.0, 1.0)));
        assert!(triangle.contains(Vec2::new(2.0, 2.0)));
        assert!(triangle.contains(Vec2::new(0.0, 0.0)));
        assert!(!triangle.contains(Vec2::new(3.0, 3.0)));
        assert!(!triangle.contains(Vec2::new(-0.1, 1.0)));
    }
}
