use crate::core::actions::cancellation::{poll_every_interval, CancelToken, Cancelled};
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;
use crate::core::data::scalar_field::ScalarField;
use crate::core::geometry::path::{GeometricPath, Triangle};
use crate::core::geometry::vec2::Vec2;

/// Intensity of a drawn pixel.
pub const DRAWN: f64 = 255.0;
/// Intensity of an untouched pixel.
pub const BACKGROUND: f64 = 0.0;

/// Stamp side used for chaos-game point clouds drawn as 3x3 squares.
pub const POINT_STAMP_SIDE: u32 = 3;

/// Drawing surface backed by a [`ScalarField`]. Everything outside the raster
/// is clipped silently.
#[derive(Debug, Clone)]
pub struct Canvas {
    field: ScalarField,
}

impl Canvas {
    #[must_use]
    pub fn new(dims: RasterDims) -> Self {
        Self {
            field: ScalarField::new(dims),
        }
    }

    #[must_use]
    pub fn dims(&self) -> RasterDims {
        self.field.dims()
    }

    #[must_use]
    pub fn into_field(self) -> ScalarField {
        self.field
    }

    pub fn plot(&mut self, pixel: Point) {
        if let Some(index) = self.field.dims().index_of(pixel) {
            self.field.data_mut()[index] = DRAWN;
        }
    }

    /// Square of side `side` around `center`; even sides extend one pixel
    /// further right and down.
    pub fn stamp(&mut self, center: Point, side: u32) {
        let side = side.max(1) as i32;
        let before = (side - 1) / 2;
        let after = side / 2;

        for dy in -before..=after {
            for dx in -before..=after {
                self.plot(Point {
                    x: center.x.saturating_add(dx),
                    y: center.y.saturating_add(dy),
                });
            }
        }
    }

    /// Bresenham line from `a` to `b`, each pixel stamped with side
    /// `line_width`.
    pub fn draw_line(&mut self, a: Vec2, b: Vec2, line_width: u32) {
        let margin = f64::from(line_width);
        let Some((a, b)) = clip_segment(a, b, self.dims(), margin) else {
            return;
        };

        let (mut x, mut y) = (a.x.round() as i64, a.y.round() as i64);
        let (x_end, y_end) = (b.x.round() as i64, b.y.round() as i64);
        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let step_x = if x < x_end { 1 } else { -1 };
        let step_y = if y < y_end { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.stamp(Point { x: x as i32, y: y as i32 }, line_width);

            if x == x_end && y == y_end {
                break;
            }

            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Fills every pixel whose centre lies in `triangle`, then marks the
    /// vertices so sub-pixel triangles stay visible.
    pub fn fill_triangle(&mut self, triangle: &Triangle) {
        let dims = self.dims();
        let [a, b, c] = triangle.vertices;

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0);
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0);
        let max_x = a.x.max(b.x).max(c.x).ceil().min(f64::from(dims.width() - 1));
        let max_y = a.y.max(b.y).max(c.y).ceil().min(f64::from(dims.height() - 1));

        if min_x <= max_x && min_y <= max_y {
            for y in min_y as i32..=max_y as i32 {
                for x in min_x as i32..=max_x as i32 {
                    let centre = Vec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                    if triangle.contains(centre) {
                        self.plot(Point { x, y });
                    }
                }
            }
        }

        for vertex in triangle.vertices {
            if let Some(pixel) = to_pixel(vertex) {
                self.plot(pixel);
            }
        }
    }
}

/// Pixel containing `position`, or `None` when it cannot be addressed.
fn to_pixel(position: Vec2) -> Option<Point> {
    let x = position.x.floor();
    let y = position.y.floor();
    let range = f64::from(i32::MIN)..=f64::from(i32::MAX);

    if range.contains(&x) && range.contains(&y) {
        Some(Point {
            x: x as i32,
            y: y as i32,
        })
    } else {
        None
    }
}

/// Liang-Barsky clip of segment `a`-`b` to the raster grown by `margin` on
/// every side. `None` when nothing of the segment remains.
fn clip_segment(a: Vec2, b: Vec2, dims: RasterDims, margin: f64) -> Option<(Vec2, Vec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }

    let x_min = -margin;
    let y_min = -margin;
    let x_max = f64::from(dims.width() - 1) + margin;
    let y_max = f64::from(dims.height() - 1) + margin;
    let delta = b - a;

    let mut t_enter = 0.0f64;
    let mut t_exit = 1.0f64;

    for (p, q) in [
        (-delta.x, a.x - x_min),
        (delta.x, x_max - a.x),
        (-delta.y, a.y - y_min),
        (delta.y, y_max - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }

        if t_enter > t_exit {
            return None;
        }
    }

    Some((a.lerp(b, t_enter), a.lerp(b, t_exit)))
}

/// Draws every segment of `path`, polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL`](crate::core::actions::cancellation::CANCEL_CHECK_INTERVAL)
/// segments.
pub fn rasterize_path<C: CancelToken + ?Sized>(
    dims: RasterDims,
    path: &GeometricPath,
    line_width: u32,
    cancel: &C,
) -> Result<ScalarField, Cancelled> {
    let mut canvas = Canvas::new(dims);

    for (index, (a, b)) in path.segments().enumerate() {
        poll_every_interval(index, cancel)?;
        canvas.draw_line(a, b, line_width);
    }

    Ok(canvas.into_field())
}

/// Fills every triangle, polling `cancel` every interval of triangles.
pub fn rasterize_triangles<C: CancelToken + ?Sized>(
    dims: RasterDims,
    triangles: &[Triangle],
    cancel: &C,
) -> Result<ScalarField, Cancelled> {
    let mut canvas = Canvas::new(dims);

    for (index, triangle) in triangles.iter().enumerate() {
        poll_every_interval(index, cancel)?;
        canvas.fill_triangle(triangle);
    }

    Ok(canvas.into_field())
}

/// Stamps a square of side `side` at every point, polling `cancel` every
/// interval of points.
pub fn rasterize_points<C: CancelToken + ?Sized>(
    dims: RasterDims,
    points: &[Vec2],
    side: u32,
    cancel: &C,
) -> Result<ScalarField, Cancelled> {
    let mut canvas = Canvas::new(dims);

    for (index, &point) in points.iter().enumerate() {
        poll_every_interval(index, cancel)?;
        if let Some(pixel) = to_pixel(point) {
            canvas.stamp(pixel, side);
        }
    }

    Ok(canvas.into_field())
}
