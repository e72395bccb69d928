use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::data::fractal_params::CurveParams;
use crate::core::data::raster_dims::RasterDims;
use crate::core::errors::FractalError;
use crate::core::fractals::curves::depth_limits::check_depth;
use crate::core::fractals::canvas_center;
use crate::core::geometry::path::{GeometricPath, Triangle};
use crate::core::geometry::vec2::Vec2;
use std::f64::consts::FRAC_PI_3;

/// Koch curve from `a` to `b`: `4^depth + 1` points, endpoints included.
///
/// Each segment is replaced by its trisection points and an apex formed by
/// turning the middle third 60 degrees about the first trisection point. In
/// y-down canvas space the apex sits to the left of the direction of travel,
/// so a clockwise polygon grows outward.
pub fn koch_curve(a: Vec2, b: Vec2, depth: u32) -> Result<Vec<Vec2>, FractalError> {
    check_depth(FractalKinds::KochSnowflake, depth)?;

    let mut points = Vec::with_capacity(4usize.pow(depth) + 1);
    let mut stack = vec![(a, b, depth)];

    while let Some((start, end, level)) = stack.pop() {
        if level == 0 {
            points.push(start);
            continue;
        }

        let first = start.lerp(end, 1.0 / 3.0);
        let second = start.lerp(end, 2.0 / 3.0);
        let apex = first + (second - first).rotated(-FRAC_PI_3);

        // Reverse order so the first sub-segment is popped first.
        stack.push((second, end, level - 1));
        stack.push((apex, second, level - 1));
        stack.push((first, apex, level - 1));
        stack.push((start, first, level - 1));
    }

    points.push(b);
    Ok(points)
}

/// Closed snowflake of `3 * 4^depth` vertices around an equilateral triangle
/// of side `size`, centred on the canvas centre plus `origin` and turned
/// `rotation_degrees` about its centroid.
pub fn koch_snowflake(dims: RasterDims, params: &CurveParams) -> Result<GeometricPath, FractalError> {
    check_depth(FractalKinds::KochSnowflake, params.depth)?;

    let center = canvas_center(dims) + params.origin;
    let rotation = params.rotation_degrees.to_radians();
    let corners = Triangle::equilateral(center, params.size)
        .vertices
        .map(|corner| corner.rotated_about(center, rotation));

    let mut points = Vec::with_capacity(3 * 4usize.pow(params.depth));
    for side in 0..3 {
        let mut curve = koch_curve(corners[side], corners[(side + 1) % 3], params.depth)?;
        curve.pop();
        points.extend(curve);
    }

    Ok(GeometricPath::closed(points))
}
