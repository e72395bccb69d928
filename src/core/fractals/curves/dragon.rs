use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::data::fractal_params::CurveParams;
use crate::core::data::raster_dims::RasterDims;
use crate::core::errors::FractalError;
use crate::core::fractals::canvas_center;
use crate::core::fractals::curves::depth_limits::check_depth;
use crate::core::geometry::affine::Affine2;
use crate::core::geometry::path::GeometricPath;
use crate::core::geometry::vec2::Vec2;

/// Quarter turn of `point` about `pivot`. Exact for integer coordinates.
fn quarter_turn(point: Vec2, pivot: Vec2) -> Vec2 {
    let offset = point - pivot;
    pivot + Vec2::new(-offset.y, offset.x)
}

/// Unscaled dragon curve starting with the unit segment `(0,0)-(1,0)`:
/// `2^depth + 1` points.
///
/// Each fold appends the existing points, last to first, turned a quarter
/// turn about the current end point.
pub fn dragon_points(depth: u32) -> Result<Vec<Vec2>, FractalError> {
    check_depth(FractalKinds::DragonCurve, depth)?;

    let mut points = Vec::with_capacity(2usize.pow(depth) + 1);
    points.push(Vec2::ZERO);
    points.push(Vec2::new(1.0, 0.0));

    for _ in 0..depth {
        let pivot = points[points.len() - 1];
        let folded: Vec<Vec2> = points[..points.len() - 1]
            .iter()
            .rev()
            .map(|&point| quarter_turn(point, pivot))
            .collect();
        points.extend(folded);
    }

    Ok(points)
}

/// Dragon curve scaled so its larger extent equals `size`, centred on the
/// canvas centre plus `origin` and turned `rotation_degrees` about that centre.
pub fn dragon_curve(dims: RasterDims, params: &CurveParams) -> Result<GeometricPath, FractalError> {
    let path = GeometricPath::open(dragon_points(params.depth)?);

    let Some((min, max)) = path.bounds() else {
        return Ok(path);
    };
    let extent = (max.x - min.x).max(max.y - min.y);
    let scale = params.size / extent;
    let center = canvas_center(dims) + params.origin;

    let placement = Affine2::rotation_about(center, params.rotation_degrees.to_radians())
        .compose(&Affine2::translation(center))
        .compose(&Affine2::scale(scale, scale))
        .compose(&Affine2::translation(Vec2::ZERO - min.midpoint(max)));

    Ok(path.transformed(&placement))
}
