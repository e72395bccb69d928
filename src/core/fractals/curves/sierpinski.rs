use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::data::fractal_params::SierpinskiParams;
use crate::core::data::raster_dims::RasterDims;
use crate::core::errors::FractalError;
use crate::core::fractals::canvas_center;
use crate::core::fractals::curves::depth_limits::check_depth;
use crate::core::geometry::path::Triangle;

/// Splits `triangle` into its three corner sub-triangles, dropping the middle
/// one formed by the edge midpoints.
#[must_use]
pub fn subdivide(triangle: &Triangle) -> [Triangle; 3] {
    let [a, b, c] = triangle.vertices;
    let ab = a.midpoint(b);
    let bc = b.midpoint(c);
    let ca = c.midpoint(a);

    [
        Triangle::new(a, ab, ca),
        Triangle::new(ab, b, bc),
        Triangle::new(ca, bc, c),
    ]
}

/// `3^depth` triangles covering `(3/4)^depth` of `base`.
pub fn sierpinski_subdivision(base: Triangle, depth: u32) -> Result<Vec<Triangle>, FractalError> {
    check_depth(FractalKinds::Sierpinski, depth)?;

    let mut triangles = Vec::with_capacity(3usize.pow(depth));
    let mut stack = vec![(base, depth)];

    while let Some((triangle, level)) = stack.pop() {
        if level == 0 {
            triangles.push(triangle);
            continue;
        }

        for child in subdivide(&triangle).into_iter().rev() {
            stack.push((child, level - 1));
        }
    }

    Ok(triangles)
}

/// Recursive Sierpinski triangle of side `size`, centred on the canvas centre
/// plus `origin`.
pub fn sierpinski_triangles(
    dims: RasterDims,
    params: &SierpinskiParams,
) -> Result<Vec<Triangle>, FractalError> {
    let base = Triangle::equilateral(canvas_center(dims) + params.origin, params.size);
    sierpinski_subdivision(base, params.depth)
}
