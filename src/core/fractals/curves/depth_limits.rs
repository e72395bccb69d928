use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::errors::FractalError;

/// Ceiling on segments or triangles a recursive generator may emit.
pub const MAX_PRIMITIVES: u64 = 1 << 18;

/// `3 * 4^8` segments.
pub const KOCH_MAX_DEPTH: u32 = 8;
/// `3^11` triangles.
pub const SIERPINSKI_MAX_DEPTH: u32 = 11;
/// `2^18` segments.
pub const DRAGON_MAX_DEPTH: u32 = 18;

/// Segments or triangles produced by `kind` at `depth`, or `None` for kinds
/// that do not subdivide or counts that overflow `u64`.
#[must_use]
pub fn primitive_count(kind: FractalKinds, depth: u32) -> Option<u64> {
    match kind {
        FractalKinds::KochSnowflake => 4u64.checked_pow(depth)?.checked_mul(3),
        FractalKinds::Sierpinski => 3u64.checked_pow(depth),
        FractalKinds::DragonCurve => 2u64.checked_pow(depth),
        _ => None,
    }
}

#[must_use]
pub fn max_depth(kind: FractalKinds) -> Option<u32> {
    match kind {
        FractalKinds::KochSnowflake => Some(KOCH_MAX_DEPTH),
        FractalKinds::Sierpinski => Some(SIERPINSKI_MAX_DEPTH),
        FractalKinds::DragonCurve => Some(DRAGON_MAX_DEPTH),
        _ => None,
    }
}

/// Fails with [`FractalError::DepthOverflow`] when `depth` exceeds the
/// maximum for `kind`.
pub fn check_depth(kind: FractalKinds, depth: u32) -> Result<(), FractalError> {
    match max_depth(kind) {
        Some(max_depth) if depth > max_depth => Err(FractalError::DepthOverflow {
            kind,
            depth,
            max_depth,
        }),
        _ => Ok(()),
    }
}
