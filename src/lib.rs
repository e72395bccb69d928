mod core;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL};
pub use crate::core::actions::colourize::colourize::{colourize, colourize_normalized, ColourizeError};
pub use crate::core::actions::colourize::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_fractal::generate_fractal::{generate_fractal, Execution};
pub use crate::core::actions::normalize_field::{normalize, CONSTANT_FIELD_VALUE};
pub use crate::core::actions::render::{render, render_cancelable, RenderConfig, RenderError, Rendered};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_kinds::{FractalFamily, FractalKinds};
pub use crate::core::data::fractal_params::{
    ChaosParams, CurveParams, EscapeTimeParams, FractalParams, JuliaParams, NewtonParams,
    Polynomial, SierpinskiMethod, SierpinskiParams,
};
pub use crate::core::data::fractal_request::FractalRequest;
pub use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_dims::{RasterDims, RasterDimsError};
pub use crate::core::data::rgb_image::{RgbImage, RgbImageError};
pub use crate::core::data::scalar_field::{ScalarField, ScalarFieldError};
pub use crate::core::errors::{FractalError, InvalidRequestError};
pub use crate::core::fractals::chaos::barnsley_fern::{fern_points, fit_to_raster};
pub use crate::core::fractals::chaos::rng::seeded_rng;
pub use crate::core::fractals::chaos::sierpinski_chaos::{sierpinski_chaos_game, sierpinski_chaos_points};
pub use crate::core::fractals::curves::depth_limits::{max_depth, primitive_count, MAX_PRIMITIVES};
pub use crate::core::fractals::curves::dragon::{dragon_curve, dragon_points};
pub use crate::core::fractals::curves::koch::{koch_curve, koch_snowflake};
pub use crate::core::fractals::curves::sierpinski::{sierpinski_subdivision, sierpinski_triangles};
pub use crate::core::fractals::escape_time::newton::{decode_root_index, NON_CONVERGED_VALUE};
pub use crate::core::geometry::path::{GeometricPath, Triangle};
pub use crate::core::geometry::vec2::Vec2;
pub use crate::core::palettes::errors::PaletteError;
pub use crate::core::palettes::factory::palette_factory;
pub use crate::core::palettes::kinds::PaletteKind;
pub use crate::core::palettes::ramp::{ColourStop, Palette};
pub use crate::core::raster::rasterizer::{
    rasterize_path, rasterize_points, rasterize_triangles, BACKGROUND, DRAWN, POINT_STAMP_SIDE,
};
pub use crate::core::util::coordinate_grid::{pixel_to_plane_coords, CoordinateGrid, PixelToPlaneCoordsError};
