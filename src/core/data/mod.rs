pub mod colour;
pub mod complex;
pub mod fractal_kinds;
pub mod fractal_params;
pub mod fractal_request;
pub mod plane_region;
pub mod point;
pub mod raster_dims;
pub mod rgb_image;
pub mod scalar_field;
