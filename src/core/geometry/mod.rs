pub mod affine;
pub mod path;
pub mod vec2;
