pub mod barnsley_fern;
pub mod rng;
pub mod sierpinski_chaos;
