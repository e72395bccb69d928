pub mod depth_limits;
pub mod dragon;
pub mod koch;
pub mod sierpinski;
