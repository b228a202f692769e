pub mod linear;
pub mod non_linear;
pub mod rotate;
