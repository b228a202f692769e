/// The serde-backed configuration model.
pub mod model;
