mod bounding_box;
mod daughters;
mod mass;

pub use bounding_box::BoundingBox;
pub use daughters::Daughters;
pub use mass::Mass;
