mod make_box;
mod make_element;
mod make_logical_volume;
mod make_material;
mod make_tube;

pub use make_box::MakeBox;
pub use make_element::MakeElement;
pub use make_logical_volume::MakeLogicalVolume;
pub use make_material::MakeMaterial;
pub use make_tube::MakeTube;
