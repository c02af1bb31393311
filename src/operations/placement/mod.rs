mod check_overlaps;
mod place_volume;

pub use check_overlaps::{CheckOverlaps, DEFAULT_RESOLUTION};
pub use place_volume::PlaceVolume;
