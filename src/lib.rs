pub mod detector;
pub mod error;
pub mod geometry;
pub mod material;
pub mod math;
pub mod messenger;
pub mod operations;
pub mod units;
pub mod volume;

pub use detector::{DetectorConstruction, GeometryTree, TargetConfig, TargetDetector};
pub use error::{LaminaError, Result};
