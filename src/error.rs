use thiserror::Error;

/// Top-level error type for the Lamina geometry crate.
#[derive(Debug, Error)]
pub enum LaminaError {
    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors raised while defining isotopes, elements and materials.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("material {0:?} not found in the catalogue")]
    NotFound(String),

    #[error("{kind} {name:?} is already defined")]
    DuplicateName { kind: &'static str, name: String },

    #[error("invalid isotope {name:?}: {reason}")]
    InvalidIsotope { name: String, reason: String },

    #[error("{kind} {name:?} declares {declared} components but {added} were added")]
    ComponentCount {
        kind: &'static str,
        name: String,
        declared: usize,
        added: usize,
    },

    #[error("{kind} {name:?}: fractions sum to {sum}, expected 1")]
    FractionSum {
        kind: &'static str,
        name: String,
        sum: f64,
    },

    #[error("element {name:?} mixes isotopes of different atomic numbers")]
    MixedAtomicNumber { name: String },

    #[error("material {name:?} mixes atom counts and mass fractions")]
    MixedComposition { name: String },

    #[error("material {name:?} has non-positive density {density}")]
    InvalidDensity { name: String, density: f64 },

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors related to solid shapes.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate solid {name:?}: {reason}")]
    Degenerate { name: String, reason: String },

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors raised while placing volumes in the hierarchy.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("world volume already placed as {existing:?}; cannot place {name:?} without a mother")]
    SecondWorld { existing: String, name: String },

    #[error("volume {daughter:?} overlaps with its mother {mother:?} at local point {point:?}")]
    ProtrudesMother {
        daughter: String,
        mother: String,
        point: [f64; 3],
    },

    #[error("volume {daughter:?} overlaps with sister {sister:?} at local point {point:?}")]
    OverlapsSister {
        daughter: String,
        sister: String,
        point: [f64; 3],
    },

    #[error("logical volume {0:?} cannot be placed inside itself")]
    SelfContained(String),

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors raised when applying parameter commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command not found: {0:?}")]
    UnknownCommand(String),

    #[error("command {0:?} is already declared")]
    DuplicateCommand(String),

    #[error("command {0:?} requires a value")]
    MissingValue(String),

    #[error("invalid value {value:?} for {command:?}")]
    InvalidValue { command: String, value: String },

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("unit {unit:?} is not a {expected} unit")]
    UnitCategory { unit: String, expected: &'static str },
}

/// Convenience type alias for results using [`LaminaError`].
pub type Result<T> = std::result::Result<T, LaminaError>;
