use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error(
        "Insufficient control points: {} curve needs at least {required}, got {actual}",
        curve_kind(.closed)
    )]
    InsufficientPoints {
        required: usize,
        actual: usize,
        closed: bool,
    },

    #[error("Non-finite control point at index {index}")]
    NonFinitePoint { index: usize },

    #[error("Invalid parameter: {name} = {value} is outside its domain")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid arc length divisions: {0} (must be at least 1)")]
    InvalidDivisions(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid arc length table: {0}")]
    InvalidArcLengthTable(String),
}

fn curve_kind(closed: &bool) -> &'static str {
    if *closed {
        "closed"
    } else {
        "open"
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
