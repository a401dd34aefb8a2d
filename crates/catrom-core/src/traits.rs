use crate::error::Result;

/// Validate structural integrity of a curve or its configuration.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
