//! Errors for the constant agronomy tables (crop requirements and
//! fertilizer compositions).
//!
//! This module defines [`AgronomyError`], used by table construction and
//! lookup. Lookup failures are exact-match misses: an unknown crop or
//! fertilizer name is an error, never a default.
//!
//! ## Conventions
//! - Crop and fertilizer names match **exactly** (case and spacing); no
//!   normalization is attempted at this layer.
//! - Requirement bands are kg/ha; composition values are mass fractions
//!   in `[0, 1]`.

/// Result alias for table construction and lookup paths that may produce
/// [`AgronomyError`].
pub type AgroResult<T> = Result<T, AgronomyError>;

/// Unified error type for the agronomy tables.
///
/// Covers exact-match lookup failures and construction-time validation of
/// requirement bands and composition fractions.
#[derive(Debug, Clone, PartialEq)]
pub enum AgronomyError {
    // ---- Lookup ----
    /// Crop name absent from the requirement table.
    UnknownCrop { crop: String },

    /// Fertilizer name absent from the composition catalog.
    UnknownFertilizer { name: String },

    // ---- Table construction ----
    /// Two requirement entries share the same crop name.
    DuplicateCrop { crop: String },

    /// Two catalog entries share the same fertilizer name.
    DuplicateFertilizer { name: String },

    /// A catalog must contain at least one fertilizer.
    EmptyCatalog,

    /// A requirement band must be finite with 0 <= min <= max.
    InvalidBand { nutrient: &'static str, min: f64, max: f64, reason: &'static str },

    /// A composition fraction must be finite and within [0, 1].
    InvalidFraction { fertilizer: String, nutrient: &'static str, value: f64, reason: &'static str },
}

impl std::error::Error for AgronomyError {}

impl std::fmt::Display for AgronomyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Lookup ----
            AgronomyError::UnknownCrop { crop } => {
                write!(f, "No nutrient requirement entry for crop '{crop}'")
            }
            AgronomyError::UnknownFertilizer { name } => {
                write!(f, "No composition entry for fertilizer '{name}'")
            }
            // ---- Table construction ----
            AgronomyError::DuplicateCrop { crop } => {
                write!(f, "Duplicate requirement entry for crop '{crop}'")
            }
            AgronomyError::DuplicateFertilizer { name } => {
                write!(f, "Duplicate catalog entry for fertilizer '{name}'")
            }
            AgronomyError::EmptyCatalog => {
                write!(f, "Fertilizer catalog must contain at least one entry")
            }
            AgronomyError::InvalidBand { nutrient, min, max, reason } => {
                write!(f, "Invalid {nutrient} requirement band [{min}, {max}]: {reason}")
            }
            AgronomyError::InvalidFraction { fertilizer, nutrient, value, reason } => {
                write!(
                    f,
                    "Invalid {nutrient} fraction {value} for fertilizer '{fertilizer}': {reason}"
                )
            }
        }
    }
}
