//! Errors for the fertilizer-mix optimization engine.
//!
//! Every failure mode of one `optimize` call is a value of [`MixError`];
//! nothing panics through the engine boundary. [`MixError::reason`] maps
//! the full taxonomy onto the small, fixed set of reporting strings the
//! presentation layer consumes.
use crate::agronomy::AgronomyError;
use good_lp::ResolutionError;

/// Result alias for engine operations that may produce [`MixError`].
pub type MixResult<T> = Result<T, MixError>;

/// Unified error type for fertilizer-mix optimization.
///
/// Covers request validation (economics and the cost map), crop
/// resolution, solver status normalization, and post-solve solution
/// validation. Implements `Display`/`Error` and, behind the
/// `python-bindings` feature, converts to a Python `ValueError`.
#[derive(Debug, Clone, PartialEq)]
pub enum MixError {
    // ---- Crop resolution ----
    /// Crop name absent from the requirement table. No LP is built.
    CropNotFound { crop: String },

    // ---- Request validation ----
    /// Expected yield must be finite and >= 0.
    InvalidYield { value: f64, reason: &'static str },

    /// Selling price must be finite and >= 0.
    InvalidPrice { value: f64, reason: &'static str },

    /// A supplied cost must be finite and >= 0.
    InvalidCost { fertilizer: String, value: f64, reason: &'static str },

    /// Every catalog fertilizer must be priced.
    MissingCost { fertilizer: String },

    /// The cost map names a fertilizer outside the catalog.
    UnknownCostEntry { name: String },

    /// The application floor must be finite and >= 0.
    InvalidApplicationFloor { value: f64, reason: &'static str },

    // ---- Solver status ----
    /// The solver found no bounded optimum (infeasible or unbounded).
    NoOptimalSolution { status: &'static str },

    /// The backend failed outside the infeasible/unbounded taxonomy.
    Backend { message: String },

    // ---- Solution validation ----
    /// A solver quantity was non-finite or materially negative.
    InvalidQuantity { fertilizer: String, value: f64, reason: &'static str },

    /// The objective value was non-finite.
    NonFiniteProfit { value: f64 },

    /// A reported optimum failed the delivery audit on one axis.
    InfeasibleSolution { nutrient: &'static str, delivered: f64, required: f64 },
}

impl MixError {
    /// The fixed reporting string for this failure, as surfaced to the
    /// presentation layer. `Display` carries the diagnostic detail.
    pub fn reason(&self) -> &'static str {
        match self {
            MixError::CropNotFound { .. } => "crop not found",
            MixError::NoOptimalSolution { .. } | MixError::Backend { .. } => "no optimal solution",
            MixError::InvalidCost { .. }
            | MixError::MissingCost { .. }
            | MixError::UnknownCostEntry { .. } => "invalid cost",
            MixError::InvalidYield { .. }
            | MixError::InvalidPrice { .. }
            | MixError::InvalidApplicationFloor { .. } => "invalid request",
            MixError::InvalidQuantity { .. }
            | MixError::NonFiniteProfit { .. }
            | MixError::InfeasibleSolution { .. } => "solver returned invalid solution",
        }
    }
}

impl std::error::Error for MixError {}

impl std::fmt::Display for MixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Crop resolution ----
            MixError::CropNotFound { crop } => {
                write!(f, "Crop nutrient data not found for '{crop}'")
            }
            // ---- Request validation ----
            MixError::InvalidYield { value, reason } => {
                write!(f, "Expected yield must be finite and >= 0; got: {value}. {reason}")
            }
            MixError::InvalidPrice { value, reason } => {
                write!(f, "Selling price must be finite and >= 0; got: {value}. {reason}")
            }
            MixError::InvalidCost { fertilizer, value, reason } => {
                write!(f, "Invalid cost {value} for fertilizer '{fertilizer}': {reason}")
            }
            MixError::MissingCost { fertilizer } => {
                write!(f, "No cost supplied for catalog fertilizer '{fertilizer}'")
            }
            MixError::UnknownCostEntry { name } => {
                write!(f, "Cost map names '{name}', which is not in the catalog")
            }
            MixError::InvalidApplicationFloor { value, reason } => {
                write!(f, "Application floor must be finite and >= 0; got: {value}. {reason}")
            }
            // ---- Solver status ----
            MixError::NoOptimalSolution { status } => {
                write!(f, "No optimal solution found (solver status: {status})")
            }
            MixError::Backend { message } => {
                write!(f, "LP backend failed: {message}")
            }
            // ---- Solution validation ----
            MixError::InvalidQuantity { fertilizer, value, reason } => {
                write!(
                    f,
                    "Solver quantity {value} for fertilizer '{fertilizer}' is invalid: {reason}"
                )
            }
            MixError::NonFiniteProfit { value } => {
                write!(f, "Objective value must be finite; got: {value}")
            }
            MixError::InfeasibleSolution { nutrient, delivered, required } => {
                write!(
                    f,
                    "Reported optimum delivers {delivered} kg/ha of {nutrient}, below the required {required}"
                )
            }
        }
    }
}

/// Normalize solver termination into the engine taxonomy.
///
/// Infeasible and unbounded collapse onto [`MixError::NoOptimalSolution`]
/// (the reporting layer never distinguishes them); anything else is a
/// backend fault.
impl From<ResolutionError> for MixError {
    fn from(err: ResolutionError) -> MixError {
        match err {
            ResolutionError::Infeasible => MixError::NoOptimalSolution { status: "infeasible" },
            ResolutionError::Unbounded => MixError::NoOptimalSolution { status: "unbounded" },
            other => MixError::Backend { message: other.to_string() },
        }
    }
}

/// Lift table lookup failures into the engine taxonomy.
///
/// Only the two lookup variants can reach the engine at run time; table
/// construction errors stay on the caller's side of the boundary.
impl From<AgronomyError> for MixError {
    fn from(err: AgronomyError) -> MixError {
        match err {
            AgronomyError::UnknownCrop { crop } => MixError::CropNotFound { crop },
            AgronomyError::UnknownFertilizer { name } => MixError::UnknownCostEntry { name },
            other => MixError::Backend { message: other.to_string() },
        }
    }
}

/// Convert a [`MixError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<MixError> for pyo3::PyErr {
    fn from(err: MixError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
