//! agromind — fertilizer-mix optimization core with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the planning engine to Python via the `_agromind` extension
//! module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing functions used by the `agromind` package
//! (the numeric input form and the crop classifier stay on the Python
//! side; only the resolved crop name and economics cross the boundary).
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`agronomy` and `optimization`) as
//!   the public crate surface.
//! - Define the `#[pyfunction]` wrappers and the `#[pymodule]`
//!   initializer for the `_agromind` Python extension.
//! - Surface the advisory calling convention the surrounding Python
//!   tooling expects: `optimize_fertilizer` returns a
//!   `(profit, plan, status)` triple, with domain failures reported
//!   in-band and contract violations raised as `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimization work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input extraction, and error mapping.
//! - The Python-visible functions operate on the reference tables; Rust
//!   callers wanting arbitrary tables use [`optimization::mix_optimizer::optimize`]
//!   directly.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Conventions
//! -----------
//! - Domain failures ("crop not found", "no optimal solution") come back
//!   as `(None, None, reason)`; everything else (bad costs, negative
//!   economics) raises.
//! - Plans cross the boundary as plain `dict[str, float]`; quantities are
//!   kilograms.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_agromind` module defined
//!   here; the Streamlit front-end and classifier wrappers live there.
//!
//! Testing notes
//! -------------
//! - Engine behavior is covered by unit tests in the inner modules and by
//!   the integration tests under `tests/`.
//! - Binding smoke tests (construction, happy path, in-band failures) are
//!   expected to run from the Python side against the built extension.

pub mod agronomy;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    agronomy::{CropTable, FertilizerCatalog},
    optimization::{
        errors::MixError,
        mix_optimizer::{MixOptions, MixRequest, Plan, optimize},
    },
    utils::extract_cost_map,
};

/// Recommend the profit-maximizing fertilizer mix for `crop` using the
/// reference tables.
///
/// Returns the `(profit, plan, status_message)` triple the surrounding
/// Python tooling consumes.
///
/// Parameters
/// ----------
/// - `crop`: crop name, matched exactly against the reference table
///   (the set returned by [`recommended_crops`]).
/// - `expected_yield`: expected crop yield in kg/ha; finite, >= 0.
/// - `price`: selling price per kg; finite, >= 0.
/// - `costs`: dict mapping each reference fertilizer name to its per-kg
///   cost; finite, >= 0.
///
/// Returns
/// -------
/// - On success: `(profit, {fertilizer: kg, ...}, "optimization successful")`
///   where the plan omits negligible quantities (<= 0.001 kg).
/// - On a domain failure: `(None, None, reason)` with reason
///   `"crop not found"` or `"no optimal solution"`.
///
/// Raises
/// ------
/// - `ValueError` for contract violations: non-finite or negative
///   economics, a cost map that does not exactly cover the catalog, or a
///   negative cost.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn optimize_fertilizer<'py>(
    crop: &str, expected_yield: f64, price: f64, costs: &Bound<'py, PyAny>,
) -> PyResult<(Option<f64>, Option<Plan>, String)> {
    let cost_map = extract_cost_map(costs)?;
    let request = MixRequest::new(crop, expected_yield, price, cost_map)?;

    let outcome = optimize(
        &CropTable::reference(),
        &FertilizerCatalog::reference(),
        &request,
        &MixOptions::default(),
    );

    match outcome {
        Ok(mix) => {
            Ok((Some(mix.profit), Some(mix.applications), "optimization successful".to_string()))
        }
        Err(err) => match err {
            MixError::CropNotFound { .. }
            | MixError::NoOptimalSolution { .. }
            | MixError::Backend { .. } => Ok((None, None, err.reason().to_string())),
            other => Err(other.into()),
        },
    }
}

/// Crop names the reference requirement table can resolve, in sorted
/// order. The excluded classifier's label set must match this exactly.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn recommended_crops() -> Vec<String> {
    CropTable::reference().crops().map(str::to_string).collect()
}

/// Fertilizer names in the reference catalog, in sorted order. The cost
/// dict passed to [`optimize_fertilizer`] must price exactly these.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn fertilizer_names() -> Vec<String> {
    FertilizerCatalog::reference().names().map(str::to_string).collect()
}

/// Initialize the `_agromind` extension module.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _agromind<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(optimize_fertilizer, m)?)?;
    m.add_function(wrap_pyfunction!(recommended_crops, m)?)?;
    m.add_function(wrap_pyfunction!(fertilizer_names, m)?)?;
    Ok(())
}
