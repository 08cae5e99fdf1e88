//! High-level entry point for fertilizer-mix optimization.
//!
//! This resolves the crop against the requirement table, assembles the LP
//! through `formulation`, and delegates the solve to `run_mix`. All
//! failure conditions come back as [`MixResult`] values; nothing panics
//! through this boundary.
use crate::agronomy::{CropTable, FertilizerCatalog};
use crate::optimization::{
    errors::MixResult,
    mix_optimizer::{
        formulation::MixProgram,
        run::run_mix,
        traits::{MixOptions, MixRequest, OptimalMix},
        validation::{validate_application_floor, validate_cost_map, validate_price, validate_yield},
    },
};

/// Compute the cost-minimizing, profit-maximizing fertilizer mix for one
/// crop at one decision instant.
///
/// # Behavior
/// - Re-validates the request economics and options (fields are public,
///   so the constructor checks alone are not trusted).
/// - Validates the cost map against the catalog: exact coverage, known
///   names only, finite non-negative costs. A negative cost fails here,
///   before any solve attempt.
/// - Resolves the crop's requirement bands; an unknown crop fails
///   immediately — no LP is constructed.
/// - Builds the program (one variable per catalog fertilizer, three >=
///   constraints) and runs the single blocking solve.
///
/// The call is a pure function of its arguments: no shared state, no
/// side effects beyond the optional verbose stderr line, safe to invoke
/// concurrently from independent calls. There is no internal cancellation
/// point; callers wanting a timeout must bound the call externally.
/// Retries are meaningless — identical inputs solve identically.
///
/// # Parameters
/// - `table`: crop requirement table (e.g. [`CropTable::reference`]).
/// - `catalog`: fertilizer catalog fixing the decision-variable set.
/// - `request`: crop name, expected yield, selling price, per-kg costs.
/// - `opts`: application floor and verbosity.
///
/// # Errors
/// - [`MixError::CropNotFound`](crate::optimization::MixError::CropNotFound)
///   (reported reason: "crop not found").
/// - [`MixError::NoOptimalSolution`](crate::optimization::MixError::NoOptimalSolution)
///   for infeasible or unbounded programs (reported reason: "no optimal
///   solution").
/// - Cost-map and economics violations
///   ([`MixError::InvalidCost`](crate::optimization::MixError::InvalidCost),
///   [`MixError::MissingCost`](crate::optimization::MixError::MissingCost),
///   [`MixError::UnknownCostEntry`](crate::optimization::MixError::UnknownCostEntry),
///   [`MixError::InvalidYield`](crate::optimization::MixError::InvalidYield),
///   [`MixError::InvalidPrice`](crate::optimization::MixError::InvalidPrice)).
///
/// # Returns
/// An [`OptimalMix`] containing the profit (revenue minus realized cost,
/// from untruncated solver values), the sparse thresholded plan, the
/// per-axis delivery audit, and the solver status.
///
/// # Example
/// ```
/// use agromind::agronomy::{CropTable, FertilizerCatalog};
/// use agromind::optimization::mix_optimizer::{MixOptions, MixRequest, optimize};
/// use std::collections::BTreeMap;
///
/// let costs = BTreeMap::from([
///     ("Urea".to_string(), 70.0),
///     ("SSP".to_string(), 58.0),
///     ("Potassium Sulphate".to_string(), 89.0),
///     ("Power Grow".to_string(), 57.0),
/// ]);
/// let request = MixRequest::new("rice", 30.0, 20.0, costs)?;
/// let mix = optimize(
///     &CropTable::reference(),
///     &FertilizerCatalog::reference(),
///     &request,
///     &MixOptions::default(),
/// )?;
/// assert!(mix.applications.contains_key("Urea"));
/// # Ok::<(), agromind::optimization::MixError>(())
/// ```
pub fn optimize(
    table: &CropTable, catalog: &FertilizerCatalog, request: &MixRequest, opts: &MixOptions,
) -> MixResult<OptimalMix> {
    validate_yield(request.expected_yield)?;
    validate_price(request.unit_price)?;
    validate_application_floor(opts.application_floor)?;
    validate_cost_map(&request.costs, catalog)?;

    let requirement = table.lookup(&request.crop)?;
    let program = MixProgram::build(requirement, catalog, request)?;
    run_mix(program, requirement, opts)
}
