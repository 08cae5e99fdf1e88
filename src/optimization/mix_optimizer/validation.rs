//! Validation helpers for fertilizer-mix optimization.
//!
//! This module centralizes the consistency checks used across the engine
//! interface:
//!
//! - **Economics**: [`validate_yield`], [`validate_price`] ensure the
//!   revenue inputs are finite and non-negative.
//! - **Cost map**: [`validate_cost_map`] enforces exact catalog coverage
//!   and non-negative, finite per-kg costs (a negative cost would be
//!   exploited by the solver as unbounded profit, so it is rejected
//!   before any solve attempt).
//! - **Options**: [`validate_application_floor`] checks the reporting
//!   threshold.
//! - **Solution state**: [`validate_quantity`] and [`validate_profit`]
//!   check raw solver values; [`audit_delivery`] re-checks the feasibility
//!   invariant on the reported optimum.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`MixError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::agronomy::{CropRequirement, FertilizerCatalog, Nutrient};
use crate::optimization::{
    errors::{MixError, MixResult},
    mix_optimizer::types::{CostMap, FEASIBILITY_TOL, Money, Quantity},
};

/// Validate the expected crop yield (kg/ha).
///
/// # Errors
/// Returns [`MixError::InvalidYield`] if the value is non-finite or < 0.
pub fn validate_yield(value: f64) -> MixResult<()> {
    if !value.is_finite() {
        return Err(MixError::InvalidYield { value, reason: "Yield must be finite." });
    }
    if value < 0.0 {
        return Err(MixError::InvalidYield { value, reason: "Yield must be non-negative." });
    }
    Ok(())
}

/// Validate the crop selling price (currency per kg).
///
/// # Errors
/// Returns [`MixError::InvalidPrice`] if the value is non-finite or < 0.
pub fn validate_price(value: f64) -> MixResult<()> {
    if !value.is_finite() {
        return Err(MixError::InvalidPrice { value, reason: "Price must be finite." });
    }
    if value < 0.0 {
        return Err(MixError::InvalidPrice { value, reason: "Price must be non-negative." });
    }
    Ok(())
}

/// Validate the negligible-use reporting threshold.
///
/// # Errors
/// Returns [`MixError::InvalidApplicationFloor`] if the value is
/// non-finite or < 0.
pub fn validate_application_floor(value: f64) -> MixResult<()> {
    if !value.is_finite() {
        return Err(MixError::InvalidApplicationFloor {
            value,
            reason: "Floor must be finite.",
        });
    }
    if value < 0.0 {
        return Err(MixError::InvalidApplicationFloor {
            value,
            reason: "Floor must be non-negative.",
        });
    }
    Ok(())
}

/// Validate a cost map against the catalog it will price.
///
/// Checks:
/// - every catalog fertilizer has a cost entry,
/// - every cost entry names a catalog fertilizer,
/// - every cost is finite and non-negative.
///
/// # Errors
/// - [`MixError::MissingCost`] for an unpriced catalog fertilizer.
/// - [`MixError::UnknownCostEntry`] for a priced name outside the catalog.
/// - [`MixError::InvalidCost`] with the offending name/value for a
///   non-finite or negative cost.
pub fn validate_cost_map(costs: &CostMap, catalog: &FertilizerCatalog) -> MixResult<()> {
    for name in catalog.names() {
        if !costs.contains_key(name) {
            return Err(MixError::MissingCost { fertilizer: name.to_string() });
        }
    }
    for (name, &cost) in costs {
        if !catalog.contains(name) {
            return Err(MixError::UnknownCostEntry { name: name.clone() });
        }
        if !cost.is_finite() {
            return Err(MixError::InvalidCost {
                fertilizer: name.clone(),
                value: cost,
                reason: "Costs must be finite.",
            });
        }
        if cost < 0.0 {
            return Err(MixError::InvalidCost {
                fertilizer: name.clone(),
                value: cost,
                reason: "Costs must be non-negative.",
            });
        }
    }
    Ok(())
}

/// Validate and normalize one raw solver quantity.
///
/// Accepts values down to `-FEASIBILITY_TOL` (simplex round-off) and
/// clamps them to zero; anything lower or non-finite is rejected.
///
/// # Returns
/// The clamped, non-negative quantity.
///
/// # Errors
/// Returns [`MixError::InvalidQuantity`] for non-finite or materially
/// negative values.
pub fn validate_quantity(fertilizer: &str, value: Quantity) -> MixResult<Quantity> {
    if !value.is_finite() {
        return Err(MixError::InvalidQuantity {
            fertilizer: fertilizer.to_string(),
            value,
            reason: "Quantities must be finite.",
        });
    }
    if value < -FEASIBILITY_TOL {
        return Err(MixError::InvalidQuantity {
            fertilizer: fertilizer.to_string(),
            value,
            reason: "Quantities must be non-negative.",
        });
    }
    Ok(value.max(0.0))
}

/// Validate that a profit value is finite.
///
/// Negative profit is fine (costs may exceed revenue); only NaN/±∞ are
/// rejected.
///
/// # Errors
/// Returns [`MixError::NonFiniteProfit`] if the value is not finite.
pub fn validate_profit(value: Money) -> MixResult<()> {
    if !value.is_finite() {
        return Err(MixError::NonFiniteProfit { value });
    }
    Ok(())
}

/// Re-check the feasibility invariant on a reported optimum.
///
/// For each axis, the delivered nutrient mass (computed from raw,
/// untruncated quantities) must reach the crop's minimum within
/// [`FEASIBILITY_TOL`].
///
/// # Errors
/// Returns [`MixError::InfeasibleSolution`] naming the first axis whose
/// delivery falls short.
pub fn audit_delivery(delivered: &[f64; 3], requirement: &CropRequirement) -> MixResult<()> {
    for nutrient in Nutrient::ALL {
        let supplied = delivered[nutrient.index()];
        let required = requirement.minimum(nutrient);
        if supplied + FEASIBILITY_TOL < required {
            return Err(MixError::InfeasibleSolution {
                nutrient: nutrient.symbol(),
                delivered: supplied,
                required,
            });
        }
    }
    Ok(())
}
