//! mix_optimizer::types — shared numeric aliases and engine constants.
//!
//! Purpose
//! -------
//! Centralize the value types and thresholds used across the mix
//! optimizer. By defining these in one place, the formulation, runner,
//! and outcome code stay agnostic to representation choices and can more
//! easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define semantic aliases for fertilizer quantities and currency
//!   amounts (`Quantity`, `Money`).
//! - Provide the standard map types for caller-supplied costs and for the
//!   sparse output plan (`CostMap`, `Plan`).
//! - Fix the negligible-use threshold and the delivery-audit tolerance.
//!
//! Invariants & assumptions
//! ------------------------
//! - All quantities are kilograms of fertilizer; all money values are
//!   currency units per the caller's convention. Neither is rescaled
//!   anywhere in the engine.
//! - Both map types are `BTreeMap` so iteration, display, and dict
//!   conversion at the Python boundary are deterministic.
//!
//! Conventions
//! -----------
//! - A plan never contains an entry at or below [`APPLICATION_FLOOR`];
//!   such quantities are omitted entirely rather than reported as zero.
//! - [`FEASIBILITY_TOL`] is the slack allowed when auditing nutrient
//!   deliveries against requirement minimums, absorbing solver round-off.
use std::collections::BTreeMap;

/// Kilograms of fertilizer applied.
pub type Quantity = f64;

/// Currency amount (per-kg cost, revenue, or profit).
pub type Money = f64;

/// Caller-supplied per-kg fertilizer costs, keyed by catalog name.
pub type CostMap = BTreeMap<String, Money>;

/// Sparse optimization output: fertilizer name → quantity to apply (kg).
///
/// Contains only fertilizers whose optimal quantity exceeds the
/// application floor.
pub type Plan = BTreeMap<String, Quantity>;

/// Negligible-use threshold (kg): optimal quantities at or below this are
/// treated as "not used" and omitted from the plan.
pub const APPLICATION_FLOOR: f64 = 1e-3;

/// Tolerance for the post-solve delivery audit against requirement
/// minimums.
pub const FEASIBILITY_TOL: f64 = 1e-6;
