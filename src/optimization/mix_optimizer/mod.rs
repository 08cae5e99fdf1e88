//! mix_optimizer — good_lp-powered fertilizer application planner.
//!
//! Purpose
//! -------
//! Provide a high-level, LP-backed planning layer for **maximizing crop
//! profit** under minimum-nutrient constraints. Callers hand in the two
//! constant tables plus a [`MixRequest`] and invoke [`optimize`] to run
//! one simplex solve with a configurable reporting floor.
//!
//! Key behaviors
//! -------------
//! - Convert a resolved crop requirement and fertilizer catalog into a
//!   `good_lp` program via [`formulation::MixProgram`]: one non-negative
//!   variable per fertilizer, objective `revenue - Σ cost·x`, and one
//!   ">=" row per nutrient axis.
//! - Expose a single user-facing entrypoint [`optimize`] that:
//!   - validates economics, options, and the cost map (the negative-cost
//!     hardening lives here — rejected before any solve),
//!   - resolves the crop (unknown crop fails before the LP is built),
//!   - executes the solver via [`run`], and
//!   - normalizes results into an [`OptimalMix`].
//! - Centralize engine configuration ([`MixOptions`]) and validation
//!   logic ([`validation`]) so downstream code can assume sane, finite
//!   inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - Revenue `yield * price` is a constant objective offset; the solver
//!   only decides quantities, and reported profit always includes the
//!   offset.
//! - Any returned plan satisfies, per axis, `Σ fraction·quantity >=
//!   minimum` within the crate feasibility tolerance; the runner audits
//!   this on every success.
//! - Quantities at or below the application floor are omitted from the
//!   plan entirely — never reported as zero — while profit and the
//!   delivery audit use the raw values.
//! - Infeasible and unbounded terminations surface identically as
//!   "no optimal solution"; the caller is never shown an infinite profit.
//!
//! Conventions
//! -----------
//! - Decision-variable order is the catalog's lexicographic name order,
//!   making repeated formulations (and therefore solves) deterministic.
//! - Errors bubble up as `MixResult<T>` / `MixError`; this module and its
//!   children never intentionally panic.
//!
//! Downstream usage
//! ----------------
//! - Front-ends (the Python bindings, tests) interact only with the
//!   re-exported surface: [`optimize`], [`MixRequest`], [`MixOptions`],
//!   [`OptimalMix`], plus the aliases and constants from [`types`].
//! - Internal engine code:
//!   - uses [`formulation`] to bridge the tables into `good_lp`,
//!   - delegates execution to [`run`], and
//!   - relies on [`validation`] for input and solution-state checks.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover validation rules, formulation shape,
//!   termination normalization, and thresholding/outcome invariants.
//! - Integration tests exercise [`optimize`] on the reference tables,
//!   verifying the published rice optimum, the zero-requirement edge
//!   case, cost monotonicity, and deterministic repeatability.

pub mod api;
pub mod formulation;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::optimize;
pub use self::traits::{MixOptions, MixRequest, OptimalMix};
pub use self::types::{APPLICATION_FLOOR, CostMap, FEASIBILITY_TOL, Money, Plan, Quantity};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use agromind::optimization::mix_optimizer::prelude::*;
//
// to import the main planner surface in a single line.

pub mod prelude {
    pub use super::api::optimize;
    pub use super::traits::{MixOptions, MixRequest, OptimalMix};
    pub use super::types::{CostMap, Plan};
}
