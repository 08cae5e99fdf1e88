//! optimization — fertilizer-mix LP stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for fertilizer planning,
//! combining a `good_lp`-backed mix optimizer with a single error/result
//! surface. Callers supply the constant agronomy tables, a per-call
//! request, and options, and obtain an optimal application plan and
//! profit without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose the high-level engine entry point in [`mix_optimizer`]
//!   (`optimize`), including configuration of the reporting floor and
//!   verbosity.
//! - Normalize request violations, solver terminations, and backend
//!   faults into a single enum ([`errors::MixError`]) with a common
//!   result alias (`MixResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The engine is stateless between calls: each invocation is a pure
//!   function of its inputs plus the immutable tables it is handed.
//! - Decision variables are non-negative continuous quantities, unbounded
//!   above; the three nutrient constraints are all "at least" rows.
//!   Requirement maximums never enter the program.
//! - Invalid inputs surface as `MixError` values, not panics; a failed
//!   optimization yields no plan at all, never a best-effort subset.
//!
//! Conventions
//! -----------
//! - The objective is always `maximize revenue - total cost` with revenue
//!   a constant offset; reported profit includes the offset and is
//!   computed from raw (untruncated) solver values.
//! - Public engine entrypoints that can fail return `MixResult<T>`;
//!   callers never see raw `good_lp` errors.
//! - This module performs no I/O beyond the optional one-line verbose
//!   summary; presentation layers render outcomes and `reason()` strings.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: validation
//!   rules, formulation shape, termination normalization, thresholding.
//! - Integration tests exercise end-to-end planning scenarios over the
//!   reference tables.

pub mod errors;
pub mod mix_optimizer;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use agromind::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{MixError, MixResult};
    pub use super::mix_optimizer::prelude::*;
}

pub use self::errors::{MixError, MixResult};
