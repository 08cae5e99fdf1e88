//! agronomy — constant domain tables: crop demand and fertilizer supply.
//!
//! Purpose
//! -------
//! Bundle the two immutable lookup tables the optimization engine consumes —
//! per-crop nutrient requirement bands and per-fertilizer nutrient mass
//! fractions — together with the shared nutrient axes and the table-layer
//! error surface. This is the namespace the engine (and the Python bridge)
//! resolves crop and fertilizer identities against.
//!
//! Key behaviors
//! -------------
//! - Declare the three macro-nutrient axes in [`nutrient`]; the axes are the
//!   only coupling between the two tables.
//! - Validate requirement bands and composition fractions at construction
//!   time in [`requirements`] and [`composition`], so downstream code can
//!   assume finite, in-range values.
//! - Centralize table errors in [`errors`] (`AgronomyError`, `AgroResult`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Both tables are immutable after construction and read-only for the
//!   life of the process; there is no process-wide singleton — callers pass
//!   tables into the engine explicitly.
//! - All lookups are exact string matches; an unknown name is an error,
//!   never a default.
//! - Requirement maximums are carried but never constrained against by the
//!   engine.
//!
//! Downstream usage
//! ----------------
//! - `CropTable::reference()` / `FertilizerCatalog::reference()` are the
//!   built-in reference instances; arbitrary tables come in through the
//!   fallible `new` constructors.
//! - The optimization engine reads `CropRequirement::minimum(axis)` and
//!   `FertilizerComposition::fraction(axis)` while emitting the LP.

pub mod composition;
pub mod errors;
pub mod nutrient;
pub mod requirements;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::composition::{FertilizerCatalog, FertilizerComposition};
pub use self::errors::{AgroResult, AgronomyError};
pub use self::nutrient::Nutrient;
pub use self::requirements::{CropRequirement, CropTable, NutrientBand};
