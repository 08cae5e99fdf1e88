//! Crop nutrient requirement table.
//!
//! Purpose
//! -------
//! Provide small, validated containers for per-crop nutrient demand: a
//! requirement band per axis and an immutable name-keyed table with
//! exact-match lookup. This module centralizes input validation so the
//! optimization engine can assume clean, finite bands.
//!
//! Key behaviors
//! -------------
//! - [`NutrientBand`] enforces finite values with `0 <= min <= max` at
//!   construction time.
//! - [`CropRequirement`] bundles the three axis bands and exposes per-axis
//!   access keyed by [`Nutrient`].
//! - [`CropTable`] maps crop names to requirements; an unknown name is a
//!   lookup failure, never a default.
//!
//! Invariants & assumptions
//! ------------------------
//! - Band values are kg/ha-equivalent, finite, and non-negative.
//! - `min <= max` for every band.
//! - Crop names match exactly (case and spacing); the table never fuzzes.
//! - The table is immutable after construction and read-only for the life
//!   of the process.
//!
//! Conventions
//! -----------
//! - Only `min` participates in optimization constraints. `max` is carried
//!   and exposed but never constrained against; callers wanting upper
//!   bounds must not assume the engine applies them.
//! - Iteration order over crops is lexicographic (the table is a
//!   `BTreeMap`), keeping listings deterministic.
//!
//! Downstream usage
//! ----------------
//! - The engine resolves a [`CropRequirement`] once per call and reads
//!   `minimum(axis)` while emitting constraint rows.
//! - [`CropTable::reference`] ships a built-in 22-crop table; arbitrary
//!   tables come in through [`CropTable::new`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover band validation (non-finite, negative, inverted),
//!   duplicate rejection, exact-match lookup, and reference-table spot
//!   checks.
use crate::agronomy::{
    errors::{AgroResult, AgronomyError},
    nutrient::Nutrient,
};
use std::collections::BTreeMap;

/// Validated requirement band for one nutrient axis, in kg/ha.
///
/// Invariants
/// ----------
/// - `min` and `max` are finite.
/// - `0.0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientBand {
    min: f64,
    max: f64,
}

impl NutrientBand {
    /// Construct a validated band.
    ///
    /// # Errors
    /// - [`AgronomyError::InvalidBand`] if either endpoint is non-finite,
    ///   `min` is negative, or `min > max`.
    pub fn new(nutrient: Nutrient, min: f64, max: f64) -> AgroResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(AgronomyError::InvalidBand {
                nutrient: nutrient.symbol(),
                min,
                max,
                reason: "Band endpoints must be finite.",
            });
        }
        if min < 0.0 {
            return Err(AgronomyError::InvalidBand {
                nutrient: nutrient.symbol(),
                min,
                max,
                reason: "Band minimum must be non-negative.",
            });
        }
        if min > max {
            return Err(AgronomyError::InvalidBand {
                nutrient: nutrient.symbol(),
                min,
                max,
                reason: "Band minimum must not exceed its maximum.",
            });
        }
        Ok(Self { min, max })
    }

    /// Lower bound of the band (the only endpoint the engine constrains on).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the band. Carried for reporting; never constrained.
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Per-crop nutrient demand: one [`NutrientBand`] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRequirement {
    /// Nitrogen demand band (kg/ha).
    pub nitrogen: NutrientBand,
    /// Phosphorus demand band (kg/ha).
    pub phosphorus: NutrientBand,
    /// Potassium demand band (kg/ha).
    pub potassium: NutrientBand,
}

impl CropRequirement {
    /// Bundle three validated bands into a requirement record.
    pub fn new(nitrogen: NutrientBand, phosphorus: NutrientBand, potassium: NutrientBand) -> Self {
        Self { nitrogen, phosphorus, potassium }
    }

    /// The band for one axis.
    pub fn band(&self, nutrient: Nutrient) -> &NutrientBand {
        match nutrient {
            Nutrient::Nitrogen => &self.nitrogen,
            Nutrient::Phosphorus => &self.phosphorus,
            Nutrient::Potassium => &self.potassium,
        }
    }

    /// The minimum demand for one axis (the constraint right-hand side).
    pub fn minimum(&self, nutrient: Nutrient) -> f64 {
        self.band(nutrient).min()
    }
}

/// Immutable crop-name → requirement table with exact-match lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CropTable {
    entries: BTreeMap<String, CropRequirement>,
}

impl CropTable {
    /// Build a table from arbitrary `(name, requirement)` pairs.
    ///
    /// # Errors
    /// - [`AgronomyError::DuplicateCrop`] if the same name appears twice.
    pub fn new<I, S>(entries: I) -> AgroResult<Self>
    where
        I: IntoIterator<Item = (S, CropRequirement)>,
        S: Into<String>,
    {
        let mut table = BTreeMap::new();
        for (name, requirement) in entries {
            let name = name.into();
            if table.insert(name.clone(), requirement).is_some() {
                return Err(AgronomyError::DuplicateCrop { crop: name });
            }
        }
        Ok(Self { entries: table })
    }

    /// The built-in 22-crop reference table. Bands are (min, max) kg/ha
    /// per axis in N, P, K order.
    pub fn reference() -> Self {
        let rows: [(&str, (f64, f64), (f64, f64), (f64, f64)); 22] = [
            ("rice", (80.0, 100.0), (40.0, 50.0), (30.0, 40.0)),
            ("maize", (100.0, 150.0), (50.0, 60.0), (40.0, 50.0)),
            ("chickpea", (20.0, 25.0), (40.0, 50.0), (30.0, 40.0)),
            ("kidney beans", (25.0, 30.0), (50.0, 60.0), (30.0, 40.0)),
            ("pigeonpeas", (25.0, 30.0), (30.0, 40.0), (30.0, 40.0)),
            ("mothbeans", (20.0, 25.0), (30.0, 40.0), (20.0, 30.0)),
            ("mungbean", (20.0, 30.0), (30.0, 40.0), (20.0, 30.0)),
            ("blackgram", (20.0, 30.0), (30.0, 40.0), (20.0, 30.0)),
            ("lentil", (25.0, 30.0), (40.0, 50.0), (30.0, 40.0)),
            ("watermelon", (80.0, 120.0), (40.0, 60.0), (60.0, 100.0)),
            ("muskmelon", (80.0, 120.0), (40.0, 60.0), (60.0, 100.0)),
            ("apple", (50.0, 80.0), (30.0, 50.0), (30.0, 50.0)),
            ("orange", (100.0, 150.0), (30.0, 60.0), (200.0, 300.0)),
            ("papaya", (100.0, 150.0), (50.0, 75.0), (150.0, 200.0)),
            ("coconut", (150.0, 200.0), (50.0, 75.0), (250.0, 300.0)),
            ("cotton", (150.0, 200.0), (50.0, 80.0), (100.0, 150.0)),
            ("jute", (100.0, 150.0), (50.0, 60.0), (100.0, 120.0)),
            ("coffee", (150.0, 200.0), (50.0, 75.0), (150.0, 200.0)),
            ("pomegranate", (40.0, 60.0), (30.0, 40.0), (40.0, 50.0)),
            ("banana", (200.0, 250.0), (100.0, 150.0), (200.0, 250.0)),
            ("mango", (150.0, 200.0), (50.0, 75.0), (150.0, 200.0)),
            ("grapes", (50.0, 100.0), (25.0, 50.0), (50.0, 100.0)),
        ];
        let entries = rows.into_iter().map(|(name, n, p, k)| {
            let requirement = CropRequirement::new(
                NutrientBand::new(Nutrient::Nitrogen, n.0, n.1)
                    .expect("reference N band is valid"),
                NutrientBand::new(Nutrient::Phosphorus, p.0, p.1)
                    .expect("reference P band is valid"),
                NutrientBand::new(Nutrient::Potassium, k.0, k.1)
                    .expect("reference K band is valid"),
            );
            (name, requirement)
        });
        Self::new(entries).expect("reference crop names are unique")
    }

    /// Resolve a crop by exact name.
    ///
    /// # Errors
    /// - [`AgronomyError::UnknownCrop`] if the name is absent.
    pub fn lookup(&self, crop: &str) -> AgroResult<&CropRequirement> {
        self.entries
            .get(crop)
            .ok_or_else(|| AgronomyError::UnknownCrop { crop: crop.to_string() })
    }

    /// Whether the table has an entry for `crop` (exact match).
    pub fn contains(&self, crop: &str) -> bool {
        self.entries.contains_key(crop)
    }

    /// Crop names in lexicographic order.
    pub fn crops(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of crops in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
