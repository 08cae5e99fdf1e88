//! Fertilizer composition catalog.
//!
//! Purpose
//! -------
//! Represent what each fertilizer delivers: a validated mass fraction per
//! nutrient axis, collected into an immutable name-keyed catalog. The
//! optimization engine introduces one decision variable per catalog entry,
//! so the catalog also fixes the variable set and its deterministic order.
//!
//! Key behaviors
//! -------------
//! - [`FertilizerComposition`] enforces finite fractions within `[0, 1]`
//!   at construction time.
//! - [`FertilizerCatalog`] rejects empty sets and duplicate names, and
//!   iterates in lexicographic order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each fraction is the nutrient mass delivered per unit mass of
//!   fertilizer; a fertilizer may deliver nothing on an axis (0.0).
//! - The catalog is non-empty, immutable after construction, and
//!   read-only for the life of the process.
//!
//! Conventions
//! -----------
//! - Fertilizer names match exactly; no normalization.
//! - Iteration order (and therefore decision-variable order) is
//!   lexicographic by name.
//!
//! Testing notes
//! -------------
//! - Unit tests cover fraction validation, empty/duplicate rejection, and
//!   reference-catalog spot checks.
use crate::agronomy::{
    errors::{AgroResult, AgronomyError},
    nutrient::Nutrient,
};
use std::collections::BTreeMap;

/// Validated nutrient mass fractions for one fertilizer.
///
/// Each field is the share of that nutrient delivered per unit mass, in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FertilizerComposition {
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
}

impl FertilizerComposition {
    /// Construct a validated composition for the named fertilizer.
    ///
    /// # Errors
    /// - [`AgronomyError::InvalidFraction`] if any fraction is non-finite
    ///   or outside `[0, 1]`; the error names the first offending axis.
    pub fn new(name: &str, nitrogen: f64, phosphorus: f64, potassium: f64) -> AgroResult<Self> {
        for (nutrient, value) in
            [(Nutrient::Nitrogen, nitrogen), (Nutrient::Phosphorus, phosphorus), (Nutrient::Potassium, potassium)]
        {
            if !value.is_finite() {
                return Err(AgronomyError::InvalidFraction {
                    fertilizer: name.to_string(),
                    nutrient: nutrient.symbol(),
                    value,
                    reason: "Fractions must be finite.",
                });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(AgronomyError::InvalidFraction {
                    fertilizer: name.to_string(),
                    nutrient: nutrient.symbol(),
                    value,
                    reason: "Fractions must lie within [0, 1].",
                });
            }
        }
        Ok(Self { nitrogen, phosphorus, potassium })
    }

    /// The mass fraction delivered on one axis.
    pub fn fraction(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }
}

/// Immutable fertilizer-name → composition catalog.
///
/// The catalog fixes the engine's decision-variable set: one non-negative
/// quantity per entry, in lexicographic name order.
#[derive(Debug, Clone, PartialEq)]
pub struct FertilizerCatalog {
    entries: BTreeMap<String, FertilizerComposition>,
}

impl FertilizerCatalog {
    /// Build a catalog from arbitrary `(name, composition)` pairs.
    ///
    /// # Errors
    /// - [`AgronomyError::EmptyCatalog`] if no entries are supplied.
    /// - [`AgronomyError::DuplicateFertilizer`] if a name repeats.
    pub fn new<I, S>(entries: I) -> AgroResult<Self>
    where
        I: IntoIterator<Item = (S, FertilizerComposition)>,
        S: Into<String>,
    {
        let mut catalog = BTreeMap::new();
        for (name, composition) in entries {
            let name = name.into();
            if catalog.insert(name.clone(), composition).is_some() {
                return Err(AgronomyError::DuplicateFertilizer { name });
            }
        }
        if catalog.is_empty() {
            return Err(AgronomyError::EmptyCatalog);
        }
        Ok(Self { entries: catalog })
    }

    /// The built-in four-fertilizer reference catalog.
    pub fn reference() -> Self {
        let rows: [(&str, f64, f64, f64); 4] = [
            ("Urea", 0.46, 0.0, 0.0),
            ("SSP", 0.0, 0.08, 0.0),
            ("Potassium Sulphate", 0.0, 0.0, 0.50),
            ("Power Grow", 0.19, 0.19, 0.19),
        ];
        let entries = rows.into_iter().map(|(name, n, p, k)| {
            let composition = FertilizerComposition::new(name, n, p, k)
                .expect("reference fractions are valid");
            (name, composition)
        });
        Self::new(entries).expect("reference catalog is non-empty with unique names")
    }

    /// Resolve a fertilizer by exact name.
    ///
    /// # Errors
    /// - [`AgronomyError::UnknownFertilizer`] if the name is absent.
    pub fn lookup(&self, name: &str) -> AgroResult<&FertilizerComposition> {
        self.entries
            .get(name)
            .ok_or_else(|| AgronomyError::UnknownFertilizer { name: name.to_string() })
    }

    /// Whether the catalog has an entry named `name` (exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// `(name, composition)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FertilizerComposition)> {
        self.entries.iter().map(|(name, composition)| (name.as_str(), composition))
    }

    /// Fertilizer names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of fertilizers in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty. Construction forbids this; the method
    /// exists for symmetry with [`CropTable`](crate::agronomy::CropTable).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Fraction validation: non-finite and out-of-range values.
    // - Catalog construction: empty and duplicate rejection.
    // - Reference-catalog contents and iteration order.
    //
    // They intentionally DO NOT cover:
    // - LP formulation over the catalog (engine tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Accept a composition whose fractions are finite and within [0, 1].
    //
    // Given
    // -----
    // - A blended fertilizer delivering 0.19 on every axis.
    //
    // Expect
    // ------
    // - `Ok(composition)` exposing the fractions per axis.
    fn composition_accepts_unit_interval_fractions() {
        let composition = FertilizerComposition::new("Power Grow", 0.19, 0.19, 0.19)
            .expect("fractions in [0, 1] should be valid");

        for nutrient in Nutrient::ALL {
            assert_eq!(composition.fraction(nutrient), 0.19);
        }
    }

    #[test]
    // Purpose
    // -------
    // Reject compositions with non-finite or out-of-range fractions.
    //
    // Given
    // -----
    // - A NaN nitrogen fraction and a 1.2 potassium fraction.
    //
    // Expect
    // ------
    // - `AgronomyError::InvalidFraction` naming the offending axis.
    fn composition_rejects_bad_fractions() {
        let non_finite = FertilizerComposition::new("Bad", f64::NAN, 0.0, 0.0);
        assert!(matches!(
            non_finite,
            Err(AgronomyError::InvalidFraction { ref nutrient, .. }) if *nutrient == "N"
        ));

        let out_of_range = FertilizerComposition::new("Bad", 0.0, 0.0, 1.2);
        assert!(matches!(
            out_of_range,
            Err(AgronomyError::InvalidFraction { ref nutrient, .. }) if *nutrient == "K"
        ));
    }

    #[test]
    // Purpose
    // -------
    // An empty catalog is a construction error, not a valid (if useless)
    // variable set.
    //
    // Given
    // -----
    // - No entries.
    //
    // Expect
    // ------
    // - `AgronomyError::EmptyCatalog`.
    fn catalog_rejects_empty_set() {
        let result = FertilizerCatalog::new(Vec::<(String, FertilizerComposition)>::new());
        assert_eq!(result, Err(AgronomyError::EmptyCatalog));
    }

    #[test]
    // Purpose
    // -------
    // Duplicate names fail construction instead of overwriting.
    //
    // Given
    // -----
    // - Two entries named "Urea".
    //
    // Expect
    // ------
    // - `AgronomyError::DuplicateFertilizer { name: "Urea" }`.
    fn catalog_rejects_duplicate_names() {
        let urea = FertilizerComposition::new("Urea", 0.46, 0.0, 0.0).expect("valid");

        let result = FertilizerCatalog::new([("Urea", urea), ("Urea", urea)]);

        assert_eq!(result, Err(AgronomyError::DuplicateFertilizer { name: "Urea".to_string() }));
    }

    #[test]
    // Purpose
    // -------
    // Spot-check the reference catalog and its deterministic order.
    //
    // Given
    // -----
    // - The reference catalog.
    //
    // Expect
    // ------
    // - Four entries in lexicographic order; Urea delivers 0.46 N and
    //   nothing else; Potassium Sulphate delivers 0.50 K.
    fn reference_catalog_matches_published_fractions() {
        let catalog = FertilizerCatalog::reference();
        assert_eq!(catalog.len(), 4);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["Potassium Sulphate", "Power Grow", "SSP", "Urea"]);

        let urea = catalog.lookup("Urea").expect("Urea is in the reference catalog");
        assert_eq!(urea.fraction(Nutrient::Nitrogen), 0.46);
        assert_eq!(urea.fraction(Nutrient::Phosphorus), 0.0);
        assert_eq!(urea.fraction(Nutrient::Potassium), 0.0);

        let sulphate = catalog.lookup("Potassium Sulphate").expect("in the reference catalog");
        assert_eq!(sulphate.fraction(Nutrient::Potassium), 0.50);
    }
}
