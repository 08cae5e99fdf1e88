//! Nutrient axes shared by the requirement and composition tables.
//!
//! - [`Nutrient`] names the three macro-nutrient axes (N/P/K).
//!
//! Notes
//! -----
//! - This enum is the only coupling between [`crate::agronomy::requirements`]
//!   and [`crate::agronomy::composition`]; the two tables stay independent
//!   record types keyed by their own string identifiers.

/// One of the three macro-nutrient axes tracked per crop and per fertilizer.
///
/// The axes order in [`Nutrient::ALL`] (N, P, K) is canonical: constraint
/// rows, delivery audits, and per-axis arrays all follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Nutrient {
    /// Nitrogen.
    Nitrogen,
    /// Phosphorus.
    Phosphorus,
    /// Potassium.
    Potassium,
}

impl Nutrient {
    /// Canonical axis order used for constraint rows and delivery arrays.
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    /// Stable position of this axis inside per-axis arrays (N = 0, P = 1, K = 2).
    pub fn index(self) -> usize {
        match self {
            Nutrient::Nitrogen => 0,
            Nutrient::Phosphorus => 1,
            Nutrient::Potassium => 2,
        }
    }

    /// Conventional chemical symbol ("N", "P", "K") used in messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
