//! Public value types for the mix optimizer.
//!
//! - [`MixRequest`]: one optimization call's crop identity and economics.
//! - [`MixOptions`]: engine configuration (reporting floor, verbosity).
//! - [`OptimalMix`]: normalized, validated success outcome.
//!
//! Convention: revenue is `expected_yield * unit_price`, a constant scalar.
//! The solver only ever decides fertilizer quantities; the reported profit
//! is the constant revenue minus the realized fertilizer cost, computed
//! from the solver's raw variable values before any reporting threshold is
//! applied.
use crate::agronomy::{CropRequirement, Nutrient};
use crate::optimization::{
    errors::MixResult,
    mix_optimizer::{
        types::{APPLICATION_FLOOR, CostMap, Money, Plan, Quantity},
        validation::{
            audit_delivery, validate_application_floor, validate_price, validate_profit,
            validate_yield,
        },
    },
};

/// One optimization call's inputs: crop identity, economics, and per-kg
/// fertilizer costs.
///
/// Transient by design — supplied fresh per call and never persisted by
/// the engine. The cost map is validated against the catalog when the
/// engine runs, since the request alone cannot know the variable set.
#[derive(Debug, Clone, PartialEq)]
pub struct MixRequest {
    /// Crop name, matched exactly against the requirement table.
    pub crop: String,
    /// Expected crop yield (kg/ha); finite and >= 0.
    pub expected_yield: f64,
    /// Selling price (currency per kg); finite and >= 0.
    pub unit_price: f64,
    /// Per-kg fertilizer costs keyed by catalog name.
    pub costs: CostMap,
}

impl MixRequest {
    /// Construct a validated request.
    ///
    /// # Errors
    /// - [`MixError::InvalidYield`](crate::optimization::MixError::InvalidYield)
    ///   / [`MixError::InvalidPrice`](crate::optimization::MixError::InvalidPrice)
    ///   for non-finite or negative economics.
    pub fn new(
        crop: impl Into<String>, expected_yield: f64, unit_price: f64, costs: CostMap,
    ) -> MixResult<Self> {
        validate_yield(expected_yield)?;
        validate_price(unit_price)?;
        Ok(Self { crop: crop.into(), expected_yield, unit_price, costs })
    }

    /// Gross revenue `yield * price` — a constant offset in the objective,
    /// never a decision variable.
    pub fn revenue(&self) -> Money {
        self.expected_yield * self.unit_price
    }
}

/// Engine-level configuration.
///
/// Constructor:
/// - `new(application_floor, verbose) -> MixResult<Self>` — validates the
///   floor; `verbose` prints a one-line solve summary to stderr.
///
/// Default:
/// - `application_floor`: [`APPLICATION_FLOOR`] (1e-3 kg)
/// - `verbose`: `false`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixOptions {
    pub application_floor: f64,
    pub verbose: bool,
}

impl MixOptions {
    /// Create validated options.
    ///
    /// # Errors
    /// - [`MixError::InvalidApplicationFloor`](crate::optimization::MixError::InvalidApplicationFloor)
    ///   if the floor is non-finite or negative.
    pub fn new(application_floor: f64, verbose: bool) -> MixResult<Self> {
        validate_application_floor(application_floor)?;
        Ok(Self { application_floor, verbose })
    }
}

impl Default for MixOptions {
    fn default() -> Self {
        Self { application_floor: APPLICATION_FLOOR, verbose: false }
    }
}

/// Canonical success outcome of one `optimize` call.
///
/// - `profit`: revenue minus realized fertilizer cost, from raw solver
///   values (not re-derived after thresholding).
/// - `revenue` / `input_cost`: the two profit components.
/// - `applications`: sparse plan; only quantities strictly above the
///   application floor appear. At-or-below-floor use is omitted entirely,
///   never reported as zero.
/// - `delivered`: total nutrient mass per axis (indexed by
///   [`Nutrient::index`]), from raw quantities.
/// - `status`: human-readable solver status (`"optimal"`).
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalMix {
    pub profit: Money,
    pub revenue: Money,
    pub input_cost: Money,
    pub applications: Plan,
    pub delivered: [f64; 3],
    pub status: String,
}

impl OptimalMix {
    /// Build a validated [`OptimalMix`] from raw solver state.
    ///
    /// Performs:
    /// - profit computation (`revenue - input_cost`) and finiteness check,
    /// - the per-axis delivery audit against the crop's minimums,
    /// - thresholding of raw quantities into the sparse plan.
    ///
    /// Raw quantities are expected to be already validated and clamped
    /// non-negative (see
    /// [`validation::validate_quantity`](crate::optimization::mix_optimizer::validation::validate_quantity)).
    ///
    /// # Errors
    /// - [`MixError::NonFiniteProfit`](crate::optimization::MixError::NonFiniteProfit)
    ///   if the objective value is not finite.
    /// - [`MixError::InfeasibleSolution`](crate::optimization::MixError::InfeasibleSolution)
    ///   if a delivery misses its minimum beyond tolerance.
    pub fn new(
        revenue: Money, input_cost: Money, raw_quantities: Vec<(String, Quantity)>,
        delivered: [f64; 3], requirement: &CropRequirement, application_floor: f64,
    ) -> MixResult<Self> {
        let profit = revenue - input_cost;
        validate_profit(profit)?;
        audit_delivery(&delivered, requirement)?;

        let applications: Plan = raw_quantities
            .into_iter()
            .filter(|(_, quantity)| *quantity > application_floor)
            .collect();

        Ok(Self {
            profit,
            revenue,
            input_cost,
            applications,
            delivered,
            status: "optimal".to_string(),
        })
    }

    /// Delivered nutrient mass on one axis (kg/ha), from raw quantities.
    pub fn delivered(&self, nutrient: Nutrient) -> f64 {
        self.delivered[nutrient.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agronomy::NutrientBand;
    use crate::optimization::errors::MixError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Request economics validation and the revenue product.
    // - Option floor validation and defaults.
    // - Outcome construction: thresholding semantics and the delivery
    //   audit.
    //
    // They intentionally DO NOT cover:
    // - LP formulation or solving (formulation/run/integration tests).
    // -------------------------------------------------------------------------

    fn requirement(n: f64, p: f64, k: f64) -> CropRequirement {
        CropRequirement::new(
            NutrientBand::new(Nutrient::Nitrogen, n, n + 10.0).expect("valid band"),
            NutrientBand::new(Nutrient::Phosphorus, p, p + 10.0).expect("valid band"),
            NutrientBand::new(Nutrient::Potassium, k, k + 10.0).expect("valid band"),
        )
    }

    #[test]
    // Purpose
    // -------
    // A request with clean economics is accepted and computes revenue as
    // the yield/price product.
    //
    // Given
    // -----
    // - Yield 30, price 20, empty cost map.
    //
    // Expect
    // ------
    // - `Ok(request)` with `revenue() == 600`.
    fn request_computes_constant_revenue() {
        let request = MixRequest::new("rice", 30.0, 20.0, CostMap::new())
            .expect("economics are valid");
        assert_eq!(request.revenue(), 600.0);
    }

    #[test]
    // Purpose
    // -------
    // Negative economics fail request construction.
    //
    // Given
    // -----
    // - Yield -1, then price -1.
    //
    // Expect
    // ------
    // - `InvalidYield` and `InvalidPrice` respectively.
    fn request_rejects_negative_economics() {
        let bad_yield = MixRequest::new("rice", -1.0, 20.0, CostMap::new());
        assert!(matches!(bad_yield, Err(MixError::InvalidYield { .. })));

        let bad_price = MixRequest::new("rice", 30.0, -1.0, CostMap::new());
        assert!(matches!(bad_price, Err(MixError::InvalidPrice { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Default options carry the crate floor; a negative floor is rejected.
    //
    // Given
    // -----
    // - `MixOptions::default()` and `MixOptions::new(-0.1, false)`.
    //
    // Expect
    // ------
    // - Default floor equals `APPLICATION_FLOOR`; the negative floor
    //   fails with `InvalidApplicationFloor`.
    fn options_default_and_floor_validation() {
        let options = MixOptions::default();
        assert_eq!(options.application_floor, APPLICATION_FLOOR);
        assert!(!options.verbose);

        let result = MixOptions::new(-0.1, false);
        assert!(matches!(result, Err(MixError::InvalidApplicationFloor { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Quantities at or below the floor are omitted from the plan, while
    // profit still reflects the untruncated values.
    //
    // Given
    // -----
    // - Raw quantities 5.0, 1e-3 (exactly at the floor), and 0.0 against a
    //   zero-minimum requirement.
    //
    // Expect
    // ------
    // - Only the 5.0 entry survives; profit is revenue minus the full
    //   input cost passed in.
    fn outcome_thresholds_but_profit_uses_raw_values() {
        let raw = vec![
            ("Urea".to_string(), 5.0),
            ("SSP".to_string(), 1e-3),
            ("Power Grow".to_string(), 0.0),
        ];

        let mix = OptimalMix::new(600.0, 350.058, raw, [2.3, 0.0, 0.0], &requirement(0.0, 0.0, 0.0), 1e-3)
            .expect("outcome should validate");

        assert_eq!(mix.applications.len(), 1);
        assert!(mix.applications.contains_key("Urea"));
        assert!((mix.profit - (600.0 - 350.058)).abs() < 1e-12);
        assert_eq!(mix.status, "optimal");
    }

    #[test]
    // Purpose
    // -------
    // An outcome whose deliveries miss a minimum is rejected by the audit.
    //
    // Given
    // -----
    // - Delivered N of 40 against a minimum of 80.
    //
    // Expect
    // ------
    // - `InfeasibleSolution` naming the N axis.
    fn outcome_audit_rejects_short_delivery() {
        let result = OptimalMix::new(
            600.0,
            100.0,
            vec![("Urea".to_string(), 86.9)],
            [40.0, 0.0, 0.0],
            &requirement(80.0, 0.0, 0.0),
            1e-3,
        );

        assert!(matches!(
            result,
            Err(MixError::InfeasibleSolution { nutrient: "N", .. })
        ));
    }
}
