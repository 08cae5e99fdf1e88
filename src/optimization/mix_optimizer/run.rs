//! Execution helper that solves an assembled [`MixProgram`] and returns a
//! crate-friendly [`OptimalMix`].
//!
//! This is the only module that names an LP backend (`default_solver`,
//! the pure-Rust microlp simplex under this crate's feature set). Solver
//! termination is normalized through `From<ResolutionError>`: infeasible
//! and unbounded both surface as "no optimal solution" — never a
//! fictitious infinite profit.
use crate::agronomy::CropRequirement;
use crate::optimization::{
    errors::MixResult,
    mix_optimizer::{
        formulation::MixProgram,
        traits::{MixOptions, OptimalMix},
        validation::validate_quantity,
    },
};
use good_lp::{Solution, SolverModel, default_solver};

/// Solve one assembled program.
///
/// Wires the objective and constraint rows into the backend, runs the
/// single blocking solve, then converts the raw solution into an
/// [`OptimalMix`]:
/// - each variable value is validated (finite, round-off clamped to 0),
/// - realized cost and per-axis deliveries are accumulated from the raw
///   values,
/// - profit and the feasibility audit happen inside [`OptimalMix::new`],
///   along with thresholding into the sparse plan.
///
/// # Errors
/// - [`MixError::NoOptimalSolution`](crate::optimization::MixError::NoOptimalSolution)
///   for infeasible or unbounded programs.
/// - [`MixError::Backend`](crate::optimization::MixError::Backend) for any
///   other solver fault.
/// - Propagates solution-validation errors from `validate_quantity` /
///   `OptimalMix::new`.
pub fn run_mix(
    program: MixProgram, requirement: &CropRequirement, opts: &MixOptions,
) -> MixResult<OptimalMix> {
    if opts.verbose {
        eprintln!(
            "solve: {} fertilizer columns, 3 nutrient rows, revenue = {:.6}",
            program.columns.len(),
            program.revenue
        );
    }

    let MixProgram { variables, objective, constraints, columns, revenue } = program;
    let mut model = variables.maximise(objective).using(default_solver);
    for constraint in constraints {
        model = model.with(constraint);
    }
    let solution = model.solve()?;

    let mut raw_quantities = Vec::with_capacity(columns.len());
    let mut input_cost = 0.0;
    let mut delivered = [0.0; 3];
    for column in &columns {
        let quantity = validate_quantity(&column.name, solution.value(column.variable))?;
        input_cost += column.unit_cost * quantity;
        for (axis, fraction) in column.fractions.iter().enumerate() {
            delivered[axis] += fraction * quantity;
        }
        raw_quantities.push((column.name.clone(), quantity));
    }

    OptimalMix::new(revenue, input_cost, raw_quantities, delivered, requirement, opts.application_floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agronomy::{
        CropRequirement, FertilizerCatalog, FertilizerComposition, Nutrient, NutrientBand,
    };
    use crate::optimization::errors::MixError;
    use crate::optimization::mix_optimizer::{traits::MixRequest, types::CostMap};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Termination normalization on real backend runs: unbounded and
    //   infeasible programs map onto `NoOptimalSolution`.
    // - The zero-requirement edge case: no fertilizer use is ever forced.
    //
    // They intentionally DO NOT cover:
    // - Cost-map validation (the api layer rejects bad costs before the
    //   runner is reached; these tests bypass it deliberately).
    // - Full reference scenarios (integration tests).
    // -------------------------------------------------------------------------

    fn requirement(n: f64, p: f64, k: f64) -> CropRequirement {
        CropRequirement::new(
            NutrientBand::new(Nutrient::Nitrogen, n, n + 50.0).expect("valid band"),
            NutrientBand::new(Nutrient::Phosphorus, p, p + 50.0).expect("valid band"),
            NutrientBand::new(Nutrient::Potassium, k, k + 50.0).expect("valid band"),
        )
    }

    fn urea_only_catalog() -> FertilizerCatalog {
        let urea = FertilizerComposition::new("Urea", 0.46, 0.0, 0.0).expect("valid fractions");
        FertilizerCatalog::new([("Urea", urea)]).expect("catalog is valid")
    }

    #[test]
    // Purpose
    // -------
    // A negative cost makes the objective unbounded; the runner must
    // report "no optimal solution" rather than an infinite profit.
    //
    // Given
    // -----
    // - A single-fertilizer catalog priced at -1 (bypassing the api-level
    //   cost hardening) and an all-zero requirement.
    //
    // Expect
    // ------
    // - `NoOptimalSolution { status: "unbounded" }`.
    fn unbounded_program_reports_no_optimal_solution() {
        // Arrange
        let catalog = urea_only_catalog();
        let costs = CostMap::from([("Urea".to_string(), -1.0)]);
        let request = MixRequest::new("test", 10.0, 1.0, costs).expect("economics are valid");
        let requirement = requirement(0.0, 0.0, 0.0);
        let program = MixProgram::build(&requirement, &catalog, &request)
            .expect("formulation should succeed");

        // Act
        let result = run_mix(program, &requirement, &MixOptions::default());

        // Assert
        assert_eq!(result.err(), Some(MixError::NoOptimalSolution { status: "unbounded" }));
    }

    #[test]
    // Purpose
    // -------
    // A positive minimum on an axis no fertilizer covers is infeasible
    // and must surface under the same reporting reason.
    //
    // Given
    // -----
    // - A urea-only catalog (N coverage only) and a P minimum of 40.
    //
    // Expect
    // ------
    // - `NoOptimalSolution { status: "infeasible" }`.
    fn uncovered_axis_reports_no_optimal_solution() {
        // Arrange
        let catalog = urea_only_catalog();
        let costs = CostMap::from([("Urea".to_string(), 70.0)]);
        let request = MixRequest::new("test", 10.0, 1.0, costs).expect("economics are valid");
        let requirement = requirement(0.0, 40.0, 0.0);
        let program = MixProgram::build(&requirement, &catalog, &request)
            .expect("formulation should succeed");

        // Act
        let result = run_mix(program, &requirement, &MixOptions::default());

        // Assert
        assert_eq!(result.err(), Some(MixError::NoOptimalSolution { status: "infeasible" }));
    }

    #[test]
    // Purpose
    // -------
    // With all minimums at zero, buying nothing is optimal: the plan is
    // empty and profit equals revenue exactly.
    //
    // Given
    // -----
    // - The urea-only catalog at a positive cost and an all-zero
    //   requirement with revenue 10.
    //
    // Expect
    // ------
    // - Empty applications, `profit == revenue == 10`.
    fn zero_minimums_force_no_fertilizer_use() {
        // Arrange
        let catalog = urea_only_catalog();
        let costs = CostMap::from([("Urea".to_string(), 70.0)]);
        let request = MixRequest::new("test", 10.0, 1.0, costs).expect("economics are valid");
        let requirement = requirement(0.0, 0.0, 0.0);
        let program = MixProgram::build(&requirement, &catalog, &request)
            .expect("formulation should succeed");

        // Act
        let mix = run_mix(program, &requirement, &MixOptions::default())
            .expect("zero-requirement program is trivially solvable");

        // Assert
        assert!(mix.applications.is_empty());
        assert_eq!(mix.profit, 10.0);
        assert_eq!(mix.revenue, 10.0);
        assert_eq!(mix.input_cost, 0.0);
    }
}
