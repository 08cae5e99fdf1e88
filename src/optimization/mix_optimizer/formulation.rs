//! Builds the linear program for one optimization call.
//!
//! The formulation is deliberately backend-agnostic: it produces `good_lp`
//! model pieces (variables, one objective expression, three constraint
//! rows) and never names a solver — backend wiring lives in `run`. One
//! non-negative, unbounded decision variable is introduced per catalog
//! fertilizer, in lexicographic name order so repeated calls build
//! identical programs.
use crate::agronomy::{CropRequirement, FertilizerCatalog, Nutrient};
use crate::optimization::{
    errors::{MixError, MixResult},
    mix_optimizer::{traits::MixRequest, types::Money},
};
use good_lp::{Constraint, Expression, ProblemVariables, Variable, variable};

/// One decision column: a catalog fertilizer, its variable, its per-kg
/// cost, and its nutrient fractions (indexed by [`Nutrient::index`]).
#[derive(Debug, Clone)]
pub struct MixColumn {
    pub name: String,
    pub variable: Variable,
    pub unit_cost: Money,
    pub fractions: [f64; 3],
}

/// The assembled LP for one call:
///
/// - maximize `revenue - Σ cost[f]·x[f]` (revenue is a constant offset;
///   the solver equivalently minimizes total cost, but the reported
///   objective includes the offset),
/// - subject to `Σ fraction[f][axis]·x[f] >= minimum(axis)` for each of
///   the three nutrient axes,
/// - with `x[f] >= 0`, unbounded above.
///
/// Requirement maximums are never constrained against.
pub struct MixProgram {
    pub variables: ProblemVariables,
    pub objective: Expression,
    pub constraints: Vec<Constraint>,
    pub columns: Vec<MixColumn>,
    pub revenue: Money,
}

impl MixProgram {
    /// Assemble the program for a resolved crop requirement.
    ///
    /// # Errors
    /// - [`MixError::MissingCost`] if a catalog fertilizer has no cost
    ///   entry. Callers validate the cost map up front; this check keeps
    ///   the formulation total rather than panicking on a gap.
    pub fn build(
        requirement: &CropRequirement, catalog: &FertilizerCatalog, request: &MixRequest,
    ) -> MixResult<Self> {
        let mut variables = ProblemVariables::new();
        let mut columns = Vec::with_capacity(catalog.len());

        for (name, composition) in catalog.iter() {
            let unit_cost = *request
                .costs
                .get(name)
                .ok_or_else(|| MixError::MissingCost { fertilizer: name.to_string() })?;
            let decision = variables.add(variable().min(0.0));
            let mut fractions = [0.0; 3];
            for nutrient in Nutrient::ALL {
                fractions[nutrient.index()] = composition.fraction(nutrient);
            }
            columns.push(MixColumn {
                name: name.to_string(),
                variable: decision,
                unit_cost,
                fractions,
            });
        }

        let revenue = request.revenue();
        let mut objective = Expression::from(revenue);
        for column in &columns {
            objective += column.variable * (-column.unit_cost);
        }

        let mut constraints = Vec::with_capacity(Nutrient::ALL.len());
        for nutrient in Nutrient::ALL {
            let mut delivery = Expression::from(0.0);
            for column in &columns {
                delivery += column.variable * column.fractions[nutrient.index()];
            }
            constraints.push(delivery.geq(requirement.minimum(nutrient)));
        }

        Ok(Self { variables, objective, constraints, columns, revenue })
    }
}
