#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::optimization::mix_optimizer::CostMap;

/// Extract a fertilizer cost map from a Python object.
///
/// Accepts any mapping of `str` to `float` (a plain `dict` in practice)
/// and converts it into the engine's [`CostMap`]. Value-level rules
/// (coverage, finiteness, sign) are enforced later by the engine's own
/// validation; this helper only handles shape and types.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_cost_map<'py>(raw_costs: &Bound<'py, PyAny>) -> PyResult<CostMap> {
    raw_costs.extract::<CostMap>().map_err(|_| {
        PyTypeError::new_err("expected a mapping of fertilizer name (str) to per-kg cost (float)")
    })
}
