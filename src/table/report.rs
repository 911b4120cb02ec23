//! Defines the struct returned by batch table evaluation.
//!
//! [`LookupReport`] records the interpolant used, the table size and
//! the values produced for each requested point.

use crate::table::interpolant::Interpolant;

/// Summary of a batch evaluation.
///
/// [`LookupReport`]
/// - `interpolant_name` : name of the interpolant (e.g. `"spline"`)
/// - `n_entries`        : number of `(arg, val)` samples in the table
/// - `n_evaluated`      : number of points requested
/// - `evaluated`        : table values at each requested point
#[derive(Debug, Clone)]
pub struct LookupReport {
    pub interpolant_name: &'static str,
    pub n_entries: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl LookupReport {
    pub fn new(interpolant: Interpolant, n_entries: usize, n_evaluated: usize) -> Self {
        Self {
            interpolant_name: interpolant.name(),
            n_entries,
            n_evaluated,
            evaluated: Vec::new(),
        }
    }
}
