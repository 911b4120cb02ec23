//! Ordered search over sorted sample arguments.

use std::cmp::Ordering;

/// Position of a query relative to the stored arguments.
/// - [`Bracket::Exact`]   query equals `args[idx]`
/// - [`Bracket::Between`] `args[lo] < query < args[lo + 1]`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Bracket {
    Exact(usize),
    Between(usize),
}

/// Binary search for the bracketing interval of `xq`.
///
/// Caller guarantees `args` is strictly increasing and
/// `args[0] <= xq <= args[n - 1]`.
pub(crate) fn locate(args: &[f64], xq: f64) -> Bracket {
    match args.binary_search_by(|xi| {
        if *xi < xq      { Ordering::Less    }
        else if *xi > xq { Ordering::Greater }
        else             { Ordering::Equal   }
    }) {
        Ok(idx) => Bracket::Exact(idx),
        // args[idx - 1] < xq < args[idx]; idx > 0 since xq >= args[0]
        Err(idx) => Bracket::Between(idx - 1),
    }
}

/// Spacings between adjacent arguments.
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}
