//! Natural cubic spline
//!
//! Second derivatives `m[i]` at each sample are found from C² continuity at
//! the interior points. For interior `i`:
//!
//! ```text
//! h[i-1] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i] m[i+1]
//!     = 6 [ (y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1] ]
//! ```
//!
//! with `m[0] = m[n-1] = 0`. The tridiagonal system is solved with one
//! forward elimination and one back substitution pass.
//!
//! On `[x[i], x[i+1]]`, with `a = (x[i+1] - xq) / h` and `b = 1 - a`:
//!
//! ```text
//! s(xq) = a y[i] + b y[i+1] + ((a³ - a) m[i] + (b³ - b) m[i+1]) h² / 6
//! ```

use super::search::spacings;

/// Second derivatives of the natural cubic spline through `(x, y)`.
///
/// Returns one coefficient per sample; both ends are zero. Tables with
/// fewer than three samples have no interior unknowns.
pub(crate) fn second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut m_full = vec![0.0; n];

    // number of interior unknowns
    let m = n.saturating_sub(2);
    if m == 0 {
        return m_full;
    }

    let h = spacings(x);

    // subdiag   a[k] = h[i-1]
    // diag      b[k] = 2(h[i-1]+h[i])
    // superdiag c[k] = h[i]
    let mut c_sup = vec![0.0; m];
    let mut rhs = vec![0.0; m];
    let mut diag = vec![0.0; m];

    // forward elimination
    for k in 0..m {
        let i = k + 1;
        let a_sub = h[i - 1];
        let b_diag = 2.0 * (h[i - 1] + h[i]);
        c_sup[k] = h[i];
        rhs[k] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);

        if k == 0 {
            diag[k] = b_diag;
        } else {
            let l = a_sub / diag[k - 1];
            diag[k] = b_diag - l * c_sup[k - 1];
            rhs[k] -= l * rhs[k - 1];
        }
    }

    // back substitution
    m_full[m] = rhs[m - 1] / diag[m - 1];
    for k in (0..m - 1).rev() {
        m_full[k + 1] = (rhs[k] - c_sup[k] * m_full[k + 2]) / diag[k];
    }

    m_full
}

/// Evaluate the spline on the interval `[x0, x1]`.
#[inline]
pub(crate) fn eval_interval(x0: f64, x1: f64, y0: f64, y1: f64, m0: f64, m1: f64, xq: f64) -> f64 {
    let h = x1 - x0;
    let a = (x1 - xq) / h;
    let b = (xq - x0) / h;
    // h * h may overflow on wide intervals; multiply in turn
    a * y0 + b * y1 + ((a * a * a - a) * m0 + (b * b * b - b) * m1) * h * h / 6.0
}
