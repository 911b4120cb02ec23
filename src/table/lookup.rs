//! Immutable lookup table
//!
//! A [`Table`] owns `(arg, val)` samples sorted by strictly increasing
//! argument and an [`Interpolant`] fixed at construction. Spline tables
//! carry the natural-spline second derivatives, computed once in
//! [`Table::new`] and never touched again.
//!
//! Evaluation is restricted to the closed domain `[arg_min, arg_max]`;
//! there is no extrapolation.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::table::config::non_finite_idx;
use crate::table::errors::TableError;
use crate::table::interpolant::Interpolant;
use crate::table::report::LookupReport;
use crate::table::search::{locate, Bracket};
use crate::table::spline;
use crate::table::traits::Interpolator;

/// One `(argument, value)` sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Entry {
    arg: f64,
    val: f64,
}

impl Entry {
    pub fn arg(&self) -> f64 { self.arg }
    pub fn val(&self) -> f64 { self.val }
}

/// One-dimensional lookup table.
///
/// Construct with [`Table::new`] or [`crate::table::TableCfg`]. Equality
/// compares entries and interpolant exactly; the spline cache is derived
/// state and takes no part in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TableRecord", into = "TableRecord")]
pub struct Table {
    args: Vec<f64>,
    vals: Vec<f64>,
    interpolant: Interpolant,
    // second derivatives, present iff interpolant is Spline
    spline_coeffs: Option<Vec<f64>>,
}

impl Table {
    /// Builds a table from parallel `args` / `vals`.
    ///
    /// Samples are paired index-wise and stably sorted by argument.
    ///
    /// # Errors
    /// - [`TableError::EmptyInput`] if either slice is empty
    /// - [`TableError::UnequalLength`] if lengths differ
    /// - [`TableError::NonFiniteVec`] if any sample is NaN or infinite
    /// - [`TableError::DuplicateArg`] if two samples share an argument
    /// - [`TableError::DomainTooWide`] if `arg_max - arg_min` overflows
    pub fn new(args: &[f64], vals: &[f64], interpolant: Interpolant) -> Result<Self, TableError> {
        validate_inputs(args, vals).inspect_err(|e| debug!("rejected table: {e}"))?;

        let mut entries: Vec<Entry> = args
            .iter()
            .zip(vals)
            .map(|(&arg, &val)| Entry { arg, val })
            .collect();
        entries.sort_by(|a, b| a.arg.total_cmp(&b.arg));

        if let Some(w) = entries.windows(2).find(|w| w[0].arg == w[1].arg) {
            let err = TableError::DuplicateArg { arg: w[0].arg };
            debug!("rejected table: {err}");
            return Err(err);
        }

        let (arg_min, arg_max) = (entries[0].arg, entries[entries.len() - 1].arg);
        if !(arg_max - arg_min).is_finite() {
            let err = TableError::DomainTooWide { arg_min, arg_max };
            debug!("rejected table: {err}");
            return Err(err);
        }

        let (args, vals): (Vec<f64>, Vec<f64>) = entries.iter().map(|e| (e.arg, e.val)).unzip();

        let spline_coeffs = match interpolant {
            Interpolant::Spline => {
                trace!("solving natural spline system over {} samples", args.len());
                Some(spline::second_derivatives(&args, &vals))
            }
            Interpolant::Linear | Interpolant::Floor | Interpolant::Ceil => None,
        };

        debug!(
            "built {} table with {} entries on [{}, {}]",
            interpolant,
            args.len(),
            args[0],
            args[args.len() - 1],
        );

        Ok(Self { args, vals, interpolant, spline_coeffs })
    }

    /// Builds a table selecting the interpolant by name.
    pub fn with_interpolant_name(args: &[f64], vals: &[f64], name: &str) -> Result<Self, TableError> {
        let interpolant = name.parse::<Interpolant>()?;
        Self::new(args, vals, interpolant)
    }

    /// Smallest stored argument.
    pub fn arg_min(&self) -> f64 { self.args[0] }

    /// Largest stored argument.
    pub fn arg_max(&self) -> f64 { self.args[self.args.len() - 1] }

    pub fn len(&self) -> usize { self.args.len() }

    /// Always `false`; construction rejects empty input.
    pub fn is_empty(&self) -> bool { self.args.is_empty() }

    pub fn interpolant(&self) -> Interpolant { self.interpolant }

    /// Sorted arguments.
    pub fn args(&self) -> &[f64] { &self.args }

    /// Values, in argument order.
    pub fn vals(&self) -> &[f64] { &self.vals }

    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.args.iter().zip(&self.vals).map(|(&arg, &val)| Entry { arg, val })
    }

    /// Owned copy of the sorted arguments, for persistence.
    pub fn export_args(&self) -> Vec<f64> { self.args.clone() }

    /// Owned copy of the values, for persistence.
    pub fn export_vals(&self) -> Vec<f64> { self.vals.clone() }

    /// Symbolic interpolant name, for persistence.
    pub fn export_interpolant(&self) -> &'static str { self.interpolant.name() }

    /// Evaluates the table at `xq`.
    ///
    /// # Behavior
    /// - exact hit on a stored argument returns the stored value
    /// - otherwise the bracketing interval `[x[i], x[i+1]]` is found by
    ///   binary search and the interpolant applied
    ///
    /// # Errors
    /// - [`TableError::OutOfBounds`] if `xq` lies outside `[arg_min, arg_max]`
    ///   (NaN is always out of bounds)
    /// - [`TableError::InvalidInterpolant`] if a spline table lost its
    ///   coefficient cache
    pub fn lookup(&self, xq: f64) -> Result<f64, TableError> {
        let (arg_min, arg_max) = (self.arg_min(), self.arg_max());
        if !(arg_min..=arg_max).contains(&xq) {
            debug!("lookup at {xq} outside [{arg_min}, {arg_max}]");
            return Err(TableError::OutOfBounds { got: xq, arg_min, arg_max });
        }

        let i = match locate(&self.args, xq) {
            Bracket::Exact(idx) => return Ok(self.vals[idx]),
            Bracket::Between(i) => i,
        };

        let (x0, x1) = (self.args[i], self.args[i + 1]);
        let (y0, y1) = (self.vals[i], self.vals[i + 1]);

        let yq = match self.interpolant {
            Interpolant::Linear => {
                let t = (xq - x0) / (x1 - x0);
                y0 + t * (y1 - y0)
            }
            Interpolant::Floor => y0,
            Interpolant::Ceil => y1,
            Interpolant::Spline => {
                let m = self
                    .spline_coeffs
                    .as_deref()
                    .filter(|m| m.len() == self.args.len())
                    .ok_or(TableError::InvalidInterpolant { interpolant: self.interpolant })?;
                spline::eval_interval(x0, x1, y0, y1, m[i], m[i + 1], xq)
            }
        };

        Ok(yq)
    }

    /// Evaluates every point in `xs`, stopping at the first failure.
    pub fn evaluate(&self, xs: &[f64]) -> Result<LookupReport, TableError> {
        let mut report = LookupReport::new(self.interpolant, self.len(), xs.len());
        report.evaluated = self.eval_many(xs)?;
        Ok(report)
    }
}

impl Interpolator for Table {
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, TableError> {
        self.lookup(x)
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.interpolant == other.interpolant
            && self.args == other.args
            && self.vals == other.vals
    }
}

fn validate_inputs(args: &[f64], vals: &[f64]) -> Result<(), TableError> {
    if args.is_empty() || vals.is_empty() {
        return Err(TableError::EmptyInput);
    }
    if args.len() != vals.len() {
        return Err(TableError::UnequalLength { args_len: args.len(), vals_len: vals.len() });
    }
    if let Some(idx) = non_finite_idx(args) {
        return Err(TableError::NonFiniteVec { input: "args", idx });
    }
    if let Some(idx) = non_finite_idx(vals) {
        return Err(TableError::NonFiniteVec { input: "vals", idx });
    }
    Ok(())
}

/// Persisted form of a [`Table`]: samples plus interpolant name.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableRecord {
    args: Vec<f64>,
    vals: Vec<f64>,
    interpolant: Interpolant,
}

impl TryFrom<TableRecord> for Table {
    type Error = TableError;

    fn try_from(rec: TableRecord) -> Result<Self, Self::Error> {
        Table::new(&rec.args, &rec.vals, rec.interpolant)
    }
}

impl From<Table> for TableRecord {
    fn from(t: Table) -> Self {
        Self { args: t.args, vals: t.vals, interpolant: t.interpolant }
    }
}
