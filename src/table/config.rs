//! Builder configuration for lookup tables.
//!
//! [`TableCfg`] fields
//! - `args`        : sample arguments, any order
//! - `vals`        : sample values, parallel to `args`
//! - `interpolant` : evaluation mode; [`DEFAULT_INTERPOLANT`] unless set
//!
//! Setters validate eagerly so a bad input is reported at the call that
//! supplied it. [`TableCfg::build`] runs the full construction checks.

use crate::table::errors::TableError;
use crate::table::interpolant::{Interpolant, DEFAULT_INTERPOLANT};
use crate::table::lookup::Table;

#[derive(Debug, Copy, Clone)]
pub struct TableCfg<'a> {
    args: &'a [f64],
    vals: &'a [f64],
    interpolant: Interpolant,
}

impl Default for TableCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TableCfg<'a> {
    pub fn new() -> Self {
        Self {
            args: &[],
            vals: &[],
            interpolant: DEFAULT_INTERPOLANT,
        }
    }

    // getters
    pub fn args(&self) -> &'a [f64] { self.args }
    pub fn vals(&self) -> &'a [f64] { self.vals }
    pub fn interpolant(&self) -> Interpolant { self.interpolant }

    pub fn set_args(mut self, v: &'a [f64]) -> Result<Self, TableError> {
        check_samples("args", v)?;

        // length agreement check
        // symmetric with set_vals
        let vals_len = self.vals.len();
        if vals_len != 0 && vals_len != v.len() {
            return Err(TableError::UnequalLength { args_len: v.len(), vals_len });
        }

        self.args = v;
        Ok(self)
    }

    pub fn set_vals(mut self, v: &'a [f64]) -> Result<Self, TableError> {
        check_samples("vals", v)?;

        let args_len = self.args.len();
        if args_len != 0 && args_len != v.len() {
            return Err(TableError::UnequalLength { args_len, vals_len: v.len() });
        }

        self.vals = v;
        Ok(self)
    }

    pub fn set_interpolant(mut self, interp: Interpolant) -> Self {
        self.interpolant = interp;
        self
    }

    pub fn set_interpolant_name(mut self, name: &str) -> Result<Self, TableError> {
        self.interpolant = name.parse()?;
        Ok(self)
    }

    pub fn build(self) -> Result<Table, TableError> {
        Table::new(self.args, self.vals, self.interpolant)
    }
}

fn check_samples(input: &'static str, v: &[f64]) -> Result<(), TableError> {
    if v.is_empty() {
        return Err(TableError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(TableError::NonFiniteVec { input, idx });
    }
    Ok(())
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
