//! Defines the interpolation modes a table may be built with.
//!
//! Provides the [`Interpolant`] enum, a closed set of strategies selected
//! once at construction. Each mode has a stable symbolic name used for
//! parsing, display and persistence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::TableError;

/// Interpolant used when a [`crate::table::TableCfg`] is built without one.
pub const DEFAULT_INTERPOLANT: Interpolant = Interpolant::Spline;

/// Interpolation modes.
/// - [`Interpolant::Linear`] straight line between bracketing samples
/// - [`Interpolant::Spline`] natural cubic spline
/// - [`Interpolant::Floor`]  value of the sample at or below the query
/// - [`Interpolant::Ceil`]   value of the sample at or above the query
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolant {
    Linear,
    Spline,
    Floor,
    Ceil,
}

impl Interpolant {
    pub const ALL: [Interpolant; 4] = [
        Interpolant::Linear,
        Interpolant::Spline,
        Interpolant::Floor,
        Interpolant::Ceil,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Interpolant::Linear => "linear",
            Interpolant::Spline => "spline",
            Interpolant::Floor => "floor",
            Interpolant::Ceil => "ceil",
        }
    }
}

impl fmt::Display for Interpolant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolant {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interpolant::ALL
            .into_iter()
            .find(|interp| interp.name() == s)
            .ok_or_else(|| TableError::UnknownInterpolant { name: s.to_string() })
    }
}
