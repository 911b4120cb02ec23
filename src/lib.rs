//! One-dimensional lookup tables.
//!
//! A [`table::Table`] maps a real argument to a real value from a finite set
//! of sorted samples, with linear, natural cubic spline, floor or ceil
//! interpolation between them. Tables are immutable once built and can be
//! shared across threads behind an `Arc`.
//!
//! ```
//! use tabula::table::{Interpolant, Table};
//!
//! let t = Table::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0], Interpolant::Linear)?;
//! assert_eq!(t.lookup(1.5)?, 2.5);
//! assert!(t.lookup(-0.1).is_err());
//! # Ok::<(), tabula::table::TableError>(())
//! ```

pub mod table;
