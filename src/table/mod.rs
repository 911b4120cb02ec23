pub mod config;
pub mod errors;
pub mod interpolant;
pub mod io;
pub mod report;
pub mod traits;
pub use config::TableCfg;
pub use errors::{ErrorKind, TableError};
pub use interpolant::{Interpolant, DEFAULT_INTERPOLANT};
pub use lookup::{Entry, Table};
pub use traits::Interpolator;

pub mod lookup;
pub(crate) mod search;
pub(crate) mod spline;
