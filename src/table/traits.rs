use crate::table::errors::TableError;

pub trait Interpolator {
    /// evaluates single point
    fn eval(&self, x: f64) -> Result<f64, TableError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, TableError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
