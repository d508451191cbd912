//! Unit conversions for meteorological and biophysical quantities.
//!
//! Every scalar function works on `f64`. Single-argument conversions are
//! applied to arrays with `ndarray`'s `mapv`, e.g.
//! `tair_c.mapv(degrees_centigrade_to_kelvin)`. Functions of several inputs
//! have an `_array` form that zips equally shaped arrays.

pub mod humidity;
pub mod light;
pub mod magnitude;
pub mod mols_and_mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod tests;

pub use humidity::*;
pub use light::*;
pub use magnitude::*;
pub use mols_and_mass::*;
pub use temperature::*;
pub use time::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Unknown SI prefix symbol: '{0}'")]
    UnknownPrefix(String),

    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
}

/// Fail unless both shapes are identical.
pub(crate) fn check_shapes(left: &[usize], right: &[usize]) -> Result<(), ConversionError> {
    if left != right {
        return Err(ConversionError::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        });
    }
    Ok(())
}
