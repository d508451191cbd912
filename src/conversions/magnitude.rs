//! Conversion between SI magnitude prefixes.

use super::ConversionError;
use ndarray::{Array, ArrayBase, Data, Dimension};
use std::fmt;
use std::str::FromStr;

/// SI unit prefix, from yotta (10^24) down to yocto (10^-24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    Unit,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

/// Prefix symbols and their power-of-ten exponents
pub static SI_PREFIXES: [(SiPrefix, &str, i32); 21] = [
    (SiPrefix::Yotta, "Y", 24),
    (SiPrefix::Zetta, "Z", 21),
    (SiPrefix::Exa, "E", 18),
    (SiPrefix::Peta, "P", 15),
    (SiPrefix::Tera, "T", 12),
    (SiPrefix::Giga, "G", 9),
    (SiPrefix::Mega, "M", 6),
    (SiPrefix::Kilo, "k", 3),
    (SiPrefix::Hecto, "h", 2),
    (SiPrefix::Deca, "da", 1),
    (SiPrefix::Unit, "", 0),
    (SiPrefix::Deci, "d", -1),
    (SiPrefix::Centi, "c", -2),
    (SiPrefix::Milli, "m", -3),
    (SiPrefix::Micro, "u", -6),
    (SiPrefix::Nano, "n", -9),
    (SiPrefix::Pico, "p", -12),
    (SiPrefix::Femto, "f", -15),
    (SiPrefix::Atto, "a", -18),
    (SiPrefix::Zepto, "z", -21),
    (SiPrefix::Yocto, "y", -24),
];

impl SiPrefix {
    fn entry(self) -> &'static (SiPrefix, &'static str, i32) {
        // the table holds every variant exactly once
        &SI_PREFIXES[self as usize]
    }

    pub fn symbol(self) -> &'static str {
        self.entry().1
    }

    pub fn exponent(self) -> i32 {
        self.entry().2
    }

    /// Power-of-ten scale of this prefix
    pub fn scale(self) -> f64 {
        10f64.powi(self.exponent())
    }
}

impl FromStr for SiPrefix {
    type Err = ConversionError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        SI_PREFIXES
            .iter()
            .find(|(_, s, _)| *s == symbol)
            .map(|(prefix, _, _)| *prefix)
            .ok_or_else(|| ConversionError::UnknownPrefix(symbol.to_string()))
    }
}

impl fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Factor that takes a value from the `current` prefix to the `target` prefix
pub fn magnitude_scale(current: SiPrefix, target: SiPrefix) -> f64 {
    10f64.powi(current.exponent() - target.exponent())
}

/// Convert `value` between SI magnitudes given by prefix symbols,
/// e.g. `magnitude_conversion(1.5, "k", "")` gives `1500.0`.
pub fn magnitude_conversion(
    value: f64,
    symbol_current_magnitude: &str,
    symbol_target_magnitude: &str,
) -> Result<f64, ConversionError> {
    let current: SiPrefix = symbol_current_magnitude.parse()?;
    let target: SiPrefix = symbol_target_magnitude.parse()?;
    Ok(value * magnitude_scale(current, target))
}

/// Array form of [`magnitude_conversion`]
pub fn magnitude_conversion_array<S, D>(
    values: &ArrayBase<S, D>,
    symbol_current_magnitude: &str,
    symbol_target_magnitude: &str,
) -> Result<Array<f64, D>, ConversionError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let current: SiPrefix = symbol_current_magnitude.parse()?;
    let target: SiPrefix = symbol_target_magnitude.parse()?;
    let scale = magnitude_scale(current, target);
    Ok(values.mapv(|v| v * scale))
}
