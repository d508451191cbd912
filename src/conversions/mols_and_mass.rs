/// g mol-1
pub const GRAMS_PER_MOLE_OF_WATER: f64 = 18.02;
/// g mol-1
pub const GRAMS_PER_MOLE_OF_CARBON: f64 = 12.0;

pub fn mole_water_to_gram(value_moles: f64) -> f64 {
    value_moles * GRAMS_PER_MOLE_OF_WATER
}

pub fn gram_water_to_mole(value_grams: f64) -> f64 {
    value_grams / GRAMS_PER_MOLE_OF_WATER
}

pub fn mole_carbon_to_grams(value_moles: f64) -> f64 {
    value_moles * GRAMS_PER_MOLE_OF_CARBON
}

pub fn grams_carbon_to_moles(value_grams: f64) -> f64 {
    value_grams / GRAMS_PER_MOLE_OF_CARBON
}
