pub const ZERO_DEGREES_CENTIGRADE_IN_KELVIN: f64 = 273.15;
pub const TWENTY_FIVE_DEGREES_CENTIGRADE_IN_KELVIN: f64 = 298.15;

pub fn degrees_centigrade_to_kelvin(temperature_centigrade: f64) -> f64 {
    temperature_centigrade + ZERO_DEGREES_CENTIGRADE_IN_KELVIN
}

pub fn degrees_kelvin_to_centigrade(temperature_kelvin: f64) -> f64 {
    temperature_kelvin - ZERO_DEGREES_CENTIGRADE_IN_KELVIN
}
