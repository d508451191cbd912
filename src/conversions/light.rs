use super::temperature::ZERO_DEGREES_CENTIGRADE_IN_KELVIN;
use super::{check_shapes, ConversionError};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

pub const PHOTOSYNTHETICALLY_ACTIVE_RADIATION_PER_UNIT_SHORT_WAVE_RADIATION: f64 = 0.5;
/// J umol-1
pub const JOULES_PER_MICRO_MOLE_OF_LIGHT: f64 = 1.0 / 4.57;
/// Relative humidity floor applied before estimating longwave radiation
pub const LWDOWN_MIN_RELATIVE_HUMIDITY: f64 = 0.05;

pub fn short_wave_to_photosynthetically_active_radiation(short_wave_radiation: f64) -> f64 {
    short_wave_radiation * PHOTOSYNTHETICALLY_ACTIVE_RADIATION_PER_UNIT_SHORT_WAVE_RADIATION
}

pub fn photosynthetically_active_radiation_to_short_wave(par: f64) -> f64 {
    par / PHOTOSYNTHETICALLY_ACTIVE_RADIATION_PER_UNIT_SHORT_WAVE_RADIATION
}

/// Photons of light (umol) to energy (J)
pub fn micro_moles_of_light_to_joules(micro_moles_of_light: f64) -> f64 {
    micro_moles_of_light * JOULES_PER_MICRO_MOLE_OF_LIGHT
}

/// Energy (J) to photons of light (umol)
pub fn light_energy_in_joules_to_micro_moles_of_light(light_energy_joules: f64) -> f64 {
    light_energy_joules / JOULES_PER_MICRO_MOLE_OF_LIGHT
}

/// Synthesise downward longwave radiation (W/m^2) from air temperature (K)
/// and relative humidity (0-1).
///
/// Abramowitz et al. (2012), Geophysical Research Letters, 39, L04808.
/// Relative humidity is floored at 0.05 before use.
pub fn estimate_lwdown(tair: f64, rh: f64) -> f64 {
    let sat_vapress = 611.2
        * (17.67 * ((tair - ZERO_DEGREES_CENTIGRADE_IN_KELVIN) / (tair - 29.65))).exp();
    let vapress = rh.max(LWDOWN_MIN_RELATIVE_HUMIDITY) * sat_vapress;

    2.648 * tair + 0.0346 * vapress - 474.0
}

/// Element-wise [`estimate_lwdown`] over equally shaped arrays
pub fn estimate_lwdown_array<S1, S2, D>(
    tair: &ArrayBase<S1, D>,
    rh: &ArrayBase<S2, D>,
) -> Result<Array<f64, D>, ConversionError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    check_shapes(tair.shape(), rh.shape())?;

    Ok(Zip::from(tair)
        .and(rh)
        .map_collect(|&tair, &rh| estimate_lwdown(tair, rh)))
}
