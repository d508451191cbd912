use super::temperature::degrees_kelvin_to_centigrade;
use super::{check_shapes, ConversionError};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

/// Ratio of the molecular weights of water vapour and dry air
pub const EPSILON_WATER_AIR: f64 = 0.622;

/// Saturation vapour pressure (Pa) from air temperature (°C).
///
/// Jones (1992) Plants and microclimate: A quantitative approach to
/// environmental plant physiology, p110.
pub fn calc_esat(tair: f64) -> f64 {
    613.75 * (17.502 * tair / (240.97 + tair)).exp()
}

/// Specific humidity (kg/kg) from relative humidity (%), air temperature (K)
/// and air pressure (Pa).
pub fn convert_rh_to_qair(rh: f64, tair: f64, press: f64) -> f64 {
    let esat = calc_esat(degrees_kelvin_to_centigrade(tair));

    // specific humidity at saturation
    let ws = EPSILON_WATER_AIR * esat / (press - esat);

    (rh / 100.0) * ws
}

/// Element-wise [`convert_rh_to_qair`] over equally shaped arrays
pub fn convert_rh_to_qair_array<S1, S2, S3, D>(
    rh: &ArrayBase<S1, D>,
    tair: &ArrayBase<S2, D>,
    press: &ArrayBase<S3, D>,
) -> Result<Array<f64, D>, ConversionError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    check_shapes(rh.shape(), tair.shape())?;
    check_shapes(rh.shape(), press.shape())?;

    Ok(Zip::from(rh)
        .and(tair)
        .and(press)
        .map_collect(|&rh, &tair, &press| convert_rh_to_qair(rh, tair, press)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_calc_esat_at_freezing() {
        assert!((calc_esat(0.0) - 613.75).abs() < 1e-9);
    }

    #[test]
    fn test_calc_esat_at_twenty_degrees() {
        // Tetens-type curves give ~2.34 kPa at 20 °C
        let esat = calc_esat(20.0);
        assert!(esat > 2300.0 && esat < 2400.0, "esat = {}", esat);
    }

    #[test]
    fn test_qair_array_matches_scalar() {
        let rh = array![20.0, 50.0, 90.0];
        let tair = array![270.0, 288.15, 300.0];
        let press = array![101325.0, 100000.0, 95000.0];

        let q = convert_rh_to_qair_array(&rh, &tair, &press).unwrap();
        for i in 0..3 {
            assert_eq!(q[i], convert_rh_to_qair(rh[i], tair[i], press[i]));
        }
    }

    #[test]
    fn test_qair_array_shape_mismatch() {
        let rh = array![20.0, 50.0];
        let tair = array![270.0, 288.15, 300.0];
        let press = array![101325.0, 100000.0];

        let err = convert_rh_to_qair_array(&rh, &tair, &press).unwrap_err();
        assert!(matches!(err, ConversionError::ShapeMismatch { .. }));
    }
}
