use super::*;
use ndarray::Array1;

const STANDARD_PRESSURE: f64 = 101325.0;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_qair_zero_when_dry() {
    for t_c in [-40.0, -10.0, 0.0, 25.0, 50.0] {
        let tair = degrees_centigrade_to_kelvin(t_c);
        assert_eq!(convert_rh_to_qair(0.0, tair, STANDARD_PRESSURE), 0.0);
    }
}

#[test]
fn test_qair_monotonic_in_relative_humidity() {
    for t_c in [-40.0, -5.0, 15.0, 35.0, 50.0] {
        let tair = degrees_centigrade_to_kelvin(t_c);
        let mut previous = convert_rh_to_qair(0.0, tair, STANDARD_PRESSURE);
        for rh in (1..=100).map(f64::from) {
            let q = convert_rh_to_qair(rh, tair, STANDARD_PRESSURE);
            assert!(q > previous, "rh {} at {} °C: {} <= {}", rh, t_c, q, previous);
            previous = q;
        }
    }
}

#[test]
fn test_qair_monotonic_in_temperature() {
    for rh in [5.0, 50.0, 100.0] {
        let mut previous = convert_rh_to_qair(rh, degrees_centigrade_to_kelvin(-40.0), STANDARD_PRESSURE);
        for t_c in (-39..=50).map(f64::from) {
            let q = convert_rh_to_qair(rh, degrees_centigrade_to_kelvin(t_c), STANDARD_PRESSURE);
            assert!(q > previous, "{} °C at rh {}: {} <= {}", t_c, rh, q, previous);
            previous = q;
        }
    }
}

#[test]
fn test_qair_typical_value() {
    // 50 % at 20 °C near sea level is roughly 7 g/kg
    let q = convert_rh_to_qair(50.0, 293.15, STANDARD_PRESSURE);
    assert!(q > 0.006 && q < 0.008, "q = {}", q);
}

#[test]
fn test_kelvin_centigrade_round_trip() {
    for x in [-273.15, -40.0, 0.0, 0.1, 21.7, 1.0e6] {
        assert!(close(degrees_kelvin_to_centigrade(degrees_centigrade_to_kelvin(x)), x));
    }
    assert_eq!(
        degrees_kelvin_to_centigrade(TWENTY_FIVE_DEGREES_CENTIGRADE_IN_KELVIN),
        25.0
    );
}

#[test]
fn test_radiation_round_trips() {
    for x in [0.0, 1.0, 123.456, 1361.0] {
        assert!(close(
            photosynthetically_active_radiation_to_short_wave(
                short_wave_to_photosynthetically_active_radiation(x)
            ),
            x
        ));
        assert!(close(
            light_energy_in_joules_to_micro_moles_of_light(micro_moles_of_light_to_joules(x)),
            x
        ));
    }
    assert!(close(light_energy_in_joules_to_micro_moles_of_light(1.0), 4.57));
}

#[test]
fn test_lwdown_clamps_relative_humidity() {
    for tair in [250.0, 273.15, 300.0] {
        let floor = estimate_lwdown(tair, 0.05);
        assert_eq!(estimate_lwdown(tair, 0.0), floor);
        assert_eq!(estimate_lwdown(tair, 0.049), floor);
        assert_eq!(estimate_lwdown(tair, -1.0), floor);
        assert!(estimate_lwdown(tair, 0.06) > floor);
    }
}

#[test]
fn test_magnitude_round_trip() {
    for v in [0.0, 1.0, -3.25, 6.02e23, 1.0e-12] {
        let there = magnitude_conversion(v, "k", "m").unwrap();
        let back = magnitude_conversion(there, "m", "k").unwrap();
        assert!(close(back, v), "{} -> {} -> {}", v, there, back);
    }
}

#[test]
fn test_magnitude_identity() {
    for (_, symbol, _) in SI_PREFIXES.iter() {
        assert_eq!(magnitude_conversion(42.5, symbol, symbol).unwrap(), 42.5);
    }
}

#[test]
fn test_magnitude_unknown_symbol() {
    assert!(matches!(
        magnitude_conversion(1.0, "x", "k"),
        Err(ConversionError::UnknownPrefix(s)) if s == "x"
    ));
}

#[test]
fn test_mass_round_trips() {
    assert!(close(gram_water_to_mole(mole_water_to_gram(2.5)), 2.5));
    assert!(close(grams_carbon_to_moles(mole_carbon_to_grams(0.3)), 0.3));
    assert_eq!(mole_water_to_gram(1.0), 18.02);
    assert_eq!(mole_carbon_to_grams(1.0), 12.0);
}

#[test]
fn test_time_conversions() {
    assert_eq!(half_hours_to_seconds(2.0), 3600.0);
    assert_eq!(seconds_to_hours(7200.0), 2.0);
    assert_eq!(days_to_seconds(1.5), 129600.0);
    assert!(close(seconds_to_days(days_to_seconds(3.3)), 3.3));
    assert!(close(seconds_to_half_hours(hours_to_seconds(1.0)), 2.0));
}

#[test]
fn test_single_argument_conversions_vectorize() {
    let tair_c = Array1::from(vec![-10.0, 0.0, 15.5, 40.0]);
    let tair_k = tair_c.mapv(degrees_centigrade_to_kelvin);

    for (c, k) in tair_c.iter().zip(tair_k.iter()) {
        assert_eq!(*k, degrees_centigrade_to_kelvin(*c));
    }

    let swdown = Array1::from(vec![0.0, 250.0, 900.0]);
    let par = swdown.mapv(short_wave_to_photosynthetically_active_radiation);
    assert_eq!(par, Array1::from(vec![0.0, 125.0, 450.0]));
}
