// Seconds per unit time
pub const SECONDS_PER_HALF_HOUR: f64 = 1800.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;

pub fn half_hours_to_seconds(time_in_half_hours: f64) -> f64 {
    time_in_half_hours * SECONDS_PER_HALF_HOUR
}

pub fn seconds_to_half_hours(time_in_seconds: f64) -> f64 {
    time_in_seconds / SECONDS_PER_HALF_HOUR
}

pub fn hours_to_seconds(time_in_hours: f64) -> f64 {
    time_in_hours * SECONDS_PER_HOUR
}

pub fn seconds_to_hours(time_in_seconds: f64) -> f64 {
    time_in_seconds / SECONDS_PER_HOUR
}

pub fn days_to_seconds(time_days: f64) -> f64 {
    time_days * SECONDS_PER_DAY
}

pub fn seconds_to_days(time_seconds: f64) -> f64 {
    time_seconds / SECONDS_PER_DAY
}
