use crate::types::SolarPosition;

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000: f64 = 2451545.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Wraps an hour difference into [-12, 12).
pub fn normalize_hours(hours: f64) -> f64 {
    (hours + 12.0).rem_euclid(24.0) - 12.0
}

/// Julian day at 0h UT of a proleptic Gregorian date.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.5
}

/// Low-precision solar coordinates, good to a fraction of a minute of time
/// between roughly 1950 and 2050.
pub fn sun_position(jd: f64) -> SolarPosition {
    let d = jd - J2000;
    let g = deg_to_rad(normalize_angle(357.529 + 0.98560028 * d));
    let q = normalize_angle(280.459 + 0.98564736 * d);
    let l = deg_to_rad(normalize_angle(q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()));
    let e = deg_to_rad(23.439 - 0.0000004 * d);

    let ra_hours = rad_to_deg((e.cos() * l.sin()).atan2(l.cos())) / DEGREES_PER_HOUR;
    let declination = (e.sin() * l.sin()).asin();
    // q and ra cross 0h on different days near the March equinox
    let equation_of_time = normalize_hours(q / DEGREES_PER_HOUR - ra_hours.rem_euclid(24.0));

    SolarPosition {
        declination,
        equation_of_time,
    }
}
