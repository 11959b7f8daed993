use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::angles::{deg_to_rad, julian_day, rad_to_deg, sun_position, DEGREES_PER_HOUR};
use crate::config::Config;
use crate::types::{Prayer, PrayerTimes, Side, SolarPosition};

/// Apparent altitude of the sun's upper limb at sunrise and sunset, including
/// refraction.
pub const HORIZON_DIP: f64 = -0.8333;

pub fn solar_noon(config: &Config, pos: &SolarPosition) -> f64 {
    12.0 - pos.equation_of_time - config.longitude / DEGREES_PER_HOUR + config.timezone_offset
}

/// Hours between solar noon and the moment the sun stands at `altitude` degrees,
/// or `None` if it never gets there on this day.
fn hour_angle_hours(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let lat_rad = deg_to_rad(latitude);
    let cos_h = (deg_to_rad(altitude).sin() - lat_rad.sin() * declination.sin())
        / (lat_rad.cos() * declination.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR)
}

pub fn hour_angle_time(config: &Config, jd: f64, angle: f64, side: Side) -> Option<f64> {
    let pos = sun_position(jd);
    let h = hour_angle_hours(config.latitude, pos.declination, angle)?;
    let noon = solar_noon(config, &pos);
    Some(match side {
        Side::BeforeNoon => noon - h,
        Side::AfterNoon => noon + h,
    })
}

/// Solar altitude in degrees at which an object's shadow equals its own length
/// plus the noon shadow (single-shadow method).
pub fn asr_altitude(latitude: f64, declination: f64) -> f64 {
    let zenith_at_noon = (deg_to_rad(latitude) - declination).abs();
    rad_to_deg((1.0 / (1.0 + zenith_at_noon.tan())).atan())
}

pub fn asr_time(config: &Config, jd: f64) -> Option<f64> {
    let pos = sun_position(jd);
    let altitude = asr_altitude(config.latitude, pos.declination);
    let h = hour_angle_hours(config.latitude, pos.declination, altitude)?;
    Some(solar_noon(config, &pos) + h)
}

pub fn calculate(config: &Config, year: i32, month: u32, day: u32) -> PrayerTimes {
    let jd = julian_day(year, month, day);
    let pos = sun_position(jd);

    let maghrib = hour_angle_time(config, jd, HORIZON_DIP, Side::AfterNoon);
    let times = PrayerTimes {
        fajr: hour_angle_time(config, jd, -config.fajr_angle_degrees, Side::BeforeNoon),
        sunrise: hour_angle_time(config, jd, HORIZON_DIP, Side::BeforeNoon),
        dhuhr: Some(solar_noon(config, &pos)),
        asr: asr_time(config, jd),
        maghrib,
        isha: maghrib.map(|m| m + config.isha_offset_minutes as f64 / 60.0),
    };

    debug!(
        "prayer times {:04}-{:02}-{:02} at {}: {:?}",
        year, month, day, config.location_label, times
    );
    if times.sunrise.is_none() || times.fajr.is_none() || times.asr.is_none() {
        debug!(
            "{:04}-{:02}-{:02}: sun does not reach every prayer altitude at latitude {}",
            year, month, day, config.latitude
        );
    }
    times
}

pub fn calculate_date(config: &Config, date: NaiveDate) -> PrayerTimes {
    calculate(config, date.year(), date.month(), date.day())
}

/// Iqama times for the five prayers, in `Prayer::ALL` order.
pub fn iqama_times(config: &Config, times: &PrayerTimes) -> [Option<f64>; 5] {
    let delay = config.iqama_delay_minutes as f64 / 60.0;
    Prayer::ALL.map(|p| times.adhan(p).map(|t| t + delay))
}
