//! Gregorian to Hijri conversion with the tabular ("Kuwaiti") algorithm.
//!
//! The tabular calendar is pure arithmetic: a 30-year cycle of 11 leap years
//! with alternating 30/29-day months. It does not model crescent sighting, so a
//! converted date can differ by about one day, either way, from the date
//! announced locally. Display it as an approximation.

use chrono::{Datelike, NaiveDate};

use crate::angles::julian_day;
use crate::types::HijriDate;

/// Integer part of the Julian day at 0h, e.g. 2451544 for 2000-01-01. This is
/// the day count the tabular epoch constants below are offset against.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    julian_day(year, month, day).floor() as i64
}

pub fn to_hijri(year: i32, month: u32, day: u32) -> HijriDate {
    let jdn = julian_day_number(year, month, day);

    let l = jdn - 1948440 + 10632;
    let n = (l - 1).div_euclid(10631);
    let l = l - 10631 * n + 354;
    let j = ((10985 - l) / 5316) * ((50 * l) / 17719) + (l / 5670) * ((43 * l) / 15238);
    let l = l - ((30 - j) / 15) * ((17719 * j) / 50) - (j / 16) * ((15238 * j) / 43) + 29;
    let hijri_month = (24 * l) / 709;
    let hijri_day = l - (709 * hijri_month) / 24;
    let hijri_year = 30 * n + j - 30;

    HijriDate {
        year: hijri_year as i32,
        month: hijri_month as u32,
        day: hijri_day as u32,
    }
}

pub fn to_hijri_date(date: NaiveDate) -> HijriDate {
    to_hijri(date.year(), date.month(), date.day())
}
