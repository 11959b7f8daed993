use crate::types::{NextPrayer, Prayer, PrayerTimes};

/// Shown in place of a time the sun never reaches.
pub const UNDEFINED_TIME: &str = "--:--";

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

/// Minute of the day for a fractional hour, after wrapping into [0, 24).
/// Seconds are truncated, so 12:15:59 is minute 735.
pub fn minute_of_day(hours: f64) -> i32 {
    let total = hours.rem_euclid(24.0);
    let hour = total.trunc();
    let minute = ((total - hour) * 60.0).trunc();
    hour as i32 * 60 + minute as i32
}

/// First prayer, in chronological order, whose adhan minute is strictly after
/// `now_minutes`. Undefined prayers are skipped. After isha this returns `None`;
/// rolling over to the next day's fajr is left to the caller.
pub fn select_next_prayer_minutes(
    adhan_minutes: &[Option<i32>; 5],
    now_minutes: i32,
) -> Option<NextPrayer> {
    Prayer::ALL
        .iter()
        .zip(adhan_minutes.iter())
        .find_map(|(&prayer, &minute)| match minute {
            Some(m) if m > now_minutes => Some(NextPrayer {
                prayer,
                countdown_minutes: m - now_minutes,
            }),
            _ => None,
        })
}

pub fn select_next_prayer(times: &PrayerTimes, now_minutes: i32) -> Option<NextPrayer> {
    let minutes = times.adhans().map(|t| t.map(minute_of_day));
    select_next_prayer_minutes(&minutes, now_minutes)
}

/// Renders fractional hours as `HH:MM`.
///
/// Minute clamp: the minute is rounded and then clamped to 59, so a value whose
/// fraction rounds up to 60 (e.g. 5.9999) renders as `05:59` instead of
/// carrying into `06:00`. This also keeps 23.9999 from becoming `24:00`.
pub fn format_time(hours: Option<f64>) -> String {
    let Some(hours) = hours else {
        return UNDEFINED_TIME.to_string();
    };
    let total = hours.rem_euclid(24.0);
    let hour = total.trunc() as i32;
    let minute = (((total - total.trunc()) * 60.0).round() as i32).clamp(0, 59);
    format!("{:02}:{:02}", hour, minute)
}
