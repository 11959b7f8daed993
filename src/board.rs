use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use log::{debug, warn};

use crate::config::Config;
use crate::hijri::to_hijri_date;
use crate::prayer::{calculate_date, iqama_times};
use crate::schedule::{format_time, select_next_prayer, time_to_minutes};
use crate::types::{BoardSnapshot, Prayer, PrayerRow};

/// Everything the display shows for one tick of the local wall clock.
pub fn board_snapshot(config: &Config, now: NaiveDateTime) -> BoardSnapshot {
    let date = now.date();
    let times = calculate_date(config, date);
    let iqamas = iqama_times(config, &times);

    let rows = Prayer::ALL
        .iter()
        .map(|&prayer| PrayerRow {
            prayer,
            adhan: format_time(times.adhan(prayer)),
            iqama: format_time(iqamas[prayer.index()]),
        })
        .collect();

    let now_minutes = time_to_minutes((now.hour() as i32, now.minute() as i32));
    let next = select_next_prayer(&times, now_minutes);
    debug!("{} next prayer: {:?}", now, next);

    BoardSnapshot {
        location: config.location_label.clone(),
        date,
        clock: now.format("%H:%M:%S").to_string(),
        hijri: to_hijri_date(date),
        times,
        rows,
        sunrise: format_time(times.sunrise),
        next,
    }
}

/// Like [`board_snapshot`] for an instant in any zone; the instant is shown in
/// the configured UTC offset, which is the offset the prayer times are in.
pub fn board_snapshot_at<Tz: TimeZone>(config: &Config, instant: &DateTime<Tz>) -> BoardSnapshot {
    let seconds = config.timezone_offset_seconds();
    let offset = FixedOffset::east_opt(seconds).unwrap_or_else(|| {
        warn!("timezone offset of {} s is out of range, showing UTC", seconds);
        Utc.fix()
    });
    board_snapshot(config, instant.with_timezone(&offset).naive_local())
}
