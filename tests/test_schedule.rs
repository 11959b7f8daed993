use prayer_board::schedule::*;
use prayer_board::types::{Countdown, Prayer, PrayerTimes};

fn times_from_minutes(minutes: [Option<i32>; 5]) -> PrayerTimes {
    let hours = minutes.map(|m| m.map(|m| m as f64 / 60.0));
    PrayerTimes {
        fajr: hours[0],
        sunrise: Some(6.5),
        dhuhr: hours[1],
        asr: hours[2],
        maghrib: hours[3],
        isha: hours[4],
    }
}

const DAY: [Option<i32>; 5] = [Some(300), Some(735), Some(930), Some(1090), Some(1180)];

// ── Time utilities ──

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(time_to_minutes((6, 30)), 390);
}

#[test]
fn test_minute_of_day_truncates() {
    assert_eq!(minute_of_day(5.0), 300);
    assert_eq!(minute_of_day(12.25), 735);
    assert_eq!(minute_of_day(15.5), 930);
    // 12:15:59
    assert_eq!(minute_of_day(12.0 + 15.0 / 60.0 + 59.0 / 3600.0), 735);
}

#[test]
fn test_minute_of_day_wraps() {
    assert_eq!(minute_of_day(24.5), 30);
    assert_eq!(minute_of_day(-0.5), 1410);
}

// ── Next prayer ──

#[test]
fn test_next_prayer_afternoon() {
    let next = select_next_prayer_minutes(&DAY, 780).unwrap();
    assert_eq!(next.prayer, Prayer::Asr);
    assert_eq!(next.prayer.index(), 2);
    assert_eq!(next.countdown_minutes, 150);
    assert_eq!(next.countdown(), Countdown { hours: 2, minutes: 30 });
}

#[test]
fn test_next_prayer_after_isha_is_none() {
    assert_eq!(select_next_prayer_minutes(&DAY, 1200), None);
    assert_eq!(select_next_prayer_minutes(&DAY, 1180), None);
}

#[test]
fn test_next_prayer_strictly_after_now() {
    let next = select_next_prayer_minutes(&DAY, 735).unwrap();
    assert_eq!(next.prayer, Prayer::Asr);
    let next = select_next_prayer_minutes(&DAY, 734).unwrap();
    assert_eq!(next.prayer, Prayer::Dhuhr);
    assert_eq!(next.countdown_minutes, 1);
}

#[test]
fn test_next_prayer_before_fajr() {
    let next = select_next_prayer_minutes(&DAY, 0).unwrap();
    assert_eq!(next.prayer, Prayer::Fajr);
    assert_eq!(next.countdown().to_string(), "05:00");
}

#[test]
fn test_next_prayer_skips_undefined_fajr() {
    let mut minutes = DAY;
    minutes[0] = None;
    for now in (0..1440).step_by(5) {
        if let Some(next) = select_next_prayer_minutes(&minutes, now) {
            assert_ne!(next.prayer, Prayer::Fajr, "now={}", now);
        }
    }
    let next = select_next_prayer_minutes(&minutes, 0).unwrap();
    assert_eq!(next.prayer, Prayer::Dhuhr);
    assert_eq!(next.countdown_minutes, 735);
}

#[test]
fn test_next_prayer_all_undefined() {
    assert_eq!(select_next_prayer_minutes(&[None; 5], 0), None);
}

#[test]
fn test_select_next_prayer_from_times() {
    let times = times_from_minutes([Some(300), Some(735), Some(930), None, None]);
    let next = select_next_prayer(&times, 780).unwrap();
    assert_eq!(next.prayer, Prayer::Asr);
    assert_eq!(next.countdown_minutes, 150);
    assert_eq!(select_next_prayer(&times, 931), None);
}

#[test]
fn test_select_next_prayer_ignores_sunrise() {
    let times = times_from_minutes([Some(300), Some(735), Some(930), Some(1095), Some(1185)]);
    let next = select_next_prayer(&times, 360).unwrap();
    assert_eq!(next.prayer, Prayer::Dhuhr);
}

// ── Countdown ──

#[test]
fn test_countdown_decomposition() {
    let c = Countdown::from_minutes(150);
    assert_eq!((c.hours, c.minutes), (2, 30));
    assert_eq!(Countdown::from_minutes(59).to_string(), "00:59");
    assert_eq!(Countdown::from_minutes(605).to_string(), "10:05");
}

// ── FormatTime ──

#[test]
fn test_format_undefined() {
    assert_eq!(format_time(None), "--:--");
    assert_eq!(format_time(None), UNDEFINED_TIME);
}

#[test]
fn test_format_known_values() {
    assert_eq!(format_time(Some(5.5)), "05:30");
    assert_eq!(format_time(Some(0.0)), "00:00");
    assert_eq!(format_time(Some(12.25)), "12:15");
    assert_eq!(format_time(Some(19.1322)), "19:08");
}

#[test]
fn test_format_wraps_out_of_range_hours() {
    assert_eq!(format_time(Some(24.5)), "00:30");
    assert_eq!(format_time(Some(-0.5)), "23:30");
}

#[test]
fn test_format_never_reaches_24() {
    assert_eq!(format_time(Some(23.9999)), "23:59");
}

#[test]
fn test_format_minute_clamp_does_not_carry() {
    // rounds to :60 and is clamped rather than becoming 06:00
    assert_eq!(format_time(Some(5.9999)), "05:59");
    assert_eq!(format_time(Some(5.99)), "05:59");
}

// ── Prayer ──

#[test]
fn test_prayer_index_follows_chronological_order() {
    for (i, prayer) in Prayer::ALL.iter().enumerate() {
        assert_eq!(prayer.index(), i);
    }
    assert_eq!(format!("{:<8}|", Prayer::Asr), "Asr     |");
}
