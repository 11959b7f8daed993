pub mod angles;
pub mod board;
pub mod config;
pub mod hijri;
pub mod prayer;
pub mod schedule;
pub mod types;

pub use angles::{
    deg_to_rad, julian_day, normalize_angle, normalize_hours, rad_to_deg, sun_position,
    DEGREES_PER_HOUR, J2000,
};

pub use board::{board_snapshot, board_snapshot_at};

pub use config::{Config, ConfigError};

pub use hijri::{julian_day_number, to_hijri, to_hijri_date};

pub use prayer::{
    asr_altitude, asr_time, calculate, calculate_date, hour_angle_time, iqama_times, solar_noon,
    HORIZON_DIP,
};

pub use schedule::{
    format_time, minute_of_day, minutes_to_time, select_next_prayer, select_next_prayer_minutes,
    time_to_minutes, UNDEFINED_TIME,
};

pub use types::{
    BoardSnapshot, Countdown, HijriDate, NextPrayer, Prayer, PrayerRow, PrayerTimes, Side,
    SolarPosition,
};
