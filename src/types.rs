use std::fmt;

use chrono::NaiveDate;

use crate::schedule::minutes_to_time;

/// The five obligatory prayers in chronological order. Sunrise is an event,
/// not a prayer, and is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which side of solar noon an hour-angle event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    BeforeNoon,
    AfterNoon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Radians.
    pub declination: f64,
    /// Hours, in [-12, 12).
    pub equation_of_time: f64,
}

/// Adhan times for one date as fractional local hours.
///
/// Values are not wrapped into [0, 24); with extreme longitudes or offsets they
/// can fall slightly outside that range. `None` means the sun never reaches the
/// required altitude that day (polar day or night).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub fajr: Option<f64>,
    pub sunrise: Option<f64>,
    pub dhuhr: Option<f64>,
    pub asr: Option<f64>,
    pub maghrib: Option<f64>,
    pub isha: Option<f64>,
}

impl PrayerTimes {
    pub fn adhan(&self, prayer: Prayer) -> Option<f64> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// The five prayer times in `Prayer::ALL` order.
    pub fn adhans(&self) -> [Option<f64>; 5] {
        Prayer::ALL.map(|p| self.adhan(p))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriDate {
    /// Years before 1 AH come out as zero or negative.
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{} AH", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i32,
    pub minutes: i32,
}

impl Countdown {
    pub fn from_minutes(total_minutes: i32) -> Self {
        let (hours, minutes) = minutes_to_time(total_minutes);
        Self { hours, minutes }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub countdown_minutes: i32,
}

impl NextPrayer {
    pub fn countdown(&self) -> Countdown {
        Countdown::from_minutes(self.countdown_minutes)
    }
}

/// One table row on the board: adhan and iqama already rendered as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerRow {
    pub prayer: Prayer,
    pub adhan: String,
    pub iqama: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub location: String,
    pub date: NaiveDate,
    pub clock: String,
    pub hijri: HijriDate,
    pub times: PrayerTimes,
    pub rows: Vec<PrayerRow>,
    pub sunrise: String,
    pub next: Option<NextPrayer>,
}
