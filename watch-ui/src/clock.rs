use core::ops::BitOr;

use chrono::{Datelike, Timelike};

use crate::error::DateField;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Wall-clock breakdown, read fresh by the host whenever a region is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u8,
    pub minute: u8,
    /// Days since Sunday.
    pub weekday: u8,
    /// Months since January.
    pub month: u8,
    pub day: u8,
    pub year: i32,
}

impl ClockReading {
    pub fn from_datetime<T: Datelike + Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            weekday: t.weekday().num_days_from_sunday() as u8,
            month: t.month0() as u8,
            day: t.day() as u8,
            year: t.year(),
        }
    }

    /// Position on the hour dial: 1..=12, midnight and noon both land on 12.
    pub fn twelve_hour_index(&self) -> u8 {
        twelve_hour_index(self.hour)
    }

    pub fn weekday_name(&self) -> Result<&'static str, DateField> {
        WEEKDAY_NAMES
            .get(self.weekday as usize)
            .copied()
            .ok_or(DateField::Weekday(self.weekday))
    }

    pub fn month_name(&self) -> Result<&'static str, DateField> {
        MONTH_NAMES
            .get(self.month as usize)
            .copied()
            .ok_or(DateField::Month(self.month))
    }
}

pub fn twelve_hour_index(hour: u8) -> u8 {
    ((hour % 12 + 11) % 12) + 1
}

/// Calendar units that changed since the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    pub const DAY: Self = Self(1 << 3);
    pub const MONTH: Self = Self(1 << 4);
    pub const YEAR: Self = Self(1 << 5);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Units that differ between two readings, for hosts without a tick service.
    pub fn between(previous: &ClockReading, current: &ClockReading) -> Self {
        let mut units = Self::default();
        if previous.minute != current.minute {
            units = units | Self::MINUTE;
        }
        if previous.hour != current.hour {
            units = units | Self::HOUR;
        }
        if previous.day != current.day {
            units = units | Self::DAY;
        }
        if previous.month != current.month {
            units = units | Self::MONTH;
        }
        if previous.year != current.year {
            units = units | Self::YEAR;
        }
        units
    }
}

impl BitOr for TimeUnits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
