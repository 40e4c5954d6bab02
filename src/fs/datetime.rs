//! Packed FAT date and time fields.
//!
//! Date word: bits 0-4 day, bits 5-8 month, bits 9-15 years since 1980.
//! Time word: bits 0-4 two-second count, bits 5-10 minutes, bits 11-15 hours.
//!
//! Displayed day and month are the stored bit-field plus one. FAT already
//! stores both 1-based, so a stamp written on 2021-06-15 shows as
//! 2021-07-16. Existing listings depend on this output, so it is kept;
//! [`DecodedDate::to_naive_date`] gives the calendar date as stored.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

const YEAR_EPOCH: u16 = 1980;

const DAY_MASK: u16 = 0b1_1111;
const MONTH_MASK: u16 = 0b1111;
const YEAR_MASK: u16 = 0b111_1111;

const SECONDS_MASK: u16 = 0b1_1111;
const MINUTES_MASK: u16 = 0b11_1111;
const HOURS_MASK: u16 = 0b1_1111;

/// A FAT date as displayed: day and month carry the +1 display offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DecodedDate {
    pub fn from_raw(value: u16) -> Self {
        let day = (value & DAY_MASK) as u8;
        let month = ((value >> 5) & MONTH_MASK) as u8;
        let year = (value >> 9) & YEAR_MASK;
        Self {
            year: year + YEAR_EPOCH,
            month: month + 1,
            day: day + 1,
        }
    }

    /// Repack into the on-disk word (undoes the display offsets).
    pub fn to_raw(&self) -> u16 {
        let day = self.day.wrapping_sub(1) as u16 & DAY_MASK;
        let month = self.month.wrapping_sub(1) as u16 & MONTH_MASK;
        let year = self.year.wrapping_sub(YEAR_EPOCH) & YEAR_MASK;
        (year << 9) | (month << 5) | day
    }

    /// Calendar date from the stored bit-fields, without the display offset.
    /// `None` for a zero or otherwise impossible date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year as i32,
            self.month.wrapping_sub(1) as u32,
            self.day.wrapping_sub(1) as u32,
        )
    }
}

impl fmt::Display for DecodedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:4}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A FAT time with 2-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DecodedTime {
    pub fn from_raw(value: u16) -> Self {
        let second = ((value & SECONDS_MASK) * 2) as u8;
        let minute = ((value >> 5) & MINUTES_MASK) as u8;
        let hour = ((value >> 11) & HOURS_MASK) as u8;
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn to_raw(&self) -> u16 {
        let count = (self.second / 2) as u16 & SECONDS_MASK;
        let minute = self.minute as u16 & MINUTES_MASK;
        let hour = self.hour as u16 & HOURS_MASK;
        (hour << 11) | (minute << 5) | count
    }

    /// True when the fields fall inside 00:00:00..=23:59:58. The bit widths
    /// allow hours up to 31, minutes up to 63 and seconds up to 62.
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)
    }
}

impl fmt::Display for DecodedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A date/time pair as stored in a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FatTimestamp {
    pub date: DecodedDate,
    pub time: DecodedTime,
}

impl FatTimestamp {
    pub fn from_raw(date: u16, time: u16) -> Self {
        Self {
            date: decode_date(date),
            time: decode_time(time),
        }
    }

    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(
            self.date.to_naive_date()?,
            self.time.to_naive_time()?,
        ))
    }
}

/// Formats as `YYYY-MM-DD HH:MM:SS`.
impl fmt::Display for FatTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

pub fn decode_date(value: u16) -> DecodedDate {
    DecodedDate::from_raw(value)
}

pub fn decode_time(value: u16) -> DecodedTime {
    DecodedTime::from_raw(value)
}
