use std::{fmt, str::FromStr};

use strum::{EnumCount, EnumIter, EnumString};
use time::{Date, Weekday};

use crate::id::Id;

/// What kind of day this is on the itinerary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount)]
pub enum DayType {
    Show,
    Travel,
    Off,
    Rehearsal,
    Press,
    Hold,
}

#[derive(Debug)]
pub struct DayTypeParseError;

impl FromStr for DayType {
    type Err = DayTypeParseError;
    fn from_str(s: &str) -> Result<DayType, Self::Err> {
        match &*s.to_lowercase() {
            "show day" | "show" => Ok(DayType::Show),
            "travel day" | "travel" => Ok(DayType::Travel),
            "day off" | "off" => Ok(DayType::Off),
            "rehearsal" => Ok(DayType::Rehearsal),
            "press day" | "press" => Ok(DayType::Press),
            "on hold" | "hold" => Ok(DayType::Hold),
            _ => Err(DayTypeParseError),
        }
    }
}

impl DayType {
    /// Short badge label for schedule listings.
    pub const fn label(self) -> &'static str {
        match self {
            DayType::Show => "Show",
            DayType::Travel => "Travel",
            DayType::Off => "Off",
            DayType::Rehearsal => "Rehearsal",
            DayType::Press => "Press",
            DayType::Hold => "Hold",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            DayType::Show => "Show Day",
            DayType::Travel => "Travel Day",
            DayType::Off => "Day Off",
            DayType::Rehearsal => "Rehearsal",
            DayType::Press => "Press Day",
            DayType::Hold => "On Hold",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DayStatus {
    Confirmed,
    Pending,
    Cancelled,
    Rescheduled,
}

/// One calendar date on a tour's itinerary.
///
/// Zero or one event may attach to a day via the event's
/// day id back-reference.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub id       : Id,
    pub tour_id  : Id,
    pub date     : Date,
    pub day_type : DayType,
    pub status   : DayStatus,
    pub city     : String,
    pub state    : String,
    pub country  : String,
    pub timezone : String,
    pub notes    : Option<String>,
}

impl Day {
    /// "City, ST" display string.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Uppercase three-letter weekday, e.g. "FRI".
    pub fn weekday_abbrev(&self) -> &'static str {
        weekday_abbrev(self.date)
    }

    /// "M/D" without zero padding, e.g. "10/17".
    pub fn date_short(&self) -> String {
        format!("{}/{}", u8::from(self.date.month()), self.date.day())
    }
}

pub fn weekday_abbrev(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Sunday => "SUN",
        Weekday::Monday => "MON",
        Weekday::Tuesday => "TUE",
        Weekday::Wednesday => "WED",
        Weekday::Thursday => "THU",
        Weekday::Friday => "FRI",
        Weekday::Saturday => "SAT",
    }
}
