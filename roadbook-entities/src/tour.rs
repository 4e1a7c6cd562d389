use std::fmt;

use strum::{EnumCount, EnumIter, EnumString};
use time::Date;

use crate::id::Id;

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TourStatus {
    Confirmed,
    #[strum(serialize = "In-Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for TourStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            TourStatus::Confirmed => "Confirmed",
            TourStatus::InProgress => "In-Progress",
            TourStatus::Completed => "Completed",
            TourStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// A touring production.
///
/// The aggregate counters are stored as entered, not derived from the
/// day/event tables, so they may drift out of sync with live joins.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub id              : Id,
    pub organization_id : Id,
    pub name            : String,
    pub artist          : String,
    pub start_date      : Date,
    pub end_date        : Date,
    pub tour_manager    : String,
    pub status          : TourStatus,
    pub total_days      : Option<u32>,
    pub total_shows     : Option<u32>,
    pub completed_shows : Option<u32>,
    pub total_crew      : Option<u32>,
}

impl Tour {
    pub fn is_active(&self) -> bool {
        matches!(self.status, TourStatus::Confirmed | TourStatus::InProgress)
    }
}
