use std::{fmt, str::FromStr};

use crate::id::Id;

/// Progress of the pre-show logistics confirmation ("advance") for an
/// event. Transitions are not ordered or enforced anywhere.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AdvanceStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug)]
pub struct AdvanceStatusParseError;

impl FromStr for AdvanceStatus {
    type Err = AdvanceStatusParseError;
    fn from_str(s: &str) -> Result<AdvanceStatus, Self::Err> {
        match &*s.to_lowercase() {
            "not-started" => Ok(AdvanceStatus::NotStarted),
            "in-progress" => Ok(AdvanceStatus::InProgress),
            "completed" => Ok(AdvanceStatus::Completed),
            _ => Err(AdvanceStatusParseError),
        }
    }
}

impl AdvanceStatus {
    pub const fn is_completed(self) -> bool {
        matches!(self, AdvanceStatus::Completed)
    }
}

impl fmt::Display for AdvanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            AdvanceStatus::NotStarted => "not-started",
            AdvanceStatus::InProgress => "in-progress",
            AdvanceStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A single performance instance, attached to exactly one day.
///
/// Venue, hotel and contact references are optional and may dangle;
/// readers resolve them at join time and tolerate absence. All schedule
/// times are free-text strings as entered by the advancing manager
/// ("10:00 AM") and are never validated or parsed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id                              : Id,
    pub day_id                          : Id,
    pub venue_id                        : Option<Id>,
    pub hotel_id                        : Option<Id>,

    // Schedule
    pub load_in                         : Option<String>,
    pub sound_check                     : Option<String>,
    pub doors                           : Option<String>,
    pub show_time                       : Option<String>,
    pub curfew                          : Option<String>,
    pub set_length                      : Option<u32>, // minutes

    // Meals
    pub lunch                           : Option<String>,
    pub lunch_count                     : Option<u32>,
    pub dinner                          : Option<String>,
    pub dinner_count                    : Option<u32>,

    // Logistics
    pub return_to_hotel_after_soundcheck: Option<bool>,
    pub return_to_hotel_after_show      : Option<bool>,

    // External contacts
    pub day_of_show_contact_id          : Option<Id>,
    pub promoter_id                     : Option<Id>,
    pub primary_promoter_contact_id     : Option<Id>,

    // Production details
    pub load_in_details                 : Option<String>,
    pub sound_details                   : Option<String>,
    pub light_details                   : Option<String>,
    pub security_details                : Option<String>,
    pub catering_details                : Option<String>,
    pub meet_and_greet                  : Option<String>,

    pub advance_status                  : AdvanceStatus,

    // Ticketing counters, stored as reported.
    // sold + comps <= capacity is NOT guaranteed.
    pub capacity                        : Option<u32>,
    pub tickets_sold                    : Option<u32>,
    pub total_comps                     : Option<u32>,
    pub comps_used                      : Option<u32>,

    pub notes                           : Option<String>,
}

impl Event {
    pub fn comps_remaining(&self) -> Option<u32> {
        self.total_comps
            .map(|total| total.saturating_sub(self.comps_used.unwrap_or(0)))
    }

    pub fn tickets_remaining(&self) -> Option<u32> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(self.tickets_sold.unwrap_or(0)))
    }
}
