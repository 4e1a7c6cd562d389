use std::{fmt, str::FromStr};

use strum::{EnumCount, EnumIter, EnumString};
use time::Date;

use crate::id::Id;

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GuestStatus {
    Approved,
    Pending,
    Declined,
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            GuestStatus::Approved => "approved",
            GuestStatus::Pending => "pending",
            GuestStatus::Declined => "declined",
        };
        f.write_str(s)
    }
}

/// Which flavour of pass a guest was granted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount)]
pub enum GuestType {
    Vip,
    MeetAndGreet,
    Photo,
    Comp,
}

#[derive(Debug)]
pub struct GuestTypeParseError;

impl FromStr for GuestType {
    type Err = GuestTypeParseError;
    fn from_str(s: &str) -> Result<GuestType, Self::Err> {
        match &*s.to_lowercase() {
            "vip" => Ok(GuestType::Vip),
            "m&g" | "meet & greet" => Ok(GuestType::MeetAndGreet),
            "photo" => Ok(GuestType::Photo),
            "comp" => Ok(GuestType::Comp),
            _ => Err(GuestTypeParseError),
        }
    }
}

impl fmt::Display for GuestType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            GuestType::Vip => "VIP",
            GuestType::MeetAndGreet => "M&G",
            GuestType::Photo => "Photo",
            GuestType::Comp => "Comp",
        };
        f.write_str(s)
    }
}

/// An invitee holding tickets and/or passes against one event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id               : Id,
    pub event_id         : Id,

    pub name             : String,
    pub email            : Option<String>,
    pub phone            : Option<String>,

    pub tickets          : u32,
    pub passes           : u32,
    pub guest_type       : Option<GuestType>,
    pub status           : GuestStatus,

    pub affiliation      : Option<String>, // "Label", "Media", ...
    pub pickup_method    : Option<String>, // "Will Call", "Box Office", ...

    pub requestor_id     : Option<Id>,
    pub requestor_name   : Option<String>,
    pub request_date     : Option<Date>,

    pub approved_by_id   : Option<Id>,
    pub approved_by_name : Option<String>,
    pub approval_date    : Option<Date>,

    // Seating
    pub seat_section     : Option<String>,
    pub seat_row         : Option<String>,
    pub seats            : Option<String>,

    pub notes            : Option<String>,
}

impl Guest {
    pub fn total_tickets(&self) -> u32 {
        self.tickets + self.passes
    }

    pub fn is_approved(&self) -> bool {
        self.status == GuestStatus::Approved
    }
}
