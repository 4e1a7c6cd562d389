use std::fmt;

use strum::{EnumCount, EnumIter, EnumString};

use crate::id::Id;

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TicketType {
    Comp,
    Vip,
    Guest,
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            TicketType::Comp => "comp",
            TicketType::Vip => "vip",
            TicketType::Guest => "guest",
        };
        f.write_str(s)
    }
}

/// A per-event budget of tickets of one type. Keyed by
/// (event id, ticket type), it has no id of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketAllocation {
    pub event_id: Id,
    pub ticket_type: TicketType,
    pub allowed: u32,
    pub used: u32,
}

impl TicketAllocation {
    pub fn remaining(&self) -> u32 {
        self.allowed.saturating_sub(self.used)
    }
}
