use std::fmt;

use strum::{EnumCount, EnumIter, EnumString};

use crate::id::Id;

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum OrganizationType {
    Music,
    Sports,
    Theatre,
    Festival,
    Other,
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            OrganizationType::Music => "Music",
            OrganizationType::Sports => "Sports",
            OrganizationType::Theatre => "Theatre",
            OrganizationType::Festival => "Festival",
            OrganizationType::Other => "Other",
        };
        f.write_str(s)
    }
}

/// The account boundary everything else hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: Id,
    pub name: String,
    pub slug: String,
    pub organization_type: OrganizationType,
    pub contact_email: Option<String>,
    pub currency: String,
    pub is_active: bool,
}
