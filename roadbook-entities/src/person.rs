use time::Date;

use crate::id::Id;

/// Who to call when something happens to a crew member on the road.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// An internal crew member travelling with one or more tours.
///
/// External parties (promoters, venue staff, vendors) are a separate
/// entity, see [`crate::contact::Contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: Id,

    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<Date>,

    // Tour assignment
    pub tour_ids: Vec<Id>,
    pub role: String,       // "Tour Manager", "FOH Engineer", ...
    pub department: String, // "Management", "Audio", "Band", ...
    pub company: Option<String>,

    // Travel documents
    pub passport_number: Option<String>,
    pub passport_expiration: Option<Date>,
    pub passport_country: Option<String>,
    pub nationality: Option<String>,

    pub emergency_contact: Option<EmergencyContact>,

    // Sizing
    pub shirt_size: Option<String>,
    pub jacket_size: Option<String>,

    pub notes: Option<String>,
}

impl Person {
    /// "First Middle Last", middle name only when present.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn is_on_tour(&self, tour_id: &str) -> bool {
        self.tour_ids.iter().any(|id| id.as_str() == tour_id)
    }
}
