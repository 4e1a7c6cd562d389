use crate::id::Id;

/// A performance location.
///
/// Everything beyond the identifying block is advance material filled
/// in as it becomes known, hence the many optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: Id,
    pub organization_id: Id,
    pub name: String,
    pub venue_type: String, // "Casino", "Theatre", "Arena", ...

    // Address
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,

    // Contact
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub venue_contact_name: Option<String>,
    pub production_contact_name: Option<String>,

    // Technical
    pub capacity: Option<u32>,
    pub stage_dimensions: Option<String>,
    pub load_in_info: Option<String>,
    pub dressing_room_info: Option<String>,
    pub green_room_info: Option<String>,
    pub wifi_info: Option<String>,
    pub power_info: Option<String>,

    // Parking
    pub bus_parking: Option<String>,
    pub parking_instructions: Option<String>,

    // Business
    pub merch_split: Option<String>,
    pub merch_contact: Option<String>,
    pub settlement_terms: Option<String>,

    // Amenities
    pub laundry_info: Option<String>,
    pub runner_info: Option<String>,
    pub catering_options: Option<String>,

    pub notes: Option<String>,
}

impl Venue {
    /// "City, ST" display string.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
