use crate::id::Id;

/// An overnight stop, usually tied to one or two nearby shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: Id,
    pub organization_id: Id,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_name: Option<String>,
    pub confirmation_number: Option<String>,

    // Logistics relative to the assigned venue
    pub distance_to_venue: Option<String>,
    pub travel_time_to_venue: Option<String>,
    pub bus_parking: Option<String>,
    pub parking_notes: Option<String>,
    pub amenities: Option<String>,

    pub notes: Option<String>,
}
