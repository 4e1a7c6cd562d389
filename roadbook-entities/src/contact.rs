use crate::id::Id;

/// An external party: promoter, venue staff, vendor.
///
/// The company name is denormalized alongside the company id for
/// convenience; the two are not kept in sync by anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Id,
    pub organization_id: Id,

    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub role: String, // "Promoter", "Venue Manager", "Vendor", ...
    pub title: Option<String>,
    pub company_id: Option<Id>,
    pub company_name: Option<String>,

    pub address: Option<String>,
    pub website: Option<String>,

    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
