use crate::id::Id;

/// A business entity the production deals with: promoter company,
/// vendor, production services provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: Id,
    pub organization_id: Id,
    pub name: String,
    pub company_type: String, // "Promoter", "Vendor", "Production", ...

    pub main_phone: Option<String>,
    pub main_email: Option<String>,
    pub website: Option<String>,

    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,

    pub primary_contact_id: Option<Id>,
    pub notes: Option<String>,
    pub is_active: bool,
}
