use roadbook_entities::organization::*;

use crate::DEMO_ORGANIZATION_ID;

pub(crate) fn organizations() -> Vec<Organization> {
    vec![Organization {
        id: DEMO_ORGANIZATION_ID.into(),
        name: "Coplan Music Management".into(),
        slug: "coplan-music".into(),
        organization_type: OrganizationType::Music,
        contact_email: Some("info@coplanmusic.com".into()),
        currency: "CAD".into(),
        is_active: true,
    }]
}
