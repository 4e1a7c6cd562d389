use roadbook_entities::{company::*, contact::*, person::*};
use time::macros::date;

use crate::DEMO_ORGANIZATION_ID;

fn crew(
    id: &str,
    first_name: &str,
    last_name: &str,
    role: &str,
    department: &str,
    tour_ids: &[&str],
) -> Person {
    Person {
        id: id.into(),
        first_name: first_name.into(),
        middle_name: None,
        last_name: last_name.into(),
        email: None,
        phone: None,
        address: None,
        date_of_birth: None,
        tour_ids: tour_ids.iter().copied().map(Into::into).collect(),
        role: role.into(),
        department: department.into(),
        company: None,
        passport_number: None,
        passport_expiration: None,
        passport_country: None,
        nationality: None,
        emergency_contact: None,
        shirt_size: None,
        jacket_size: None,
        notes: None,
    }
}

fn personnel() -> Vec<Person> {
    vec![
        // Management
        Person {
            middle_name: Some("Chuck".into()),
            email: Some("steve@coplanmusic.com".into()),
            phone: Some("615-555-1212".into()),
            address: Some("1210 Glen Echo Dr, Apt 2B, Nashville, TN 37215".into()),
            date_of_birth: Some(date!(1985 - 06 - 15)),
            company: Some("Coplan Music Management".into()),
            passport_number: Some("US1234567890".into()),
            passport_expiration: Some(date!(2030 - 06 - 15)),
            passport_country: Some("USA".into()),
            nationality: Some("American".into()),
            emergency_contact: Some(EmergencyContact {
                name: "Sarah Coplan".into(),
                relationship: Some("Spouse".into()),
                phone: Some("615-555-1213".into()),
                email: Some("sarah.coplan@email.com".into()),
            }),
            shirt_size: Some("L".into()),
            jacket_size: Some("L".into()),
            notes: Some(
                "Primary point of contact for all tour matters. Handles day-to-day \
                 logistics and troubleshooting. Available 24/7 during tour dates."
                    .into(),
            ),
            ..crew(
                "person-1",
                "Steve",
                "Coplan",
                "Tour Manager",
                "Management",
                &["tour-1", "tour-2", "tour-3"],
            )
        },
        Person {
            middle_name: Some("Lauren".into()),
            email: Some("elena@coplanmusic.com".into()),
            phone: Some("615-555-1498".into()),
            address: Some("2416 Johnson Blvd, Nashville, TN 37217".into()),
            passport_expiration: Some(date!(2029 - 03 - 22)),
            passport_country: Some("USA".into()),
            emergency_contact: Some(EmergencyContact {
                name: "Mike Sherertz".into(),
                relationship: Some("Brother".into()),
                phone: Some("615-555-1499".into()),
                email: None,
            }),
            shirt_size: Some("M".into()),
            jacket_size: Some("L".into()),
            ..crew(
                "person-2",
                "Elena",
                "Sherertz",
                "Production Manager",
                "Production",
                &["tour-1", "tour-2"],
            )
        },
        // Audio
        Person {
            email: Some("sarah.jennings@tourcrew.com".into()),
            phone: Some("615-555-0011".into()),
            passport_expiration: Some(date!(2031 - 08 - 10)),
            passport_country: Some("USA".into()),
            shirt_size: Some("M".into()),
            jacket_size: Some("M".into()),
            ..crew(
                "person-3",
                "Sarah",
                "Jennings",
                "FOH Engineer",
                "Audio",
                &["tour-1", "tour-3"],
            )
        },
        Person {
            email: Some("kevin.watts@tourcrew.com".into()),
            phone: Some("615-555-0012".into()),
            passport_country: Some("USA".into()),
            shirt_size: Some("L".into()),
            jacket_size: Some("XL".into()),
            ..crew(
                "person-4",
                "Kevin",
                "Watts",
                "Monitor Engineer",
                "Audio",
                &["tour-1", "tour-2"],
            )
        },
        // Backline
        Person {
            email: Some("david.lee@tourcrew.com".into()),
            phone: Some("615-555-0013".into()),
            shirt_size: Some("L".into()),
            jacket_size: Some("L".into()),
            ..crew(
                "person-5",
                "David",
                "Lee",
                "Drum Tech",
                "Backline",
                &["tour-1", "tour-3"],
            )
        },
        Person {
            email: Some("marcus.chen@tourcrew.com".into()),
            phone: Some("615-555-0014".into()),
            shirt_size: Some("M".into()),
            jacket_size: Some("L".into()),
            ..crew(
                "person-6",
                "Marcus",
                "Chen",
                "Guitar Tech",
                "Backline",
                &["tour-1", "tour-2"],
            )
        },
        // Lighting
        Person {
            email: Some("rachel.green@tourcrew.com".into()),
            phone: Some("615-555-0015".into()),
            shirt_size: Some("S".into()),
            jacket_size: Some("M".into()),
            ..crew(
                "person-7",
                "Rachel",
                "Green",
                "Lighting Director",
                "Lighting",
                &["tour-2", "tour-1"],
            )
        },
        // Transportation
        Person {
            email: Some("tommy.r@tourcrew.com".into()),
            phone: Some("615-555-0016".into()),
            shirt_size: Some("XL".into()),
            jacket_size: Some("XXL".into()),
            ..crew(
                "person-8",
                "Tommy",
                "Rodriguez",
                "Bus Driver 1",
                "Transportation",
                &["tour-1"],
            )
        },
        Person {
            email: Some("jerry.riggs@tourcrew.com".into()),
            phone: Some("615-555-0017".into()),
            shirt_size: Some("L".into()),
            jacket_size: Some("XL".into()),
            ..crew(
                "person-9",
                "Jerry",
                "Riggs",
                "Bus Driver 2",
                "Transportation",
                &["tour-1"],
            )
        },
        Person {
            email: Some("lars.u@tourcrew.com".into()),
            phone: Some("615-555-0018".into()),
            shirt_size: Some("L".into()),
            jacket_size: Some("XL".into()),
            ..crew(
                "person-10",
                "Lars",
                "Ulrich",
                "Truck Driver",
                "Transportation",
                &["tour-1"],
            )
        },
        // The artists themselves
        Person {
            email: Some("terri@terriclark.com".into()),
            notes: Some("Co-headliner".into()),
            ..crew("person-11", "Terri", "Clark", "Artist", "Band", &["tour-1"])
        },
        Person {
            email: Some("paul@paulbrandt.com".into()),
            notes: Some("Co-headliner".into()),
            ..crew("person-12", "Paul", "Brandt", "Artist", "Band", &["tour-1"])
        },
    ]
}

fn contact(id: &str, first_name: &str, last_name: &str, role: &str) -> Contact {
    Contact {
        id: id.into(),
        organization_id: DEMO_ORGANIZATION_ID.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: None,
        phone: None,
        role: role.into(),
        title: None,
        company_id: None,
        company_name: None,
        address: None,
        website: None,
        notes: None,
        tags: vec![],
        is_active: true,
    }
}

fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            email: Some("jsmith@livenation.com".into()),
            phone: Some("604-683-4233".into()),
            title: Some("Regional Director".into()),
            company_id: Some("company-1".into()),
            company_name: Some("Live Nation Canada".into()),
            ..contact("contact-1", "John", "Smith", "Promoter Rep")
        },
        Contact {
            email: Some("patrick@livenation.com".into()),
            phone: Some("514-555-1234".into()),
            title: Some("Tour Promoter".into()),
            company_id: Some("company-1".into()),
            company_name: Some("Live Nation Canada".into()),
            notes: Some("Primary promoter contact for HomeComing 2025".into()),
            ..contact("contact-2", "Patrick", "Guay", "Promoter")
        },
        Contact {
            email: Some("mthompson@ratheastlink.ca".into()),
            phone: Some("902-893-2224".into()),
            title: Some("Event Coordinator".into()),
            company_id: Some("company-2".into()),
            company_name: Some("Rath Eastlink Community Centre".into()),
            ..contact("contact-3", "Michelle", "Thompson", "Venue Manager")
        },
        Contact {
            email: Some("rmurphy@holyheart.ca".into()),
            phone: Some("709-579-4424".into()),
            title: Some("Theatre Manager".into()),
            company_id: Some("company-3".into()),
            company_name: Some("Holy Heart Theatre".into()),
            ..contact("contact-4", "Robert", "Murphy", "Venue Manager")
        },
        Contact {
            email: Some("awilson@meridiancentrepointe.com".into()),
            phone: Some("613-580-2700".into()),
            title: Some("Production Manager".into()),
            company_id: Some("company-4".into()),
            company_name: Some("Meridian Theatres".into()),
            ..contact("contact-5", "Amanda", "Wilson", "Venue Manager")
        },
        Contact {
            email: Some("richard@sharpeprod.com".into()),
            phone: Some("416-555-7890".into()),
            title: Some("Owner".into()),
            company_id: Some("company-5".into()),
            company_name: Some("Richard Sharpe Productions".into()),
            notes: Some("Production services provider".into()),
            ..contact("contact-6", "Richard", "Sharpe", "Production Company")
        },
        Contact {
            email: Some("alex@livenation.com".into()),
            phone: Some("416-555-2345".into()),
            title: Some("Assistant".into()),
            company_id: Some("company-1".into()),
            company_name: Some("Live Nation Canada".into()),
            ..contact("contact-7", "Alex", "Vyskocil", "Production Assistant")
        },
        Contact {
            email: Some("rob@rwpromotions.com".into()),
            phone: Some("204-555-3456".into()),
            title: Some("Owner".into()),
            company_id: Some("company-6".into()),
            company_name: Some("RW Promotions".into()),
            notes: Some("Manitoba/Saskatchewan dates".into()),
            ..contact("contact-8", "Rob", "Chicken", "Promoter")
        },
    ]
}

fn company(id: &str, name: &str, company_type: &str) -> Company {
    Company {
        id: id.into(),
        organization_id: DEMO_ORGANIZATION_ID.into(),
        name: name.into(),
        company_type: company_type.into(),
        main_phone: None,
        main_email: None,
        website: None,
        address: None,
        city: None,
        state: None,
        country: None,
        postal_code: None,
        primary_contact_id: None,
        notes: None,
        is_active: true,
    }
}

fn companies() -> Vec<Company> {
    vec![
        Company {
            main_phone: Some("416-872-1212".into()),
            main_email: Some("info@livenation.ca".into()),
            website: Some("https://www.livenation.com".into()),
            city: Some("Toronto".into()),
            state: Some("ON".into()),
            country: Some("Canada".into()),
            primary_contact_id: Some("contact-2".into()),
            ..company("company-1", "Live Nation Canada", "Promoter")
        },
        Company {
            main_phone: Some("902-893-2224".into()),
            website: Some("https://www.ratheastlinkcommunitycentre.ca".into()),
            address: Some("625 Abenaki Rd".into()),
            city: Some("Truro".into()),
            state: Some("NS".into()),
            country: Some("Canada".into()),
            ..company("company-2", "Rath Eastlink Community Centre", "Venue")
        },
        Company {
            main_phone: Some("709-579-4424".into()),
            website: Some("https://holyheart.ca".into()),
            address: Some("55 Bonaventure Ave".into()),
            city: Some("St. John's".into()),
            state: Some("NL".into()),
            country: Some("Canada".into()),
            ..company("company-3", "Holy Heart Theatre", "Venue")
        },
        Company {
            main_phone: Some("613-580-2700".into()),
            website: Some("https://meridiancentrepointe.com".into()),
            city: Some("Ottawa".into()),
            state: Some("ON".into()),
            country: Some("Canada".into()),
            ..company("company-4", "Meridian Theatres", "Venue")
        },
        Company {
            main_phone: Some("416-555-7890".into()),
            main_email: Some("info@sharpeprod.com".into()),
            city: Some("Toronto".into()),
            state: Some("ON".into()),
            country: Some("Canada".into()),
            ..company("company-5", "Richard Sharpe Productions", "Production")
        },
        Company {
            main_phone: Some("204-555-3456".into()),
            city: Some("Winnipeg".into()),
            state: Some("MB".into()),
            country: Some("Canada".into()),
            ..company("company-6", "RW Promotions", "Promoter")
        },
    ]
}

pub(crate) fn people() -> (Vec<Person>, Vec<Contact>, Vec<Company>) {
    (personnel(), contacts(), companies())
}
