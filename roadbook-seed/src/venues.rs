use roadbook_entities::venue::*;

use crate::DEMO_ORGANIZATION_ID;

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    venue_type: &str,
    address: &str,
    city: &str,
    state: &str,
    postal_code: &str,
    capacity: u32,
) -> Venue {
    Venue {
        id: id.into(),
        organization_id: DEMO_ORGANIZATION_ID.into(),
        name: name.into(),
        venue_type: venue_type.into(),
        address: address.into(),
        city: city.into(),
        state: state.into(),
        postal_code: postal_code.into(),
        country: "Canada".into(),
        phone: None,
        email: None,
        website: None,
        venue_contact_name: None,
        production_contact_name: None,
        capacity: Some(capacity),
        stage_dimensions: None,
        load_in_info: None,
        dressing_room_info: None,
        green_room_info: None,
        wifi_info: None,
        power_info: None,
        bus_parking: None,
        parking_instructions: None,
        merch_split: None,
        merch_contact: None,
        settlement_terms: None,
        laundry_info: None,
        runner_info: None,
        catering_options: None,
        notes: None,
    }
}

pub(crate) fn venues() -> Vec<Venue> {
    vec![
        // The Maritime dates are already advanced, so their venue
        // sheets carry the full technical block.
        Venue {
            phone: Some("(506) 859-7770".into()),
            website: Some("https://casinosnb.ca".into()),
            venue_contact_name: Some("Marc LeBlanc".into()),
            production_contact_name: Some("Danielle Cormier".into()),
            stage_dimensions: Some("60' x 40', 30' trim".into()),
            load_in_info: Some("Rear dock, ramp to stage left, two trucks max".into()),
            dressing_room_info: Some("3 rooms + production office".into()),
            wifi_info: Some("CNB-Production / advance password".into()),
            bus_parking: Some("Rear lot, power available".into()),
            merch_split: Some("80/20 soft, venue sells".into()),
            catering_options: Some("In-house catering, menus in advance pack".into()),
            ..venue(
                "venue-1",
                "Casino New Brunswick",
                "Casino",
                "21 Casino Dr",
                "Moncton",
                "NB",
                "E1G 0R7",
                1701,
            )
        },
        Venue {
            phone: Some("(902) 893-2224".into()),
            website: Some("https://www.ratheastlinkcommunitycentre.ca".into()),
            venue_contact_name: Some("Michelle Thompson".into()),
            load_in_info: Some("Dock level load-in, forklift on site".into()),
            bus_parking: Some("North lot beside the rink entrance".into()),
            ..venue(
                "venue-2",
                "Rath Eastlink Community Centre",
                "Arena",
                "625 Abenaki Rd",
                "Truro",
                "NS",
                "B2N 0G6",
                1796,
            )
        },
        Venue {
            phone: Some("(709) 579-4424".into()),
            website: Some("https://holyheart.ca".into()),
            venue_contact_name: Some("Robert Murphy".into()),
            ..venue(
                "venue-3",
                "Holy Heart Theatre",
                "Theatre",
                "55 Bonaventure Ave",
                "St. John's",
                "NL",
                "A1C 3Z4",
                1000,
            )
        },
        Venue {
            phone: Some("(613) 580-2700".into()),
            venue_contact_name: Some("Amanda Wilson".into()),
            ..venue(
                "venue-4",
                "Meridian Theatres at Centrepointe",
                "Theatre",
                "101 Centrepointe Dr",
                "Ottawa",
                "ON",
                "K2G 5K7",
                955,
            )
        },
        venue(
            "venue-5",
            "Tribute Communities Centre",
            "Arena",
            "99 Athol St E",
            "Oshawa",
            "ON",
            "L1H 1B9",
            5100,
        ),
        venue(
            "venue-6",
            "Harry Lumley Bayshore Community Centre",
            "Arena",
            "1900 3rd Ave E",
            "Owen Sound",
            "ON",
            "N4K 2K4",
            3500,
        ),
        venue(
            "venue-7",
            "Centennial Hall",
            "Theatre",
            "550 Wellington St",
            "London",
            "ON",
            "N6B 2P3",
            1729,
        ),
        venue(
            "venue-8",
            "Showplace Performance Centre",
            "Theatre",
            "290 George St N",
            "Peterborough",
            "ON",
            "K9J 3H2",
            647,
        ),
        venue(
            "venue-9",
            "Centre In The Square",
            "Theatre",
            "101 Queen St N",
            "Kitchener",
            "ON",
            "N2H 6P7",
            2047,
        ),
        venue(
            "venue-10",
            "OLG Stage at Fallsview Casino",
            "Casino",
            "6380 Fallsview Blvd",
            "Niagara Falls",
            "ON",
            "L2G 7X5",
            1500,
        ),
        venue(
            "venue-11",
            "CAA Arena",
            "Arena",
            "265 Cannifton Rd",
            "Belleville",
            "ON",
            "K8N 4V8",
            700,
        ),
        venue(
            "venue-12",
            "Thunder Bay Community Auditorium",
            "Theatre",
            "450 Beverly St",
            "Thunder Bay",
            "ON",
            "P7B 5V3",
            1500,
        ),
        venue(
            "venue-13",
            "Burton Cummings Theatre",
            "Theatre",
            "364 Smith St",
            "Winnipeg",
            "MB",
            "R3B 2H2",
            1671,
        ),
        venue(
            "venue-14",
            "Western Manitoba Centennial Auditorium",
            "Theatre",
            "205 20th St",
            "Brandon",
            "MB",
            "R7B 3W8",
            900,
        ),
        venue(
            "venue-15",
            "Anne Portnuff Theatre",
            "Theatre",
            "150 Gladstone Ave N",
            "Yorkton",
            "SK",
            "S3N 2A8",
            700,
        ),
        venue(
            "venue-16",
            "Bonnyville Centennial Centre",
            "Arena",
            "4313 50th Ave",
            "Bonnyville",
            "AB",
            "T9N 1B5",
            1000,
        ),
        venue(
            "venue-17",
            "TCU Place",
            "Theatre",
            "35 22nd St E",
            "Saskatoon",
            "SK",
            "S7K 0C8",
            2003,
        ),
        venue(
            "venue-18",
            "Conexus Arts Centre",
            "Theatre",
            "200 Lakeshore Dr",
            "Regina",
            "SK",
            "S4S 7L3",
            2029,
        ),
        venue(
            "venue-19",
            "Co-op Place",
            "Arena",
            "2802 Box Springs Blvd NW",
            "Medicine Hat",
            "AB",
            "T1C 0C8",
            6500,
        ),
        venue(
            "venue-20",
            "Grey Eagle Event Centre",
            "Casino",
            "3777 Grey Eagle Dr",
            "Calgary",
            "AB",
            "T3E 3X8",
            2538,
        ),
        venue(
            "venue-21",
            "Peavey Mart Centrium",
            "Arena",
            "4847A 19th St",
            "Red Deer",
            "AB",
            "T4R 2N7",
            6500,
        ),
        venue(
            "venue-22",
            "River Cree Resort & Casino",
            "Casino",
            "300 East Lapotac Blvd",
            "Edmonton",
            "AB",
            "T7X 3Y3",
            2538,
        ),
        venue(
            "venue-23",
            "Allan & Jean Millar Centre",
            "Arena",
            "58 Sunset Blvd",
            "Whitecourt",
            "AB",
            "T7S 0A1",
            500,
        ),
        venue(
            "venue-24",
            "Kelowna Community Theatre",
            "Theatre",
            "1375 Water St",
            "Kelowna",
            "BC",
            "V1Y 1J4",
            847,
        ),
        venue(
            "venue-25",
            "Sandman Centre",
            "Arena",
            "300 Lorne St",
            "Kamloops",
            "BC",
            "V2C 1W3",
            5464,
        ),
        venue(
            "venue-26",
            "The Port Theatre",
            "Theatre",
            "125 Front St",
            "Nanaimo",
            "BC",
            "V9R 6Z4",
            800,
        ),
        venue(
            "venue-27",
            "Tidemark Theatre",
            "Theatre",
            "1220 Shoppers Row",
            "Campbell River",
            "BC",
            "V9W 2C8",
            550,
        ),
        venue(
            "venue-28",
            "Cowichan Performing Arts Centre",
            "Theatre",
            "2687 James St",
            "Duncan",
            "BC",
            "V9L 2X5",
            737,
        ),
        venue(
            "venue-29",
            "Abbotsford Centre",
            "Arena",
            "33800 King Rd",
            "Abbotsford",
            "BC",
            "V2S 8J7",
            7500,
        ),
        venue(
            "venue-30",
            "Key City Theatre",
            "Theatre",
            "20 14th Ave N",
            "Cranbrook",
            "BC",
            "V1C 2W8",
            650,
        ),
    ]
}
