use roadbook_entities::hotel::*;

use crate::DEMO_ORGANIZATION_ID;

fn hotel(
    id: &str,
    name: &str,
    address: &str,
    city: &str,
    state: &str,
    postal_code: &str,
    confirmation: &str,
) -> Hotel {
    Hotel {
        id: id.into(),
        organization_id: DEMO_ORGANIZATION_ID.into(),
        name: name.into(),
        address: address.into(),
        city: city.into(),
        state: state.into(),
        postal_code: postal_code.into(),
        phone: None,
        email: None,
        contact_name: None,
        confirmation_number: Some(confirmation.into()),
        distance_to_venue: None,
        travel_time_to_venue: None,
        bus_parking: None,
        parking_notes: None,
        amenities: None,
        notes: None,
    }
}

pub(crate) fn hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            phone: Some("(506) 870-4444".into()),
            contact_name: Some("Sarah Mitchell".into()),
            distance_to_venue: Some("2.0 km".into()),
            travel_time_to_venue: Some("8 mins".into()),
            bus_parking: Some("Yes".into()),
            parking_notes: Some("Ample bus parking in rear lot".into()),
            amenities: Some("WiFi, Gym, Breakfast".into()),
            notes: Some("Conveniently located near the venue".into()),
            ..hotel(
                "hotel-1",
                "Delta Hotels by Marriott Moncton",
                "100 Main St",
                "Moncton",
                "NB",
                "E1C 1B9",
                "CONF-1000",
            )
        },
        Hotel {
            phone: Some("(902) 895-1651".into()),
            contact_name: Some("Claire Danes".into()),
            distance_to_venue: Some("1.2 km".into()),
            travel_time_to_venue: Some("5 mins".into()),
            bus_parking: Some("Yes".into()),
            amenities: Some("WiFi, Gym, Breakfast".into()),
            ..hotel(
                "hotel-2",
                "Best Western Glengarry",
                "150 Willow St",
                "Truro",
                "NS",
                "B2N 4Z6",
                "CONF-1001",
            )
        },
        Hotel {
            phone: Some("(709) 726-4980".into()),
            contact_name: Some("Mark Johnson".into()),
            distance_to_venue: Some("0.8 km".into()),
            travel_time_to_venue: Some("4 mins".into()),
            amenities: Some("Restaurant, Room Service, Fitness Center, Pool".into()),
            ..hotel(
                "hotel-3",
                "Sheraton Hotel Newfoundland",
                "115 Cavendish Square",
                "St. John's",
                "NL",
                "A1C 3K2",
                "CONF-1002",
            )
        },
        hotel(
            "hotel-4",
            "The Westin Ottawa",
            "11 Colonel By Dr",
            "Ottawa",
            "ON",
            "K1N 9H4",
            "CONF-1003",
        ),
        hotel(
            "hotel-5",
            "Holiday Inn Express Oshawa",
            "67 Simcoe St N",
            "Oshawa",
            "ON",
            "L1G 4S1",
            "CONF-1004",
        ),
        hotel(
            "hotel-6",
            "Best Western Inn on the Bay",
            "1800 2nd Ave E",
            "Owen Sound",
            "ON",
            "N4K 2H9",
            "CONF-1005",
        ),
        hotel(
            "hotel-7",
            "DoubleTree by Hilton London",
            "300 King St",
            "London",
            "ON",
            "N6B 1S2",
            "CONF-1006",
        ),
        hotel(
            "hotel-8",
            "Holiday Inn Peterborough Waterfront",
            "150 George St N",
            "Peterborough",
            "ON",
            "K9J 3G5",
            "CONF-1007",
        ),
        hotel(
            "hotel-9",
            "Crowne Plaza Kitchener-Waterloo",
            "105 King St E",
            "Kitchener",
            "ON",
            "N2G 2K8",
            "CONF-1008",
        ),
        hotel(
            "hotel-10",
            "Hilton Niagara Falls/Fallsview",
            "6361 Fallsview Blvd",
            "Niagara Falls",
            "ON",
            "L2G 3V9",
            "CONF-1009",
        ),
        // Fallback block booking used for the one-night drive-through
        // stops; several events share it.
        hotel(
            "hotel-11",
            "Comfort Inn & Suites",
            "200 N Front St",
            "Belleville",
            "ON",
            "K8P 3C3",
            "CONF-1010",
        ),
        hotel(
            "hotel-12",
            "The Fort Garry Hotel",
            "222 Broadway",
            "Winnipeg",
            "MB",
            "R3C 0R3",
            "CONF-1011",
        ),
        hotel(
            "hotel-13",
            "Victoria Inn Brandon",
            "3550 Victoria Ave",
            "Brandon",
            "MB",
            "R7B 2R4",
            "CONF-1012",
        ),
        hotel(
            "hotel-14",
            "Delta Hotels Bessborough",
            "601 Spadina Crescent E",
            "Saskatoon",
            "SK",
            "S7K 3G8",
            "CONF-1013",
        ),
        hotel(
            "hotel-15",
            "Hotel Saskatchewan",
            "2125 Victoria Ave",
            "Regina",
            "SK",
            "S4P 0S3",
            "CONF-1014",
        ),
        hotel(
            "hotel-16",
            "Sheraton Cavalier Calgary",
            "2620 32nd Ave NE",
            "Calgary",
            "AB",
            "T1Y 6B8",
            "CONF-1015",
        ),
        hotel(
            "hotel-17",
            "Cambridge Red Deer Hotel",
            "3310 50th Ave",
            "Red Deer",
            "AB",
            "T4N 3X9",
            "CONF-1016",
        ),
        hotel(
            "hotel-18",
            "The Westin Edmonton",
            "10135 100th St NW",
            "Edmonton",
            "AB",
            "T5J 0N7",
            "CONF-1017",
        ),
        hotel(
            "hotel-19",
            "Delta Hotels by Marriott Kelowna",
            "1310 Water St",
            "Kelowna",
            "BC",
            "V1Y 9P3",
            "CONF-1018",
        ),
        hotel(
            "hotel-20",
            "Delta Hotels Kamloops",
            "540 Victoria St",
            "Kamloops",
            "BC",
            "V2C 2B2",
            "CONF-1019",
        ),
        hotel(
            "hotel-21",
            "Coast Bastion Hotel",
            "11 Bastion St",
            "Nanaimo",
            "BC",
            "V9R 6E4",
            "CONF-1020",
        ),
        hotel(
            "hotel-22",
            "Comfort Inn & Suites Campbell River",
            "1351 Shoppers Row",
            "Campbell River",
            "BC",
            "V9W 2E1",
            "CONF-1021",
        ),
        hotel(
            "hotel-23",
            "Sandman Hotel Abbotsford",
            "32720 Simon Ave",
            "Abbotsford",
            "BC",
            "V2T 0B8",
            "CONF-1022",
        ),
        hotel(
            "hotel-24",
            "Prestige Rocky Mountain Resort",
            "209 Van Horne St S",
            "Cranbrook",
            "BC",
            "V1C 6R9",
            "CONF-1023",
        ),
    ]
}
