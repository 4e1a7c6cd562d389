use roadbook_entities::event::*;

// A show template with the standard doors/showtime block. The first
// dates of the run are fully advanced and override the template; the
// back half of the itinerary is still bare bones.
fn show(
    id: &str,
    day_id: &str,
    venue_id: &str,
    hotel_id: &str,
    capacity: u32,
    total_comps: u32,
) -> Event {
    Event {
        id: id.into(),
        day_id: day_id.into(),
        venue_id: Some(venue_id.into()),
        hotel_id: Some(hotel_id.into()),
        load_in: None,
        sound_check: None,
        doors: Some("7:00 PM".into()),
        show_time: Some("8:00 PM".into()),
        curfew: None,
        set_length: Some(120),
        lunch: None,
        lunch_count: None,
        dinner: None,
        dinner_count: None,
        return_to_hotel_after_soundcheck: None,
        return_to_hotel_after_show: None,
        day_of_show_contact_id: None,
        promoter_id: None,
        primary_promoter_contact_id: None,
        load_in_details: None,
        sound_details: None,
        light_details: None,
        security_details: None,
        catering_details: None,
        meet_and_greet: None,
        advance_status: AdvanceStatus::NotStarted,
        capacity: Some(capacity),
        tickets_sold: Some(0),
        total_comps: Some(total_comps),
        comps_used: Some(0),
        notes: None,
    }
}

pub(crate) fn events() -> Vec<Event> {
    vec![
        // Moncton production rehearsal
        Event {
            load_in: Some("10:00 AM".into()),
            sound_check: Some("2:00 PM".into()),
            curfew: Some("11:00 PM".into()),
            lunch: Some("12:00 PM".into()),
            lunch_count: Some(15),
            dinner: Some("5:00 PM".into()),
            dinner_count: Some(15),
            day_of_show_contact_id: Some("contact-1".into()),
            promoter_id: Some("contact-2".into()),
            advance_status: AdvanceStatus::Completed,
            notes: Some("Rehearsal day - full production setup".into()),
            ..show("event-1", "day-3", "venue-1", "hotel-1", 1701, 30)
        },
        // Moncton, opening night
        Event {
            load_in: Some("10:00 AM".into()),
            sound_check: Some("4:00 PM".into()),
            curfew: Some("11:00 PM".into()),
            lunch: Some("12:00 PM".into()),
            lunch_count: Some(15),
            dinner: Some("5:00 PM".into()),
            dinner_count: Some(15),
            return_to_hotel_after_show: Some(true),
            day_of_show_contact_id: Some("contact-1".into()),
            promoter_id: Some("contact-2".into()),
            load_in_details: Some("Rear dock, two trucks max at a time".into()),
            catering_details: Some("Venue caters lunch and dinner, green room stocked".into()),
            advance_status: AdvanceStatus::Completed,
            tickets_sold: Some(1400),
            comps_used: Some(4),
            notes: Some("First show of tour!".into()),
            ..show("event-2", "day-4", "venue-1", "hotel-1", 1701, 30)
        },
        // Truro
        Event {
            load_in: Some("10:00 AM".into()),
            sound_check: Some("4:00 PM".into()),
            curfew: Some("11:00 PM".into()),
            lunch: Some("12:00 PM".into()),
            lunch_count: Some(15),
            dinner: Some("5:00 PM".into()),
            dinner_count: Some(15),
            day_of_show_contact_id: Some("contact-3".into()),
            promoter_id: Some("contact-2".into()),
            advance_status: AdvanceStatus::InProgress,
            tickets_sold: Some(1200),
            ..show("event-3", "day-5", "venue-2", "hotel-2", 1796, 25)
        },
        // St. John's, two nights
        Event {
            load_in: Some("10:00 AM".into()),
            sound_check: Some("4:00 PM".into()),
            curfew: Some("11:00 PM".into()),
            day_of_show_contact_id: Some("contact-4".into()),
            promoter_id: Some("contact-2".into()),
            advance_status: AdvanceStatus::InProgress,
            tickets_sold: Some(850),
            ..show("event-4", "day-7", "venue-3", "hotel-3", 1000, 20)
        },
        Event {
            load_in: Some("12:00 PM".into()),
            sound_check: Some("4:00 PM".into()),
            curfew: Some("11:00 PM".into()),
            day_of_show_contact_id: Some("contact-4".into()),
            promoter_id: Some("contact-2".into()),
            advance_status: AdvanceStatus::InProgress,
            tickets_sold: Some(920),
            ..show("event-5", "day-8", "venue-3", "hotel-3", 1000, 20)
        },
        // Ottawa
        Event {
            day_of_show_contact_id: Some("contact-5".into()),
            promoter_id: Some("contact-2".into()),
            ..show("event-6", "day-10", "venue-4", "hotel-4", 955, 20)
        },
        show("event-7", "day-11", "venue-5", "hotel-5", 5100, 40),
        show("event-8", "day-12", "venue-6", "hotel-6", 3500, 30),
        show("event-9", "day-14", "venue-7", "hotel-7", 1729, 25),
        show("event-10", "day-15", "venue-8", "hotel-8", 647, 15),
        show("event-11", "day-16", "venue-8", "hotel-8", 647, 15),
        show("event-12", "day-17", "venue-9", "hotel-9", 2047, 30),
        show("event-13", "day-19", "venue-10", "hotel-10", 1500, 25),
        show("event-14", "day-20", "venue-11", "hotel-11", 700, 15),
        show("event-15", "day-23", "venue-12", "hotel-11", 1500, 25),
        show("event-16", "day-25", "venue-13", "hotel-12", 1671, 25),
        show("event-17", "day-26", "venue-14", "hotel-13", 900, 20),
        show("event-18", "day-27", "venue-15", "hotel-11", 700, 15),
        show("event-19", "day-30", "venue-16", "hotel-11", 1000, 20),
        show("event-20", "day-31", "venue-17", "hotel-14", 2003, 30),
        show("event-21", "day-32", "venue-18", "hotel-15", 2029, 30),
        show("event-22", "day-33", "venue-19", "hotel-11", 6500, 50),
        show("event-23", "day-34", "venue-20", "hotel-16", 2538, 35),
        show("event-24", "day-36", "venue-21", "hotel-17", 6500, 50),
        show("event-25", "day-37", "venue-21", "hotel-17", 6500, 50),
        show("event-26", "day-38", "venue-22", "hotel-18", 2538, 35),
        show("event-27", "day-39", "venue-23", "hotel-11", 500, 10),
        show("event-28", "day-40", "venue-24", "hotel-19", 847, 20),
        show("event-29", "day-41", "venue-24", "hotel-19", 847, 20),
        show("event-30", "day-43", "venue-25", "hotel-20", 5464, 40),
        show("event-31", "day-44", "venue-26", "hotel-21", 800, 15),
        show("event-32", "day-45", "venue-27", "hotel-22", 550, 10),
        show("event-33", "day-46", "venue-28", "hotel-11", 737, 15),
        show("event-34", "day-47", "venue-29", "hotel-23", 7500, 50),
        Event {
            notes: Some("Final show of tour!".into()),
            ..show("event-35", "day-49", "venue-30", "hotel-24", 650, 15)
        },
    ]
}
