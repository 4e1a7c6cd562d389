use roadbook_entities::{guest::*, ticket::*};
use time::macros::date;

fn guest(
    id: &str,
    event_id: &str,
    name: &str,
    tickets: u32,
    passes: u32,
    guest_type: GuestType,
    status: GuestStatus,
) -> Guest {
    Guest {
        id: id.into(),
        event_id: event_id.into(),
        name: name.into(),
        email: None,
        phone: None,
        tickets,
        passes,
        guest_type: Some(guest_type),
        status,
        affiliation: None,
        pickup_method: None,
        requestor_id: None,
        requestor_name: None,
        request_date: None,
        approved_by_id: None,
        approved_by_name: None,
        approval_date: None,
        seat_section: None,
        seat_row: None,
        seats: None,
        notes: None,
    }
}

fn guests() -> Vec<Guest> {
    vec![
        // Moncton, opening night
        Guest {
            email: Some("jsmith@gmail.com".into()),
            phone: Some("615-555-1234".into()),
            affiliation: Some("Label".into()),
            pickup_method: Some("Will Call".into()),
            requestor_id: Some("person-1".into()),
            requestor_name: Some("Steve Coplan".into()),
            request_date: Some(date!(2025 - 09 - 15)),
            approved_by_id: Some("person-2".into()),
            approved_by_name: Some("Elena Sherertz".into()),
            approval_date: Some(date!(2025 - 09 - 15)),
            seat_section: Some("A".into()),
            seat_row: Some("4".into()),
            seats: Some("5-8".into()),
            notes: Some("VIP treatment - meet & greet after show".into()),
            ..guest(
                "guest-1",
                "event-2",
                "John Smith",
                4,
                4,
                GuestType::Vip,
                GuestStatus::Approved,
            )
        },
        Guest {
            email: Some("sarah.j@media.com".into()),
            phone: Some("416-555-2345".into()),
            affiliation: Some("Media".into()),
            pickup_method: Some("Box Office".into()),
            requestor_id: Some("person-1".into()),
            requestor_name: Some("Steve Coplan".into()),
            request_date: Some(date!(2025 - 09 - 10)),
            approved_by_id: Some("person-2".into()),
            approved_by_name: Some("Elena Sherertz".into()),
            approval_date: Some(date!(2025 - 09 - 12)),
            seat_section: Some("B".into()),
            seat_row: Some("2".into()),
            seats: Some("1-2".into()),
            notes: Some("Interview scheduled for 3pm".into()),
            ..guest(
                "guest-2",
                "event-2",
                "Sarah Johnson",
                2,
                2,
                GuestType::MeetAndGreet,
                GuestStatus::Approved,
            )
        },
        Guest {
            email: Some("david.lee@email.com".into()),
            phone: Some("902-555-3456".into()),
            affiliation: Some("Friend of Artist".into()),
            pickup_method: Some("Hand Deliver".into()),
            requestor_id: Some("person-12".into()),
            requestor_name: Some("Paul Brandt".into()),
            request_date: Some(date!(2025 - 09 - 08)),
            approved_by_id: Some("person-1".into()),
            approved_by_name: Some("Steve Coplan".into()),
            approval_date: Some(date!(2025 - 09 - 09)),
            seat_section: Some("C".into()),
            seat_row: Some("5".into()),
            seats: Some("10-13".into()),
            ..guest(
                "guest-3",
                "event-2",
                "David Lee",
                4,
                0,
                GuestType::Comp,
                GuestStatus::Approved,
            )
        },
        Guest {
            email: Some("echen@photos.com".into()),
            phone: Some("604-555-4567".into()),
            affiliation: Some("Media".into()),
            pickup_method: Some("Will Call".into()),
            requestor_id: Some("person-1".into()),
            requestor_name: Some("Steve Coplan".into()),
            request_date: Some(date!(2025 - 09 - 14)),
            approved_by_id: Some("person-1".into()),
            approved_by_name: Some("Steve Coplan".into()),
            approval_date: Some(date!(2025 - 09 - 14)),
            seat_section: Some("Photo Pit".into()),
            notes: Some("Photo pass for first 3 songs only".into()),
            ..guest(
                "guest-4",
                "event-2",
                "Emily Chen",
                1,
                1,
                GuestType::Photo,
                GuestStatus::Approved,
            )
        },
        Guest {
            email: Some("mbrown@example.com".into()),
            phone: Some("613-555-5678".into()),
            affiliation: Some("Sponsor".into()),
            pickup_method: Some("Box Office".into()),
            requestor_id: Some("contact-2".into()),
            requestor_name: Some("Patrick Guay".into()),
            request_date: Some(date!(2025 - 09 - 20)),
            ..guest(
                "guest-5",
                "event-2",
                "Michael Brown",
                3,
                0,
                GuestType::Vip,
                GuestStatus::Pending,
            )
        },
        // Truro
        Guest {
            email: Some("lwhite@radio.ca".into()),
            phone: Some("902-555-6789".into()),
            affiliation: Some("Radio".into()),
            pickup_method: Some("Will Call".into()),
            requestor_id: Some("person-1".into()),
            requestor_name: Some("Steve Coplan".into()),
            request_date: Some(date!(2025 - 09 - 18)),
            approved_by_id: Some("person-1".into()),
            approved_by_name: Some("Steve Coplan".into()),
            approval_date: Some(date!(2025 - 09 - 18)),
            notes: Some("Radio interview at 4pm".into()),
            ..guest(
                "guest-6",
                "event-3",
                "Lisa White",
                2,
                2,
                GuestType::MeetAndGreet,
                GuestStatus::Approved,
            )
        },
        Guest {
            email: Some("tgreen@promoter.com".into()),
            phone: Some("902-555-7890".into()),
            affiliation: Some("Promoter".into()),
            pickup_method: Some("Will Call".into()),
            requestor_id: Some("contact-2".into()),
            requestor_name: Some("Patrick Guay".into()),
            request_date: Some(date!(2025 - 09 - 15)),
            approved_by_id: Some("person-1".into()),
            approved_by_name: Some("Steve Coplan".into()),
            approval_date: Some(date!(2025 - 09 - 16)),
            ..guest(
                "guest-7",
                "event-3",
                "Tom Green",
                4,
                4,
                GuestType::Vip,
                GuestStatus::Approved,
            )
        },
        // St. John's, first night
        Guest {
            email: Some("jwalsh@cbc.ca".into()),
            phone: Some("709-555-1111".into()),
            affiliation: Some("CBC".into()),
            pickup_method: Some("Will Call".into()),
            requestor_id: Some("person-1".into()),
            requestor_name: Some("Steve Coplan".into()),
            request_date: Some(date!(2025 - 09 - 25)),
            ..guest(
                "guest-8",
                "event-4",
                "Jennifer Walsh",
                2,
                1,
                GuestType::Photo,
                GuestStatus::Pending,
            )
        },
        Guest {
            email: Some("kpower@ntv.ca".into()),
            phone: Some("709-555-2222".into()),
            affiliation: Some("NTV".into()),
            pickup_method: Some("Will Call".into()),
            requestor_id: Some("person-1".into()),
            requestor_name: Some("Steve Coplan".into()),
            request_date: Some(date!(2025 - 09 - 22)),
            notes: Some("Declined - M&G full".into()),
            ..guest(
                "guest-9",
                "event-4",
                "Kevin Power",
                2,
                2,
                GuestType::MeetAndGreet,
                GuestStatus::Declined,
            )
        },
        // St. John's, second night
        Guest {
            email: Some("mary.b@email.com".into()),
            phone: Some("709-555-3333".into()),
            affiliation: Some("Family".into()),
            pickup_method: Some("Hand Deliver".into()),
            requestor_id: Some("person-11".into()),
            requestor_name: Some("Terri Clark".into()),
            request_date: Some(date!(2025 - 09 - 20)),
            approved_by_id: Some("person-1".into()),
            approved_by_name: Some("Steve Coplan".into()),
            approval_date: Some(date!(2025 - 09 - 20)),
            seat_section: Some("A".into()),
            seat_row: Some("1".into()),
            seats: Some("1-6".into()),
            notes: Some("Terri's family - front row reserved".into()),
            ..guest(
                "guest-10",
                "event-5",
                "Mary Chicken",
                6,
                0,
                GuestType::Comp,
                GuestStatus::Approved,
            )
        },
    ]
}

fn allocation(event_id: &str, ticket_type: TicketType, allowed: u32, used: u32) -> TicketAllocation {
    TicketAllocation {
        event_id: event_id.into(),
        ticket_type,
        allowed,
        used,
    }
}

fn ticket_allocations() -> Vec<TicketAllocation> {
    vec![
        allocation("event-2", TicketType::Comp, 30, 14),
        allocation("event-2", TicketType::Vip, 20, 7),
        allocation("event-2", TicketType::Guest, 25, 4),
        allocation("event-3", TicketType::Comp, 25, 6),
        allocation("event-3", TicketType::Vip, 15, 8),
        allocation("event-3", TicketType::Guest, 20, 0),
        allocation("event-4", TicketType::Comp, 20, 4),
        allocation("event-4", TicketType::Vip, 10, 0),
        allocation("event-4", TicketType::Guest, 15, 0),
        allocation("event-5", TicketType::Comp, 20, 6),
        allocation("event-5", TicketType::Vip, 10, 0),
        allocation("event-5", TicketType::Guest, 15, 0),
    ]
}

pub(crate) fn guest_lists() -> (Vec<Guest>, Vec<TicketAllocation>) {
    (guests(), ticket_allocations())
}
