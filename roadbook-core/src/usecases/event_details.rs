use super::prelude::*;

/// An event joined with everything an advance or detail view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWithDetails {
    pub event: Event,
    pub day: Option<Day>,
    pub venue: Option<Venue>,
    pub hotel: Option<Hotel>,
    pub day_of_show_contact: Option<Contact>,
    pub promoter: Option<Contact>,
    pub guests: Vec<Guest>,
    pub ticket_allocations: Vec<TicketAllocation>,
}

pub fn event_with_details<D>(db: &D, event_id: &str) -> Result<Option<EventWithDetails>>
where
    D: EventRepo + DayRepo + VenueRepo + HotelRepo + ContactRepo + GuestRepo,
{
    let Some(event) = db.try_get_event(event_id)? else {
        return Ok(None);
    };
    join_event(db, event).map(Some)
}

/// Events whose advance is not yet completed, fully joined.
pub fn events_needing_advance<D>(db: &D) -> Result<Vec<EventWithDetails>>
where
    D: EventRepo + DayRepo + VenueRepo + HotelRepo + ContactRepo + GuestRepo,
{
    let mut results = Vec::new();
    for event in db.all_events()? {
        if event.advance_status.is_completed() {
            continue;
        }
        results.push(join_event(db, event)?);
    }
    Ok(results)
}

/// All shows booked at one venue, fully joined.
pub fn shows_for_venue<D>(db: &D, venue_id: &str) -> Result<Vec<EventWithDetails>>
where
    D: EventRepo + DayRepo + VenueRepo + HotelRepo + ContactRepo + GuestRepo,
{
    db.events_of_venue(venue_id)?
        .into_iter()
        .map(|event| join_event(db, event))
        .collect()
}

fn join_event<D>(db: &D, event: Event) -> Result<EventWithDetails>
where
    D: DayRepo + VenueRepo + HotelRepo + ContactRepo + GuestRepo,
{
    let day = db.try_get_day(event.day_id.as_str())?;
    let venue = match &event.venue_id {
        Some(id) => db.try_get_venue(id.as_str())?,
        None => None,
    };
    let hotel = match &event.hotel_id {
        Some(id) => db.try_get_hotel(id.as_str())?,
        None => None,
    };
    let day_of_show_contact = match &event.day_of_show_contact_id {
        Some(id) => db.try_get_contact(id.as_str())?,
        None => None,
    };
    let promoter = match &event.promoter_id {
        Some(id) => db.try_get_contact(id.as_str())?,
        None => None,
    };
    let guests = db.guests_of_event(event.id.as_str())?;
    let ticket_allocations = db.ticket_allocations_of_event(event.id.as_str())?;
    Ok(EventWithDetails {
        event,
        day,
        venue,
        hotel,
        day_of_show_contact,
        promoter,
        guests,
        ticket_allocations,
    })
}
