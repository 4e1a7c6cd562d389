use time::Date;

use super::prelude::*;

/// A day joined with its event and the event's venue and hotel.
///
/// Every related slot tolerates absence: a day without an event, or an
/// event whose venue/hotel reference does not resolve, simply leaves
/// the slot empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DayWithDetails {
    pub day: Day,
    pub event: Option<Event>,
    pub venue: Option<Venue>,
    pub hotel: Option<Hotel>,
}

impl DayWithDetails {
    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }
}

pub fn day_with_details<D>(db: &D, day_id: &str) -> Result<Option<DayWithDetails>>
where
    D: DayRepo + EventRepo + VenueRepo + HotelRepo,
{
    let Some(day) = db.try_get_day(day_id)? else {
        return Ok(None);
    };
    let event = db.try_get_event_of_day(day_id)?;
    attach_event_details(db, day, event).map(Some)
}

/// All days of a tour joined with their events, in itinerary order.
pub fn days_with_events<D>(db: &D, tour_id: &str) -> Result<Vec<DayWithDetails>>
where
    D: DayRepo + EventRepo + VenueRepo + HotelRepo,
{
    let days = db.days_of_tour(tour_id)?;
    let mut joined = Vec::with_capacity(days.len());
    for day in days {
        let event = db.try_get_event_of_day(day.id.as_str())?;
        joined.push(attach_event_details(db, day, event)?);
    }
    Ok(joined)
}

/// The next `count` days on or after `from`, joined with their events.
pub fn upcoming_schedule<D>(db: &D, from: Date, count: usize) -> Result<Vec<DayWithDetails>>
where
    D: DayRepo + EventRepo + VenueRepo + HotelRepo,
{
    let days = db.days_on_or_after(from)?;
    let mut joined = Vec::with_capacity(count.min(days.len()));
    for day in days.into_iter().take(count) {
        let event = db.try_get_event_of_day(day.id.as_str())?;
        joined.push(attach_event_details(db, day, event)?);
    }
    Ok(joined)
}

fn attach_event_details<D>(db: &D, day: Day, event: Option<Event>) -> Result<DayWithDetails>
where
    D: VenueRepo + HotelRepo,
{
    let venue = match event.as_ref().and_then(|e| e.venue_id.as_ref()) {
        Some(id) => db.try_get_venue(id.as_str())?,
        None => None,
    };
    let hotel = match event.as_ref().and_then(|e| e.hotel_id.as_ref()) {
        Some(id) => db.try_get_hotel(id.as_str())?,
        None => None,
    };
    Ok(DayWithDetails {
        day,
        event,
        venue,
        hotel,
    })
}
