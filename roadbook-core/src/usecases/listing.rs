use time::Date;

use super::prelude::*;

/// One row of the event sidebar: enough to render a navigation entry
/// without further lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListItem {
    pub id: Id,
    pub weekday: String,
    pub date_short: String,
    pub location: String,
    pub venue_name: String,
    pub advance_status: AdvanceStatus,
}

pub fn event_list_items<D>(db: &D) -> Result<Vec<EventListItem>>
where
    D: EventRepo + DayRepo + VenueRepo,
{
    let events = db.all_events()?;
    let mut items = Vec::with_capacity(events.len());
    for event in events {
        let day = db.try_get_day(event.day_id.as_str())?;
        let venue = match &event.venue_id {
            Some(id) => db.try_get_venue(id.as_str())?,
            None => None,
        };
        items.push(EventListItem {
            weekday: day
                .as_ref()
                .map(|d| d.weekday_abbrev().to_owned())
                .unwrap_or_default(),
            date_short: day.as_ref().map(Day::date_short).unwrap_or_default(),
            location: day.as_ref().map(Day::location).unwrap_or_default(),
            venue_name: venue.map(|v| v.name).unwrap_or_else(|| "TBD".into()),
            advance_status: event.advance_status,
            id: event.id,
        });
    }
    Ok(items)
}

/// One cell of a calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    pub weekday: &'static str,
    pub day_type: DayType,
    pub has_event: bool,
    pub location: String,
    pub venue_name: Option<String>,
    pub event_id: Option<Id>,
}

pub fn calendar_days<D>(db: &D, tour_id: &str) -> Result<Vec<CalendarDay>>
where
    D: DayRepo + EventRepo + VenueRepo,
{
    let days = db.days_of_tour(tour_id)?;
    let mut cells = Vec::with_capacity(days.len());
    for day in days {
        let event = db.try_get_event_of_day(day.id.as_str())?;
        let venue = match event.as_ref().and_then(|e| e.venue_id.as_ref()) {
            Some(id) => db.try_get_venue(id.as_str())?,
            None => None,
        };
        cells.push(CalendarDay {
            date: day.date,
            weekday: day.weekday_abbrev(),
            day_type: day.day_type,
            has_event: event.is_some(),
            location: day.location(),
            venue_name: venue.map(|v| v.name),
            event_id: event.map(|e| e.id),
        });
    }
    Ok(cells)
}
