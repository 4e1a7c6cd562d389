use time::Date;

use super::{day_details::*, prelude::*};
use crate::util;

/// How many joined days the dashboard schedule strip shows.
const UPCOMING_DAYS: usize = 7;

/// Advance workload across all events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceProgress {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub total: usize,
}

impl AdvanceProgress {
    /// "NN%" of events fully advanced, "N/A" when there are no events.
    pub fn percent_completed(&self) -> String {
        util::percentage(self.completed as u64, self.total as u64)
    }
}

pub fn advance_progress<D: EventRepo>(db: &D) -> Result<AdvanceProgress> {
    let mut progress = AdvanceProgress::default();
    for event in db.all_events()? {
        match event.advance_status {
            AdvanceStatus::Completed => progress.completed += 1,
            AdvanceStatus::InProgress => progress.in_progress += 1,
            AdvanceStatus::NotStarted => progress.not_started += 1,
        }
        progress.total += 1;
    }
    Ok(progress)
}

/// Headline numbers for one tour, derived by joining days and events
/// rather than read from the tour's stored counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStats {
    pub tour_id: Id,
    pub date_range: String,
    pub total_days: usize,
    pub total_shows: usize,
    pub completed_shows: usize,
    pub remaining_shows: usize,
    pub total_crew: usize,
    pub next_show_date: Option<Date>,
    pub next_show_venue: Option<String>,
    pub next_show_city: Option<String>,
}

pub fn tour_stats<D>(db: &D, tour_id: &str, today: Date) -> Result<Option<TourStats>>
where
    D: TourRepo + DayRepo + EventRepo + VenueRepo + PersonnelRepo,
{
    let Some(tour) = db.try_get_tour(tour_id)? else {
        return Ok(None);
    };
    stats_for_tour(db, &tour, today).map(Some)
}

fn stats_for_tour<D>(db: &D, tour: &Tour, today: Date) -> Result<TourStats>
where
    D: DayRepo + EventRepo + VenueRepo + PersonnelRepo,
{
    let days = db.days_of_tour(tour.id.as_str())?;

    let mut total_shows = 0;
    let mut completed_shows = 0;
    let mut next_show: Option<(Date, String, Event)> = None;
    for day in &days {
        let Some(event) = db.try_get_event_of_day(day.id.as_str())? else {
            continue;
        };
        total_shows += 1;
        if day.date < today {
            completed_shows += 1;
        } else if next_show.is_none() {
            // Days come back in itinerary order, so the first
            // not-yet-played show is the next one.
            next_show = Some((day.date, day.location(), event));
        }
    }

    let (next_show_date, next_show_venue, next_show_city) = match next_show {
        Some((date, city, event)) => {
            let venue = match &event.venue_id {
                Some(id) => db.try_get_venue(id.as_str())?,
                None => None,
            };
            (Some(date), venue.map(|v| v.name), Some(city))
        }
        None => (None, None, None),
    };

    Ok(TourStats {
        tour_id: tour.id.clone(),
        date_range: util::format_date_range(tour.start_date, tour.end_date),
        total_days: days.len(),
        total_shows,
        completed_shows,
        remaining_shows: total_shows - completed_shows,
        total_crew: db.personnel_of_tour(tour.id.as_str())?.len(),
        next_show_date,
        next_show_venue,
        next_show_city,
    })
}

/// Everything the main dashboard renders in one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub tour: Tour,
    pub stats: TourStats,
    pub upcoming_days: Vec<DayWithDetails>,
    pub advance_progress: AdvanceProgress,
    pub pending_guests: Vec<Guest>,
}

pub fn dashboard<D: Db>(db: &D, tour_id: &str, today: Date) -> Result<Option<Dashboard>> {
    let Some(tour) = db.try_get_tour(tour_id)? else {
        return Ok(None);
    };
    let stats = stats_for_tour(db, &tour, today)?;
    let upcoming_days = upcoming_schedule(db, today, UPCOMING_DAYS)?;
    let advance_progress = advance_progress(db)?;
    let pending_guests = db.guests_with_status(GuestStatus::Pending)?;
    log::debug!(
        "dashboard for {}: {} upcoming days, {} pending guests",
        tour.name,
        upcoming_days.len(),
        pending_guests.len()
    );
    Ok(Some(Dashboard {
        tour,
        stats,
        upcoming_days,
        advance_progress,
        pending_guests,
    }))
}
