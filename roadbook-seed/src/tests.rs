use roadbook_core::{repositories::*, usecases};
use time::macros::date;

use super::*;

#[test]
fn demo_tables_are_fully_populated() {
    let db = demo();
    assert_eq!(db.count_organizations().unwrap(), 1);
    assert_eq!(db.count_tours().unwrap(), 3);
    assert_eq!(db.count_days().unwrap(), 50);
    assert_eq!(db.count_events().unwrap(), 35);
    assert_eq!(db.count_venues().unwrap(), 30);
    assert_eq!(db.count_hotels().unwrap(), 24);
    assert_eq!(db.count_personnel().unwrap(), 12);
    assert_eq!(db.count_contacts().unwrap(), 8);
    assert_eq!(db.count_companies().unwrap(), 6);
    assert_eq!(db.count_guests().unwrap(), 10);
    assert_eq!(db.ticket_allocations.len(), 12);
    assert_eq!(db.count_users().unwrap(), 10);
    assert_eq!(db.count_user_groups().unwrap(), 5);
}

#[test]
fn every_event_reference_resolves() {
    let db = demo();
    for event in &db.events {
        assert!(
            db.try_get_day(event.day_id.as_str()).unwrap().is_some(),
            "event {} points at unknown day {}",
            event.id,
            event.day_id
        );
        if let Some(venue_id) = &event.venue_id {
            assert!(db.try_get_venue(venue_id.as_str()).unwrap().is_some());
        }
        if let Some(hotel_id) = &event.hotel_id {
            assert!(db.try_get_hotel(hotel_id.as_str()).unwrap().is_some());
        }
    }
    for guest in &db.guests {
        assert!(db.try_get_event(guest.event_id.as_str()).unwrap().is_some());
    }
    for allocation in &db.ticket_allocations {
        assert!(db
            .try_get_event(allocation.event_id.as_str())
            .unwrap()
            .is_some());
    }
}

#[test]
fn opening_night_round_trip() {
    let db = demo();
    let details = usecases::day_with_details(&db, "day-4").unwrap().unwrap();
    assert_eq!(
        details.day.day_type,
        roadbook_entities::day::DayType::Show
    );
    assert_eq!(details.day.date, date!(2025 - 10 - 17));
    assert_eq!(details.day.location(), "Moncton, NB");
    let event = details.event.as_ref().unwrap();
    assert_eq!(event.id.as_str(), "event-2");
    assert_eq!(event.day_id.as_str(), "day-4");
    assert_eq!(details.venue.as_ref().unwrap().name, "Casino New Brunswick");
    assert_eq!(
        details.hotel.as_ref().unwrap().name,
        "Delta Hotels by Marriott Moncton"
    );
}

#[test]
fn absent_ids_yield_the_absent_sentinel() {
    let db = demo();
    assert!(db.try_get_day("day-999").unwrap().is_none());
    assert!(matches!(db.get_day("day-999"), Err(Error::NotFound)));
    assert!(usecases::day_with_details(&db, "day-999").unwrap().is_none());
    assert!(usecases::event_with_details(&db, "event-999")
        .unwrap()
        .is_none());
}

#[test]
fn derived_show_count_drifts_from_stored_counter() {
    let db = demo();
    let stats = usecases::tour_stats(&db, HOMECOMING_TOUR_ID, date!(2025 - 10 - 14))
        .unwrap()
        .unwrap();
    // The stored counter says 34 shows; the join counts the Moncton
    // rehearsal performance too. The drift is part of the dataset.
    let stored = db.get_tour(HOMECOMING_TOUR_ID).unwrap().total_shows;
    assert_eq!(stored, Some(34));
    assert_eq!(stats.total_shows, 35);
    assert_eq!(stats.completed_shows, 0);
    assert_eq!(stats.remaining_shows, 35);
    assert_eq!(stats.total_days, 50);
    assert_eq!(stats.total_crew, 12);
    assert_eq!(stats.date_range, "Oct 14 - Dec 2, 2025");
    assert_eq!(stats.next_show_date, Some(date!(2025 - 10 - 16)));
    assert_eq!(stats.next_show_venue.as_deref(), Some("Casino New Brunswick"));
    assert_eq!(stats.next_show_city.as_deref(), Some("Moncton, NB"));
}

#[test]
fn advance_state_of_the_run() {
    use roadbook_entities::event::AdvanceStatus;
    let db = demo();
    assert_eq!(
        db.events_with_advance_status(AdvanceStatus::Completed)
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        db.events_with_advance_status(AdvanceStatus::InProgress)
            .unwrap()
            .len(),
        3
    );
    assert_eq!(
        db.events_with_advance_status(AdvanceStatus::NotStarted)
            .unwrap()
            .len(),
        30
    );
}

#[test]
fn itinerary_day_type_breakdown() {
    use roadbook_entities::day::DayType;
    let db = demo();
    assert_eq!(db.days_of_type(DayType::Show).unwrap().len(), 34);
    assert_eq!(db.days_of_type(DayType::Travel).unwrap().len(), 9);
    assert_eq!(db.days_of_type(DayType::Off).unwrap().len(), 5);
    assert_eq!(db.days_of_type(DayType::Rehearsal).unwrap().len(), 1);
    assert_eq!(db.days_of_type(DayType::Hold).unwrap().len(), 1);
}

#[test]
fn upcoming_schedule_starts_at_the_cutoff() {
    let db = demo();
    let week_one = usecases::upcoming_schedule(&db, date!(2025 - 10 - 14), 7).unwrap();
    let ids: Vec<_> = week_one.iter().map(|d| d.day.id.as_str()).collect();
    assert_eq!(
        ids,
        ["day-1", "day-2", "day-3", "day-4", "day-5", "day-6", "day-7"]
    );
}

#[test]
fn opening_night_event_details() {
    let db = demo();
    let details = usecases::event_with_details(&db, "event-2").unwrap().unwrap();
    assert_eq!(details.day.as_ref().unwrap().id.as_str(), "day-4");
    assert_eq!(details.promoter.as_ref().unwrap().full_name(), "Patrick Guay");
    assert_eq!(
        details.day_of_show_contact.as_ref().unwrap().full_name(),
        "John Smith"
    );
    assert_eq!(details.guests.len(), 5);
    assert_eq!(details.ticket_allocations.len(), 3);
}

#[test]
fn opening_night_guest_aggregation() {
    let db = demo();
    let counts = usecases::guest_counts_for_event(&db, "event-2").unwrap();
    assert_eq!(counts.total, 5);
    assert_eq!(counts.approved, 4);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.declined, 0);

    let totals = usecases::approved_ticket_totals(&db, "event-2").unwrap();
    assert_eq!(totals.tickets, 11);
    assert_eq!(totals.passes, 7);

    let summary = usecases::ticket_allocation_summary(&db, "event-2").unwrap();
    assert_eq!(summary.comp.remaining, 16);
    assert_eq!(summary.vip.remaining, 13);
    assert_eq!(summary.guest.remaining, 21);
}

#[test]
fn dashboard_on_the_first_tour_day() {
    let db = demo();
    let dashboard = usecases::dashboard(&db, HOMECOMING_TOUR_ID, date!(2025 - 10 - 14))
        .unwrap()
        .unwrap();
    assert_eq!(dashboard.tour.name, "HomeComing 2025");
    assert_eq!(dashboard.upcoming_days.len(), 7);
    assert_eq!(dashboard.pending_guests.len(), 2);
    assert_eq!(dashboard.advance_progress.completed, 2);
    assert_eq!(dashboard.advance_progress.total, 35);
    assert_eq!(dashboard.advance_progress.percent_completed(), "6%");
}

#[test]
fn global_search_spans_tables() {
    let db = demo();
    let results = usecases::global_search(&db, "kelowna").unwrap();
    assert_eq!(results.days.len(), 3);
    assert_eq!(results.venues.len(), 1);
    assert_eq!(results.events.len(), 2);
    assert!(results.personnel.is_empty());
    assert!(results.contacts.is_empty());
}

#[test]
fn search_is_case_insensitive_over_the_demo_data() {
    let db = demo();
    let lower = usecases::search_contacts(&db, "smith").unwrap();
    let upper = usecases::search_contacts(&db, "SMITH").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(usecases::search_users(&db, "elena").unwrap().len(), 1);
    assert_eq!(usecases::search_venues(&db, "theatre").unwrap().len(), 8);
}

#[test]
fn crew_directory_breakdown() {
    let db = demo();
    assert_eq!(
        usecases::departments(&db).unwrap(),
        [
            "Management",
            "Production",
            "Audio",
            "Backline",
            "Lighting",
            "Transportation",
            "Band",
        ]
    );
    let counts = usecases::crew_count_by_department(&db).unwrap();
    assert_eq!(counts[0], ("Management".to_string(), 1));
    assert_eq!(counts[2], ("Audio".to_string(), 2));
    assert_eq!(counts[5], ("Transportation".to_string(), 3));

    assert_eq!(db.personnel_of_tour(HOMECOMING_TOUR_ID).unwrap().len(), 12);
    assert_eq!(db.personnel_of_tour("tour-3").unwrap().len(), 3);
}

#[test]
fn account_breakdown() {
    use roadbook_entities::user::{UserRole, UserStatus};
    let db = demo();
    assert_eq!(
        usecases::user_count_by_role(&db).unwrap(),
        [
            (UserRole::Admin, 2),
            (UserRole::Manager, 2),
            (UserRole::Editor, 4),
            (UserRole::Viewer, 2),
        ]
    );
    assert_eq!(
        usecases::user_count_by_status(&db).unwrap(),
        [
            (UserStatus::Active, 8),
            (UserStatus::Pending, 1),
            (UserStatus::Inactive, 1),
        ]
    );
}

#[test]
fn tour_names_format_for_multi_assignment() {
    let db = demo();
    assert_eq!(
        usecases::tour_display_name(&db, &["tour-1", "tour-2"]).unwrap(),
        "HomeComing 2025 & Western Winds 2025"
    );
}

#[test]
fn calendar_and_sidebar_views_cover_the_whole_run() {
    let db = demo();

    let cells = usecases::calendar_days(&db, HOMECOMING_TOUR_ID).unwrap();
    assert_eq!(cells.len(), 50);
    assert!(!cells[0].has_event);
    assert!(cells[3].has_event);
    assert_eq!(cells[3].venue_name.as_deref(), Some("Casino New Brunswick"));

    let items = usecases::event_list_items(&db).unwrap();
    assert_eq!(items.len(), 35);
    assert!(items.iter().all(|item| item.venue_name != "TBD"));

    let joined = usecases::days_with_events(&db, HOMECOMING_TOUR_ID).unwrap();
    assert_eq!(joined.len(), 50);
    assert_eq!(joined.iter().filter(|d| d.has_event()).count(), 35);
}
