use time::macros::date;

use super::{prelude::*, *};
use crate::repositories::Error as RepoError;
use roadbook_entities::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($entity:ty),+ $(,)?) => {
        $(impl Identified for $entity {
            fn id(&self) -> &str {
                self.id.as_str()
            }
        })+
    };
}

impl_identified!(
    Organization,
    Tour,
    Day,
    Event,
    Venue,
    Hotel,
    Person,
    Contact,
    Company,
    Guest,
    User,
    UserGroup,
);

fn first_match<T: Identified + Clone>(records: &[T], id: &str) -> RepoResult<T> {
    records
        .iter()
        .find(|r| r.id() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

#[derive(Debug, Default)]
pub struct MockDb {
    pub organizations: Vec<Organization>,
    pub tours: Vec<Tour>,
    pub days: Vec<Day>,
    pub events: Vec<Event>,
    pub venues: Vec<Venue>,
    pub hotels: Vec<Hotel>,
    pub personnel: Vec<Person>,
    pub contacts: Vec<Contact>,
    pub companies: Vec<Company>,
    pub guests: Vec<Guest>,
    pub ticket_allocations: Vec<TicketAllocation>,
    pub users: Vec<User>,
    pub user_groups: Vec<UserGroup>,
}

impl OrganizationRepo for MockDb {
    fn get_organization(&self, id: &str) -> RepoResult<Organization> {
        first_match(&self.organizations, id)
    }
    fn all_organizations(&self) -> RepoResult<Vec<Organization>> {
        Ok(self.organizations.clone())
    }
    fn count_organizations(&self) -> RepoResult<usize> {
        Ok(self.organizations.len())
    }
}

impl TourRepo for MockDb {
    fn get_tour(&self, id: &str) -> RepoResult<Tour> {
        first_match(&self.tours, id)
    }
    fn all_tours(&self) -> RepoResult<Vec<Tour>> {
        Ok(self.tours.clone())
    }
    fn count_tours(&self) -> RepoResult<usize> {
        Ok(self.tours.len())
    }
    fn tours_with_status(&self, status: TourStatus) -> RepoResult<Vec<Tour>> {
        Ok(self
            .tours
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect())
    }
}

impl DayRepo for MockDb {
    fn get_day(&self, id: &str) -> RepoResult<Day> {
        first_match(&self.days, id)
    }
    fn all_days_chronologically(&self) -> RepoResult<Vec<Day>> {
        Ok(self.days.clone())
    }
    fn count_days(&self) -> RepoResult<usize> {
        Ok(self.days.len())
    }
    fn days_of_tour(&self, tour_id: &str) -> RepoResult<Vec<Day>> {
        Ok(self
            .days
            .iter()
            .filter(|d| d.tour_id.as_str() == tour_id)
            .cloned()
            .collect())
    }
    fn days_of_type(&self, day_type: DayType) -> RepoResult<Vec<Day>> {
        Ok(self
            .days
            .iter()
            .filter(|d| d.day_type == day_type)
            .cloned()
            .collect())
    }
    fn days_on_or_after(&self, date: time::Date) -> RepoResult<Vec<Day>> {
        Ok(self
            .days
            .iter()
            .filter(|d| d.date >= date)
            .cloned()
            .collect())
    }
    fn try_get_day_on_date(&self, date: time::Date) -> RepoResult<Option<Day>> {
        Ok(self.days.iter().find(|d| d.date == date).cloned())
    }
}

impl EventRepo for MockDb {
    fn get_event(&self, id: &str) -> RepoResult<Event> {
        first_match(&self.events, id)
    }
    fn all_events(&self) -> RepoResult<Vec<Event>> {
        Ok(self.events.clone())
    }
    fn count_events(&self) -> RepoResult<usize> {
        Ok(self.events.len())
    }
    fn try_get_event_of_day(&self, day_id: &str) -> RepoResult<Option<Event>> {
        Ok(self
            .events
            .iter()
            .find(|e| e.day_id.as_str() == day_id)
            .cloned())
    }
    fn events_of_venue(&self, venue_id: &str) -> RepoResult<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.venue_id.as_ref().is_some_and(|id| id.as_str() == venue_id))
            .cloned()
            .collect())
    }
    fn events_with_advance_status(&self, status: AdvanceStatus) -> RepoResult<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.advance_status == status)
            .cloned()
            .collect())
    }
}

impl VenueRepo for MockDb {
    fn get_venue(&self, id: &str) -> RepoResult<Venue> {
        first_match(&self.venues, id)
    }
    fn all_venues(&self) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.clone())
    }
    fn count_venues(&self) -> RepoResult<usize> {
        Ok(self.venues.len())
    }
    fn venues_in_city(&self, city: &str) -> RepoResult<Vec<Venue>> {
        Ok(self
            .venues
            .iter()
            .filter(|v| v.city == city)
            .cloned()
            .collect())
    }
}

impl HotelRepo for MockDb {
    fn get_hotel(&self, id: &str) -> RepoResult<Hotel> {
        first_match(&self.hotels, id)
    }
    fn all_hotels(&self) -> RepoResult<Vec<Hotel>> {
        Ok(self.hotels.clone())
    }
    fn count_hotels(&self) -> RepoResult<usize> {
        Ok(self.hotels.len())
    }
    fn hotels_in_city(&self, city: &str) -> RepoResult<Vec<Hotel>> {
        Ok(self
            .hotels
            .iter()
            .filter(|h| h.city == city)
            .cloned()
            .collect())
    }
}

impl PersonnelRepo for MockDb {
    fn get_person(&self, id: &str) -> RepoResult<Person> {
        first_match(&self.personnel, id)
    }
    fn all_personnel(&self) -> RepoResult<Vec<Person>> {
        Ok(self.personnel.clone())
    }
    fn count_personnel(&self) -> RepoResult<usize> {
        Ok(self.personnel.len())
    }
    fn personnel_of_tour(&self, tour_id: &str) -> RepoResult<Vec<Person>> {
        Ok(self
            .personnel
            .iter()
            .filter(|p| p.is_on_tour(tour_id))
            .cloned()
            .collect())
    }
    fn personnel_in_department(&self, department: &str) -> RepoResult<Vec<Person>> {
        Ok(self
            .personnel
            .iter()
            .filter(|p| p.department == department)
            .cloned()
            .collect())
    }
}

impl ContactRepo for MockDb {
    fn get_contact(&self, id: &str) -> RepoResult<Contact> {
        first_match(&self.contacts, id)
    }
    fn all_contacts(&self) -> RepoResult<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
    fn count_contacts(&self) -> RepoResult<usize> {
        Ok(self.contacts.len())
    }
    fn contacts_of_company(&self, company_id: &str) -> RepoResult<Vec<Contact>> {
        Ok(self
            .contacts
            .iter()
            .filter(|c| {
                c.company_id
                    .as_ref()
                    .is_some_and(|id| id.as_str() == company_id)
            })
            .cloned()
            .collect())
    }
}

impl CompanyRepo for MockDb {
    fn get_company(&self, id: &str) -> RepoResult<Company> {
        first_match(&self.companies, id)
    }
    fn all_companies(&self) -> RepoResult<Vec<Company>> {
        Ok(self.companies.clone())
    }
    fn count_companies(&self) -> RepoResult<usize> {
        Ok(self.companies.len())
    }
}

impl GuestRepo for MockDb {
    fn get_guest(&self, id: &str) -> RepoResult<Guest> {
        first_match(&self.guests, id)
    }
    fn all_guests(&self) -> RepoResult<Vec<Guest>> {
        Ok(self.guests.clone())
    }
    fn count_guests(&self) -> RepoResult<usize> {
        Ok(self.guests.len())
    }
    fn guests_of_event(&self, event_id: &str) -> RepoResult<Vec<Guest>> {
        Ok(self
            .guests
            .iter()
            .filter(|g| g.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }
    fn guests_with_status(&self, status: GuestStatus) -> RepoResult<Vec<Guest>> {
        Ok(self
            .guests
            .iter()
            .filter(|g| g.status == status)
            .cloned()
            .collect())
    }
    fn ticket_allocations_of_event(&self, event_id: &str) -> RepoResult<Vec<TicketAllocation>> {
        Ok(self
            .ticket_allocations
            .iter()
            .filter(|a| a.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn get_user(&self, id: &str) -> RepoResult<User> {
        first_match(&self.users, id)
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.len())
    }
    fn users_of_organization(&self, organization_id: &str) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.organization_id.as_str() == organization_id)
            .cloned()
            .collect())
    }
    fn users_with_role(&self, role: UserRole) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
    fn users_with_status(&self, status: UserStatus) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.status == status)
            .cloned()
            .collect())
    }
    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

impl UserGroupRepo for MockDb {
    fn get_user_group(&self, id: &str) -> RepoResult<UserGroup> {
        first_match(&self.user_groups, id)
    }
    fn all_user_groups(&self) -> RepoResult<Vec<UserGroup>> {
        Ok(self.user_groups.clone())
    }
    fn count_user_groups(&self) -> RepoResult<usize> {
        Ok(self.user_groups.len())
    }
    fn user_groups_of_organization(&self, organization_id: &str) -> RepoResult<Vec<UserGroup>> {
        Ok(self
            .user_groups
            .iter()
            .filter(|g| g.organization_id.as_str() == organization_id)
            .cloned()
            .collect())
    }
}

impl Db for MockDb {}

/// A small but fully-connected slice of a tour: four itinerary days,
/// three shows (one with a dangling venue id, one with no venue at
/// all), a guest list and allocations for the first real show.
fn fixture() -> MockDb {
    let mut db = MockDb::default();

    db.tours.push(
        Tour::build()
            .id("tour-1")
            .name("HomeComing 2025")
            .artist("Terri Clark & Paul Brandt")
            .dates(date!(2025 - 10 - 14), date!(2025 - 12 - 02))
            .finish(),
    );
    db.tours
        .push(Tour::build().id("tour-2").name("Western Winds 2025").finish());
    db.tours
        .push(Tour::build().id("tour-3").name("Summer Revival 2024").finish());
    db.tours
        .push(Tour::build().id("tour-4").name("Harvest Nights").finish());
    db.tours
        .push(Tour::build().id("tour-5").name("First Frost").finish());

    db.days.push(
        Day::build()
            .id("day-3")
            .tour_id("tour-1")
            .date(date!(2025 - 10 - 16))
            .day_type(DayType::Rehearsal)
            .city("Moncton")
            .state("NB")
            .finish(),
    );
    db.days.push(
        Day::build()
            .id("day-4")
            .tour_id("tour-1")
            .date(date!(2025 - 10 - 17))
            .day_type(DayType::Show)
            .city("Moncton")
            .state("NB")
            .finish(),
    );
    db.days.push(
        Day::build()
            .id("day-5")
            .tour_id("tour-1")
            .date(date!(2025 - 10 - 18))
            .day_type(DayType::Show)
            .city("Truro")
            .state("NS")
            .finish(),
    );
    db.days.push(
        Day::build()
            .id("day-6")
            .tour_id("tour-1")
            .date(date!(2025 - 10 - 19))
            .day_type(DayType::Travel)
            .city("Truro")
            .state("NS")
            .finish(),
    );
    db.days.push(
        Day::build()
            .id("day-7")
            .tour_id("tour-1")
            .date(date!(2025 - 10 - 20))
            .day_type(DayType::Show)
            .city("St. John's")
            .state("NL")
            .finish(),
    );

    db.events.push(
        Event::build()
            .id("event-1")
            .day_id("day-3")
            .venue_id(Some("venue-1"))
            .hotel_id(Some("hotel-1"))
            .advance_status(AdvanceStatus::Completed)
            .finish(),
    );
    db.events.push(
        Event::build()
            .id("event-2")
            .day_id("day-4")
            .venue_id(Some("venue-1"))
            .hotel_id(Some("hotel-1"))
            .day_of_show_contact_id(Some("contact-1"))
            .promoter_id(Some("contact-2"))
            .advance_status(AdvanceStatus::Completed)
            .capacity(Some(1701))
            .tickets_sold(Some(1400))
            .total_comps(Some(30))
            .comps_used(Some(4))
            .finish(),
    );
    // venue-2 is not in the venue table: the reference dangles.
    db.events.push(
        Event::build()
            .id("event-3")
            .day_id("day-5")
            .venue_id(Some("venue-2"))
            .advance_status(AdvanceStatus::InProgress)
            .finish(),
    );
    db.events.push(
        Event::build()
            .id("event-4")
            .day_id("day-7")
            .advance_status(AdvanceStatus::NotStarted)
            .finish(),
    );

    db.venues.push(
        Venue::build()
            .id("venue-1")
            .name("Casino New Brunswick")
            .venue_type("Casino")
            .city("Moncton")
            .state("NB")
            .capacity(Some(1701))
            .finish(),
    );

    db.hotels.push(
        Hotel::build()
            .id("hotel-1")
            .name("Delta Hotels by Marriott Moncton")
            .city("Moncton")
            .state("NB")
            .finish(),
    );

    db.contacts.push(
        Contact::build()
            .id("contact-1")
            .first_name("Michelle")
            .last_name("Thompson")
            .role("Venue Manager")
            .company_id(Some("company-2"))
            .company_name(Some("Rath Eastlink Community Centre"))
            .finish(),
    );
    db.contacts.push(
        Contact::build()
            .id("contact-2")
            .first_name("Patrick")
            .last_name("Guay")
            .role("Promoter")
            .company_id(Some("company-1"))
            .company_name(Some("Live Nation Canada"))
            .finish(),
    );
    db.contacts.push(
        Contact::build()
            .id("contact-3")
            .first_name("John")
            .last_name("Smith")
            .role("Promoter Rep")
            .company_id(Some("company-1"))
            .company_name(Some("Live Nation Canada"))
            .finish(),
    );

    db.personnel.push(
        Person::build()
            .id("person-1")
            .first_name("Steve")
            .last_name("Coplan")
            .role("Tour Manager")
            .department("Management")
            .tour_ids(vec!["tour-1", "tour-2"])
            .finish(),
    );
    db.personnel.push(
        Person::build()
            .id("person-2")
            .first_name("Elena")
            .last_name("Sherertz")
            .role("Production Manager")
            .department("Production")
            .tour_ids(vec!["tour-1"])
            .finish(),
    );
    db.personnel.push(
        Person::build()
            .id("person-3")
            .first_name("Sarah")
            .last_name("Jennings")
            .role("FOH Engineer")
            .department("Audio")
            .tour_ids(vec!["tour-1"])
            .finish(),
    );
    db.personnel.push(
        Person::build()
            .id("person-4")
            .first_name("Kevin")
            .last_name("Watts")
            .role("Monitor Engineer")
            .department("Audio")
            .tour_ids(vec!["tour-2"])
            .finish(),
    );

    db.guests.push(
        Guest::build()
            .id("guest-1")
            .event_id("event-2")
            .name("John Smith")
            .tickets(4)
            .passes(4)
            .guest_type(Some(GuestType::Vip))
            .status(GuestStatus::Approved)
            .finish(),
    );
    db.guests.push(
        Guest::build()
            .id("guest-2")
            .event_id("event-2")
            .name("Sarah Johnson")
            .tickets(2)
            .passes(2)
            .guest_type(Some(GuestType::MeetAndGreet))
            .status(GuestStatus::Pending)
            .finish(),
    );
    db.guests.push(
        Guest::build()
            .id("guest-3")
            .event_id("event-2")
            .name("Kevin Power")
            .tickets(1)
            .status(GuestStatus::Declined)
            .finish(),
    );
    db.guests.push(
        Guest::build()
            .id("guest-4")
            .event_id("event-3")
            .name("Lisa White")
            .tickets(2)
            .passes(1)
            .status(GuestStatus::Approved)
            .finish(),
    );

    db.ticket_allocations.push(TicketAllocation {
        event_id: "event-2".into(),
        ticket_type: TicketType::Comp,
        allowed: 30,
        used: 14,
    });
    db.ticket_allocations.push(TicketAllocation {
        event_id: "event-2".into(),
        ticket_type: TicketType::Vip,
        allowed: 20,
        used: 7,
    });

    db.users.push(
        User::build()
            .id("user-1")
            .first_name("Steve")
            .last_name("Coplan")
            .email("steve@coplanmusic.com")
            .title(Some("Tour Manager"))
            .role(UserRole::Admin)
            .finish(),
    );
    db.users.push(
        User::build()
            .id("user-2")
            .first_name("Elena")
            .last_name("Sherertz")
            .email("elena@coplanmusic.com")
            .role(UserRole::Admin)
            .finish(),
    );
    db.users.push(
        User::build()
            .id("user-3")
            .first_name("Sarah")
            .last_name("Jennings")
            .email("sarah.jennings@tourcrew.com")
            .role(UserRole::Manager)
            .finish(),
    );
    db.users.push(
        User::build()
            .id("user-4")
            .first_name("Alex")
            .last_name("Johnson")
            .email("alex.johnson@example.com")
            .role(UserRole::Viewer)
            .status(UserStatus::Pending)
            .finish(),
    );

    db
}

#[test]
fn lookup_by_id_returns_first_match_or_none() {
    let mut db = fixture();
    assert_eq!(db.try_get_day("day-4").unwrap().unwrap().city, "Moncton");
    assert!(db.try_get_day("day-999").unwrap().is_none());
    assert!(matches!(db.get_day("day-999"), Err(RepoError::NotFound)));

    // Duplicate ids resolve to the first record in source order.
    db.days.push(
        Day::build()
            .id("day-4")
            .tour_id("tour-1")
            .city("Duplicate")
            .finish(),
    );
    assert_eq!(db.get_day("day-4").unwrap().city, "Moncton");
}

#[test]
fn day_with_details_joins_event_venue_and_hotel() {
    let db = fixture();
    let details = day_with_details(&db, "day-4").unwrap().unwrap();
    assert_eq!(details.day.day_type, DayType::Show);
    assert!(details.has_event());
    let event = details.event.unwrap();
    assert_eq!(event.id.as_str(), "event-2");
    assert_eq!(details.venue.unwrap().name, "Casino New Brunswick");
    assert_eq!(
        details.hotel.unwrap().name,
        "Delta Hotels by Marriott Moncton"
    );
}

#[test]
fn day_with_details_absent_day_is_none() {
    let db = fixture();
    assert!(day_with_details(&db, "day-999").unwrap().is_none());
}

#[test]
fn day_with_details_without_event_has_empty_slots() {
    let db = fixture();
    let details = day_with_details(&db, "day-6").unwrap().unwrap();
    assert!(!details.has_event());
    assert!(details.venue.is_none());
    assert!(details.hotel.is_none());
}

#[test]
fn day_with_details_tolerates_dangling_venue_reference() {
    let db = fixture();
    let details = day_with_details(&db, "day-5").unwrap().unwrap();
    assert!(details.event.is_some());
    assert!(details.venue.is_none());
}

#[test]
fn event_with_details_nested_day_matches_back_reference() {
    let db = fixture();
    let details = event_with_details(&db, "event-2").unwrap().unwrap();
    assert_eq!(details.day.as_ref().unwrap().id, details.event.day_id);
    assert_eq!(details.promoter.unwrap().full_name(), "Patrick Guay");
    assert_eq!(
        details.day_of_show_contact.unwrap().full_name(),
        "Michelle Thompson"
    );
    let guest_ids: Vec<_> = details.guests.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(guest_ids, ["guest-1", "guest-2", "guest-3"]);
    assert_eq!(details.ticket_allocations.len(), 2);
}

#[test]
fn event_with_details_without_venue_is_not_an_error() {
    let db = fixture();
    let details = event_with_details(&db, "event-4").unwrap().unwrap();
    assert!(details.venue.is_none());
    assert!(details.hotel.is_none());
    assert!(details.guests.is_empty());
}

#[test]
fn event_with_details_absent_event_is_none() {
    let db = fixture();
    assert!(event_with_details(&db, "event-999").unwrap().is_none());
}

#[test]
fn days_with_events_keeps_itinerary_order() {
    let db = fixture();
    let joined = days_with_events(&db, "tour-1").unwrap();
    let ids: Vec<_> = joined.iter().map(|d| d.day.id.as_str()).collect();
    assert_eq!(ids, ["day-3", "day-4", "day-5", "day-6", "day-7"]);
    assert!(days_with_events(&db, "tour-999").unwrap().is_empty());
}

#[test]
fn upcoming_schedule_respects_cutoff_and_cap() {
    let db = fixture();
    let upcoming = upcoming_schedule(&db, date!(2025 - 10 - 18), 2).unwrap();
    let ids: Vec<_> = upcoming.iter().map(|d| d.day.id.as_str()).collect();
    assert_eq!(ids, ["day-5", "day-6"]);
}

#[test]
fn events_needing_advance_excludes_completed() {
    let db = fixture();
    let pending = events_needing_advance(&db).unwrap();
    let ids: Vec<_> = pending.iter().map(|d| d.event.id.as_str()).collect();
    assert_eq!(ids, ["event-3", "event-4"]);
}

#[test]
fn shows_for_venue_joins_all_bookings() {
    let db = fixture();
    let shows = shows_for_venue(&db, "venue-1").unwrap();
    let ids: Vec<_> = shows.iter().map(|d| d.event.id.as_str()).collect();
    assert_eq!(ids, ["event-1", "event-2"]);
}

#[test]
fn search_is_case_insensitive() {
    let db = fixture();
    let lower = search_contacts(&db, "smith").unwrap();
    let upper = search_contacts(&db, "SMITH").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].last_name, "Smith");
}

#[test]
fn search_contacts_matches_company_name() {
    let db = fixture();
    let hits = search_contacts(&db, "live nation").unwrap();
    let ids: Vec<_> = hits.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["contact-2", "contact-3"]);
}

#[test]
fn search_personnel_matches_role_and_department() {
    let db = fixture();
    assert_eq!(search_personnel(&db, "engineer").unwrap().len(), 2);
    assert_eq!(search_personnel(&db, "audio").unwrap().len(), 2);
    assert!(search_personnel(&db, "pyro").unwrap().is_empty());
}

#[test]
fn search_users_matches_email_and_title() {
    let db = fixture();
    assert_eq!(search_users(&db, "tourcrew.com").unwrap().len(), 1);
    assert_eq!(search_users(&db, "tour manager").unwrap().len(), 1);
    assert_eq!(search_users(&db, "admin").unwrap().len(), 2);
}

#[test]
fn global_search_finds_events_through_their_venue() {
    let db = fixture();
    let results = global_search(&db, "casino").unwrap();
    let event_ids: Vec<_> = results.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(event_ids, ["event-1", "event-2"]);
    assert_eq!(results.venues.len(), 1);
    assert!(results.personnel.is_empty());

    let results = global_search(&db, "moncton").unwrap();
    assert_eq!(results.days.len(), 2);
}

#[test]
fn tour_display_name_formats() {
    let db = fixture();
    assert_eq!(tour_display_name(&db, &[]).unwrap(), "Not Assigned");
    assert_eq!(tour_display_name(&db, &["tour-999"]).unwrap(), "Unknown Tour");
    assert_eq!(
        tour_display_name(&db, &["tour-1"]).unwrap(),
        "HomeComing 2025"
    );
    assert_eq!(
        tour_display_name(&db, &["tour-1", "tour-2"]).unwrap(),
        "HomeComing 2025 & Western Winds 2025"
    );
    assert_eq!(
        tour_display_name(&db, &["tour-1", "tour-2", "tour-3"]).unwrap(),
        "HomeComing 2025, Western Winds 2025, Summer Revival 2024"
    );
    assert_eq!(
        tour_display_name(&db, &["tour-1", "tour-2", "tour-3", "tour-4", "tour-5"]).unwrap(),
        "5 Tours"
    );
    // Unresolved ids are skipped before the count is taken.
    assert_eq!(
        tour_display_name(&db, &["tour-1", "tour-999"]).unwrap(),
        "HomeComing 2025"
    );
}

#[test]
fn guest_counts_by_status() {
    let db = fixture();
    let counts = guest_counts_for_event(&db, "event-2").unwrap();
    assert_eq!(counts.total, 3);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.declined, 1);
    assert_eq!(guest_counts_for_event(&db, "event-999").unwrap().total, 0);
}

#[test]
fn ticket_allocation_summary_defaults_missing_types_to_zero() {
    let db = fixture();
    let summary = ticket_allocation_summary(&db, "event-2").unwrap();
    assert_eq!(summary.comp.allowed, 30);
    assert_eq!(summary.comp.remaining, 16);
    assert_eq!(summary.vip.used, 7);
    assert_eq!(summary.guest, TicketTypeSummary::default());
}

#[test]
fn approved_ticket_totals_ignore_pending_and_declined() {
    let db = fixture();
    let totals = approved_ticket_totals(&db, "event-2").unwrap();
    assert_eq!(totals.tickets, 4);
    assert_eq!(totals.passes, 4);
}

#[test]
fn departments_in_first_appearance_order() {
    let db = fixture();
    assert_eq!(
        departments(&db).unwrap(),
        ["Management", "Production", "Audio"]
    );
    let counts = crew_count_by_department(&db).unwrap();
    assert_eq!(
        counts,
        [
            ("Management".to_string(), 1),
            ("Production".to_string(), 1),
            ("Audio".to_string(), 2),
        ]
    );
}

#[test]
fn user_counts_by_role_and_status() {
    let db = fixture();
    assert_eq!(
        user_count_by_role(&db).unwrap(),
        [
            (UserRole::Admin, 2),
            (UserRole::Manager, 1),
            (UserRole::Viewer, 1),
        ]
    );
    assert_eq!(
        user_count_by_status(&db).unwrap(),
        [(UserStatus::Active, 3), (UserStatus::Pending, 1)]
    );
}

#[test]
fn advance_progress_counts_and_percentage() {
    let db = fixture();
    let progress = advance_progress(&db).unwrap();
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.in_progress, 1);
    assert_eq!(progress.not_started, 1);
    assert_eq!(progress.total, 4);
    assert_eq!(progress.percent_completed(), "50%");

    let empty = advance_progress(&MockDb::default()).unwrap();
    assert_eq!(empty.percent_completed(), "N/A");
}

#[test]
fn tour_stats_derive_from_joins() {
    let db = fixture();
    let stats = tour_stats(&db, "tour-1", date!(2025 - 10 - 18))
        .unwrap()
        .unwrap();
    assert_eq!(stats.date_range, "Oct 14 - Dec 2, 2025");
    assert_eq!(stats.total_days, 5);
    assert_eq!(stats.total_shows, 4);
    assert_eq!(stats.completed_shows, 2);
    assert_eq!(stats.remaining_shows, 2);
    assert_eq!(stats.total_crew, 3);
    assert_eq!(stats.next_show_date, Some(date!(2025 - 10 - 18)));
    // The next show's venue reference dangles, so only the city resolves.
    assert_eq!(stats.next_show_venue, None);
    assert_eq!(stats.next_show_city.as_deref(), Some("Truro, NS"));

    assert!(tour_stats(&db, "tour-999", date!(2025 - 10 - 18))
        .unwrap()
        .is_none());
}

#[test]
fn dashboard_gathers_everything() {
    let db = fixture();
    let dash = dashboard(&db, "tour-1", date!(2025 - 10 - 16))
        .unwrap()
        .unwrap();
    assert_eq!(dash.tour.name, "HomeComing 2025");
    assert_eq!(dash.upcoming_days.len(), 5);
    assert_eq!(dash.pending_guests.len(), 1);
    assert_eq!(dash.advance_progress.total, 4);
    assert!(dashboard(&db, "tour-999", date!(2025 - 10 - 16))
        .unwrap()
        .is_none());
}

#[test]
fn event_list_items_fall_back_to_tbd_venue() {
    let db = fixture();
    let items = event_list_items(&db).unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1].venue_name, "Casino New Brunswick");
    assert_eq!(items[1].weekday, "FRI");
    assert_eq!(items[1].date_short, "10/17");
    assert_eq!(items[1].location, "Moncton, NB");
    // Dangling and absent venue references both render as TBD.
    assert_eq!(items[2].venue_name, "TBD");
    assert_eq!(items[3].venue_name, "TBD");
}

#[test]
fn calendar_days_flag_events() {
    let db = fixture();
    let cells = calendar_days(&db, "tour-1").unwrap();
    assert_eq!(cells.len(), 5);
    assert!(cells[1].has_event);
    assert_eq!(cells[1].venue_name.as_deref(), Some("Casino New Brunswick"));
    assert!(!cells[3].has_event);
    assert_eq!(cells[3].event_id, None);
}
