pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    contact_builder::*, day_builder::*, event_builder::*, guest_builder::*, hotel_builder::*,
    person_builder::*, tour_builder::*, user_builder::*, venue_builder::*,
};

pub mod tour_builder {

    use super::*;
    use crate::{id::Id, tour::*};
    use time::Date;

    #[derive(Debug)]
    pub struct TourBuild {
        tour: Tour,
    }

    impl TourBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tour.id = id.into();
            self
        }
        pub fn organization_id(mut self, id: &str) -> Self {
            self.tour.organization_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.tour.name = name.into();
            self
        }
        pub fn artist(mut self, artist: &str) -> Self {
            self.tour.artist = artist.into();
            self
        }
        pub fn dates(mut self, start: Date, end: Date) -> Self {
            self.tour.start_date = start;
            self.tour.end_date = end;
            self
        }
        pub fn tour_manager(mut self, name: &str) -> Self {
            self.tour.tour_manager = name.into();
            self
        }
        pub fn status(mut self, status: TourStatus) -> Self {
            self.tour.status = status;
            self
        }
        pub fn total_shows(mut self, n: Option<u32>) -> Self {
            self.tour.total_shows = n;
            self
        }
        pub fn completed_shows(mut self, n: Option<u32>) -> Self {
            self.tour.completed_shows = n;
            self
        }
        pub fn total_crew(mut self, n: Option<u32>) -> Self {
            self.tour.total_crew = n;
            self
        }
        pub fn finish(self) -> Tour {
            self.tour
        }
    }

    impl Builder for Tour {
        type Build = TourBuild;
        fn build() -> Self::Build {
            Self::Build {
                tour: Tour {
                    id: Id::new(),
                    organization_id: Id::default(),
                    name: "".into(),
                    artist: "".into(),
                    start_date: Date::MIN,
                    end_date: Date::MIN,
                    tour_manager: "".into(),
                    status: TourStatus::Confirmed,
                    total_days: None,
                    total_shows: None,
                    completed_shows: None,
                    total_crew: None,
                },
            }
        }
    }
}

pub mod day_builder {

    use super::*;
    use crate::{day::*, id::Id};
    use time::Date;

    #[derive(Debug)]
    pub struct DayBuild {
        day: Day,
    }

    impl DayBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.day.id = id.into();
            self
        }
        pub fn tour_id(mut self, id: &str) -> Self {
            self.day.tour_id = id.into();
            self
        }
        pub fn date(mut self, date: Date) -> Self {
            self.day.date = date;
            self
        }
        pub fn day_type(mut self, day_type: DayType) -> Self {
            self.day.day_type = day_type;
            self
        }
        pub fn status(mut self, status: DayStatus) -> Self {
            self.day.status = status;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.day.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.day.state = state.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.day.country = country.into();
            self
        }
        pub fn timezone(mut self, timezone: &str) -> Self {
            self.day.timezone = timezone.into();
            self
        }
        pub fn notes(mut self, notes: Option<&str>) -> Self {
            self.day.notes = notes.map(Into::into);
            self
        }
        pub fn finish(self) -> Day {
            self.day
        }
    }

    impl Builder for Day {
        type Build = DayBuild;
        fn build() -> Self::Build {
            Self::Build {
                day: Day {
                    id: Id::new(),
                    tour_id: Id::default(),
                    date: Date::MIN,
                    day_type: DayType::Off,
                    status: DayStatus::Confirmed,
                    city: "".into(),
                    state: "".into(),
                    country: "".into(),
                    timezone: "".into(),
                    notes: None,
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::Id};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn day_id(mut self, id: &str) -> Self {
            self.event.day_id = id.into();
            self
        }
        pub fn venue_id(mut self, id: Option<&str>) -> Self {
            self.event.venue_id = id.map(Into::into);
            self
        }
        pub fn hotel_id(mut self, id: Option<&str>) -> Self {
            self.event.hotel_id = id.map(Into::into);
            self
        }
        pub fn day_of_show_contact_id(mut self, id: Option<&str>) -> Self {
            self.event.day_of_show_contact_id = id.map(Into::into);
            self
        }
        pub fn promoter_id(mut self, id: Option<&str>) -> Self {
            self.event.promoter_id = id.map(Into::into);
            self
        }
        pub fn doors(mut self, doors: Option<&str>) -> Self {
            self.event.doors = doors.map(Into::into);
            self
        }
        pub fn show_time(mut self, show_time: Option<&str>) -> Self {
            self.event.show_time = show_time.map(Into::into);
            self
        }
        pub fn set_length(mut self, minutes: Option<u32>) -> Self {
            self.event.set_length = minutes;
            self
        }
        pub fn advance_status(mut self, status: AdvanceStatus) -> Self {
            self.event.advance_status = status;
            self
        }
        pub fn capacity(mut self, capacity: Option<u32>) -> Self {
            self.event.capacity = capacity;
            self
        }
        pub fn tickets_sold(mut self, sold: Option<u32>) -> Self {
            self.event.tickets_sold = sold;
            self
        }
        pub fn total_comps(mut self, comps: Option<u32>) -> Self {
            self.event.total_comps = comps;
            self
        }
        pub fn comps_used(mut self, used: Option<u32>) -> Self {
            self.event.comps_used = used;
            self
        }
        pub fn notes(mut self, notes: Option<&str>) -> Self {
            self.event.notes = notes.map(Into::into);
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> Self::Build {
            Self::Build {
                event: Event {
                    id: Id::new(),
                    day_id: Id::default(),
                    venue_id: None,
                    hotel_id: None,
                    load_in: None,
                    sound_check: None,
                    doors: None,
                    show_time: None,
                    curfew: None,
                    set_length: None,
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
                    capacity: None,
                    tickets_sold: None,
                    total_comps: None,
                    comps_used: None,
                    notes: None,
                },
            }
        }
    }
}

pub mod venue_builder {

    use super::*;
    use crate::{id::Id, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn organization_id(mut self, id: &str) -> Self {
            self.venue.organization_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn venue_type(mut self, venue_type: &str) -> Self {
            self.venue.venue_type = venue_type.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.venue.address = address.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.venue.state = state.into();
            self
        }
        pub fn capacity(mut self, capacity: Option<u32>) -> Self {
            self.venue.capacity = capacity;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> Self::Build {
            Self::Build {
                venue: Venue {
                    id: Id::new(),
                    organization_id: Id::default(),
                    name: "".into(),
                    venue_type: "".into(),
                    address: "".into(),
                    city: "".into(),
                    state: "".into(),
                    postal_code: "".into(),
                    country: "".into(),
                    phone: None,
                    email: None,
                    website: None,
                    venue_contact_name: None,
                    production_contact_name: None,
                    capacity: None,
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
                },
            }
        }
    }
}

pub mod hotel_builder {

    use super::*;
    use crate::{hotel::*, id::Id};

    #[derive(Debug)]
    pub struct HotelBuild {
        hotel: Hotel,
    }

    impl HotelBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.hotel.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.hotel.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.hotel.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.hotel.state = state.into();
            self
        }
        pub fn contact_name(mut self, name: Option<&str>) -> Self {
            self.hotel.contact_name = name.map(Into::into);
            self
        }
        pub fn finish(self) -> Hotel {
            self.hotel
        }
    }

    impl Builder for Hotel {
        type Build = HotelBuild;
        fn build() -> Self::Build {
            Self::Build {
                hotel: Hotel {
                    id: Id::new(),
                    organization_id: Id::default(),
                    name: "".into(),
                    address: "".into(),
                    city: "".into(),
                    state: "".into(),
                    postal_code: "".into(),
                    phone: None,
                    email: None,
                    contact_name: None,
                    confirmation_number: None,
                    distance_to_venue: None,
                    travel_time_to_venue: None,
                    bus_parking: None,
                    parking_notes: None,
                    amenities: None,
                    notes: None,
                },
            }
        }
    }
}

pub mod person_builder {

    use super::*;
    use crate::{id::Id, person::*};

    #[derive(Debug)]
    pub struct PersonBuild {
        person: Person,
    }

    impl PersonBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.person.id = id.into();
            self
        }
        pub fn first_name(mut self, name: &str) -> Self {
            self.person.first_name = name.into();
            self
        }
        pub fn middle_name(mut self, name: Option<&str>) -> Self {
            self.person.middle_name = name.map(Into::into);
            self
        }
        pub fn last_name(mut self, name: &str) -> Self {
            self.person.last_name = name.into();
            self
        }
        pub fn role(mut self, role: &str) -> Self {
            self.person.role = role.into();
            self
        }
        pub fn department(mut self, department: &str) -> Self {
            self.person.department = department.into();
            self
        }
        pub fn tour_ids(mut self, ids: Vec<&str>) -> Self {
            self.person.tour_ids = ids.into_iter().map(Into::into).collect();
            self
        }
        pub fn company(mut self, company: Option<&str>) -> Self {
            self.person.company = company.map(Into::into);
            self
        }
        pub fn finish(self) -> Person {
            self.person
        }
    }

    impl Builder for Person {
        type Build = PersonBuild;
        fn build() -> Self::Build {
            Self::Build {
                person: Person {
                    id: Id::new(),
                    first_name: "".into(),
                    middle_name: None,
                    last_name: "".into(),
                    email: None,
                    phone: None,
                    address: None,
                    date_of_birth: None,
                    tour_ids: vec![],
                    role: "".into(),
                    department: "".into(),
                    company: None,
                    passport_number: None,
                    passport_expiration: None,
                    passport_country: None,
                    nationality: None,
                    emergency_contact: None,
                    shirt_size: None,
                    jacket_size: None,
                    notes: None,
                },
            }
        }
    }
}

pub mod contact_builder {

    use super::*;
    use crate::{contact::*, id::Id};

    #[derive(Debug)]
    pub struct ContactBuild {
        contact: Contact,
    }

    impl ContactBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.contact.id = id.into();
            self
        }
        pub fn first_name(mut self, name: &str) -> Self {
            self.contact.first_name = name.into();
            self
        }
        pub fn last_name(mut self, name: &str) -> Self {
            self.contact.last_name = name.into();
            self
        }
        pub fn role(mut self, role: &str) -> Self {
            self.contact.role = role.into();
            self
        }
        pub fn company_id(mut self, id: Option<&str>) -> Self {
            self.contact.company_id = id.map(Into::into);
            self
        }
        pub fn company_name(mut self, name: Option<&str>) -> Self {
            self.contact.company_name = name.map(Into::into);
            self
        }
        pub fn finish(self) -> Contact {
            self.contact
        }
    }

    impl Builder for Contact {
        type Build = ContactBuild;
        fn build() -> Self::Build {
            Self::Build {
                contact: Contact {
                    id: Id::new(),
                    organization_id: Id::default(),
                    first_name: "".into(),
                    last_name: "".into(),
                    email: None,
                    phone: None,
                    role: "".into(),
                    title: None,
                    company_id: None,
                    company_name: None,
                    address: None,
                    website: None,
                    notes: None,
                    tags: vec![],
                    is_active: true,
                },
            }
        }
    }
}

pub mod guest_builder {

    use super::*;
    use crate::{guest::*, id::Id};

    #[derive(Debug)]
    pub struct GuestBuild {
        guest: Guest,
    }

    impl GuestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.guest.id = id.into();
            self
        }
        pub fn event_id(mut self, id: &str) -> Self {
            self.guest.event_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.guest.name = name.into();
            self
        }
        pub fn tickets(mut self, tickets: u32) -> Self {
            self.guest.tickets = tickets;
            self
        }
        pub fn passes(mut self, passes: u32) -> Self {
            self.guest.passes = passes;
            self
        }
        pub fn guest_type(mut self, guest_type: Option<GuestType>) -> Self {
            self.guest.guest_type = guest_type;
            self
        }
        pub fn status(mut self, status: GuestStatus) -> Self {
            self.guest.status = status;
            self
        }
        pub fn affiliation(mut self, affiliation: Option<&str>) -> Self {
            self.guest.affiliation = affiliation.map(Into::into);
            self
        }
        pub fn finish(self) -> Guest {
            self.guest
        }
    }

    impl Builder for Guest {
        type Build = GuestBuild;
        fn build() -> Self::Build {
            Self::Build {
                guest: Guest {
                    id: Id::new(),
                    event_id: Id::default(),
                    name: "".into(),
                    email: None,
                    phone: None,
                    tickets: 0,
                    passes: 0,
                    guest_type: None,
                    status: GuestStatus::Pending,
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
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::Id, user::*};
    use time::OffsetDateTime;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn organization_id(mut self, id: &str) -> Self {
            self.user.organization_id = id.into();
            self
        }
        pub fn first_name(mut self, name: &str) -> Self {
            self.user.first_name = name.into();
            self
        }
        pub fn last_name(mut self, name: &str) -> Self {
            self.user.last_name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn title(mut self, title: Option<&str>) -> Self {
            self.user.title = title.map(Into::into);
            self
        }
        pub fn role(mut self, role: UserRole) -> Self {
            self.user.role = role;
            self
        }
        pub fn status(mut self, status: UserStatus) -> Self {
            self.user.status = status;
            self
        }
        pub fn user_group_ids(mut self, ids: Vec<&str>) -> Self {
            self.user.user_group_ids = ids.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            Self::Build {
                user: User {
                    id: Id::new(),
                    organization_id: Id::default(),
                    first_name: "".into(),
                    last_name: "".into(),
                    email: "".into(),
                    phone: None,
                    title: None,
                    role: UserRole::default(),
                    status: UserStatus::Active,
                    user_group_ids: vec![],
                    last_login_at: None,
                    created_at: OffsetDateTime::UNIX_EPOCH,
                    invited_at: None,
                    invited_by: None,
                },
            }
        }
    }
}
