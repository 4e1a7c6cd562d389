// Read-only access traits for the fixed tables.
// Each repository covers a single entity; related entities
// are only referenced by id and resolved by the caller at
// read time.

use roadbook_entities::{
    company::*, contact::*, day::*, event::*, guest::*, hotel::*, organization::*, person::*,
    ticket::*, tour::*, user::*, user_group::*, venue::*,
};
use thiserror::Error;
use time::Date;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait OrganizationRepo {
    fn get_organization(&self, id: &str) -> Result<Organization>;
    fn try_get_organization(&self, id: &str) -> Result<Option<Organization>> {
        match self.get_organization(id) {
            Ok(organization) => Ok(Some(organization)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_organizations(&self) -> Result<Vec<Organization>>;
    fn count_organizations(&self) -> Result<usize>;
}

pub trait TourRepo {
    fn get_tour(&self, id: &str) -> Result<Tour>;
    fn try_get_tour(&self, id: &str) -> Result<Option<Tour>> {
        match self.get_tour(id) {
            Ok(tour) => Ok(Some(tour)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_tours(&self) -> Result<Vec<Tour>>;
    fn count_tours(&self) -> Result<usize>;
    fn tours_with_status(&self, status: TourStatus) -> Result<Vec<Tour>>;
}

pub trait DayRepo {
    fn get_day(&self, id: &str) -> Result<Day>;
    fn try_get_day(&self, id: &str) -> Result<Option<Day>> {
        match self.get_day(id) {
            Ok(day) => Ok(Some(day)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // Days are stored in itinerary order, which is date order.
    fn all_days_chronologically(&self) -> Result<Vec<Day>>;
    fn count_days(&self) -> Result<usize>;

    fn days_of_tour(&self, tour_id: &str) -> Result<Vec<Day>>;
    fn days_of_type(&self, day_type: DayType) -> Result<Vec<Day>>;
    fn days_on_or_after(&self, date: Date) -> Result<Vec<Day>>;
    fn try_get_day_on_date(&self, date: Date) -> Result<Option<Day>>;
}

pub trait EventRepo {
    fn get_event(&self, id: &str) -> Result<Event>;
    fn try_get_event(&self, id: &str) -> Result<Option<Event>> {
        match self.get_event(id) {
            Ok(event) => Ok(Some(event)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn all_events(&self) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;

    // A day hosts at most one event; duplicates resolve to the first.
    fn try_get_event_of_day(&self, day_id: &str) -> Result<Option<Event>>;
    fn events_of_venue(&self, venue_id: &str) -> Result<Vec<Event>>;
    fn events_with_advance_status(&self, status: AdvanceStatus) -> Result<Vec<Event>>;
}

pub trait VenueRepo {
    fn get_venue(&self, id: &str) -> Result<Venue>;
    fn try_get_venue(&self, id: &str) -> Result<Option<Venue>> {
        match self.get_venue(id) {
            Ok(venue) => Ok(Some(venue)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;
    fn venues_in_city(&self, city: &str) -> Result<Vec<Venue>>;
}

pub trait HotelRepo {
    fn get_hotel(&self, id: &str) -> Result<Hotel>;
    fn try_get_hotel(&self, id: &str) -> Result<Option<Hotel>> {
        match self.get_hotel(id) {
            Ok(hotel) => Ok(Some(hotel)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_hotels(&self) -> Result<Vec<Hotel>>;
    fn count_hotels(&self) -> Result<usize>;
    fn hotels_in_city(&self, city: &str) -> Result<Vec<Hotel>>;
}

pub trait PersonnelRepo {
    fn get_person(&self, id: &str) -> Result<Person>;
    fn try_get_person(&self, id: &str) -> Result<Option<Person>> {
        match self.get_person(id) {
            Ok(person) => Ok(Some(person)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_personnel(&self) -> Result<Vec<Person>>;
    fn count_personnel(&self) -> Result<usize>;
    fn personnel_of_tour(&self, tour_id: &str) -> Result<Vec<Person>>;
    fn personnel_in_department(&self, department: &str) -> Result<Vec<Person>>;
}

pub trait ContactRepo {
    fn get_contact(&self, id: &str) -> Result<Contact>;
    fn try_get_contact(&self, id: &str) -> Result<Option<Contact>> {
        match self.get_contact(id) {
            Ok(contact) => Ok(Some(contact)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_contacts(&self) -> Result<Vec<Contact>>;
    fn count_contacts(&self) -> Result<usize>;
    fn contacts_of_company(&self, company_id: &str) -> Result<Vec<Contact>>;
}

pub trait CompanyRepo {
    fn get_company(&self, id: &str) -> Result<Company>;
    fn try_get_company(&self, id: &str) -> Result<Option<Company>> {
        match self.get_company(id) {
            Ok(company) => Ok(Some(company)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_companies(&self) -> Result<Vec<Company>>;
    fn count_companies(&self) -> Result<usize>;
}

pub trait GuestRepo {
    fn get_guest(&self, id: &str) -> Result<Guest>;
    fn try_get_guest(&self, id: &str) -> Result<Option<Guest>> {
        match self.get_guest(id) {
            Ok(guest) => Ok(Some(guest)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_guests(&self) -> Result<Vec<Guest>>;
    fn count_guests(&self) -> Result<usize>;
    fn guests_of_event(&self, event_id: &str) -> Result<Vec<Guest>>;
    fn guests_with_status(&self, status: GuestStatus) -> Result<Vec<Guest>>;

    // Allocations are keyed by (event, ticket type) and live with the
    // guest list they budget for.
    fn ticket_allocations_of_event(&self, event_id: &str) -> Result<Vec<TicketAllocation>>;
}

pub trait UserRepo {
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
    fn users_of_organization(&self, organization_id: &str) -> Result<Vec<User>>;
    fn users_with_role(&self, role: UserRole) -> Result<Vec<User>>;
    fn users_with_status(&self, status: UserStatus) -> Result<Vec<User>>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

pub trait UserGroupRepo {
    fn get_user_group(&self, id: &str) -> Result<UserGroup>;
    fn try_get_user_group(&self, id: &str) -> Result<Option<UserGroup>> {
        match self.get_user_group(id) {
            Ok(group) => Ok(Some(group)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_user_groups(&self) -> Result<Vec<UserGroup>>;
    fn count_user_groups(&self) -> Result<usize>;
    fn user_groups_of_organization(&self, organization_id: &str) -> Result<Vec<UserGroup>>;
}
