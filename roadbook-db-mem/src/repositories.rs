use roadbook_core::repositories::*;
use roadbook_entities::{
    company::*, contact::*, day::*, event::*, guest::*, hotel::*, organization::*, person::*,
    ticket::*, tour::*, user::*, user_group::*, venue::*,
};
use time::Date;

use crate::MemoryDb;

type Result<T> = std::result::Result<T, Error>;

impl OrganizationRepo for MemoryDb {
    fn get_organization(&self, id: &str) -> Result<Organization> {
        self.organizations
            .iter()
            .find(|o| o.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_organizations(&self) -> Result<Vec<Organization>> {
        Ok(self.organizations.clone())
    }

    fn count_organizations(&self) -> Result<usize> {
        Ok(self.organizations.len())
    }
}

impl TourRepo for MemoryDb {
    fn get_tour(&self, id: &str) -> Result<Tour> {
        self.tours
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_tours(&self) -> Result<Vec<Tour>> {
        Ok(self.tours.clone())
    }

    fn count_tours(&self) -> Result<usize> {
        Ok(self.tours.len())
    }

    fn tours_with_status(&self, status: TourStatus) -> Result<Vec<Tour>> {
        Ok(self
            .tours
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect())
    }
}

impl DayRepo for MemoryDb {
    fn get_day(&self, id: &str) -> Result<Day> {
        self.days
            .iter()
            .find(|d| d.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_days_chronologically(&self) -> Result<Vec<Day>> {
        Ok(self.days.clone())
    }

    fn count_days(&self) -> Result<usize> {
        Ok(self.days.len())
    }

    fn days_of_tour(&self, tour_id: &str) -> Result<Vec<Day>> {
        Ok(self
            .days
            .iter()
            .filter(|d| d.tour_id.as_str() == tour_id)
            .cloned()
            .collect())
    }

    fn days_of_type(&self, day_type: DayType) -> Result<Vec<Day>> {
        Ok(self
            .days
            .iter()
            .filter(|d| d.day_type == day_type)
            .cloned()
            .collect())
    }

    fn days_on_or_after(&self, date: Date) -> Result<Vec<Day>> {
        Ok(self
            .days
            .iter()
            .filter(|d| d.date >= date)
            .cloned()
            .collect())
    }

    fn try_get_day_on_date(&self, date: Date) -> Result<Option<Day>> {
        Ok(self.days.iter().find(|d| d.date == date).cloned())
    }
}

impl EventRepo for MemoryDb {
    fn get_event(&self, id: &str) -> Result<Event> {
        self.events
            .iter()
            .find(|e| e.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn count_events(&self) -> Result<usize> {
        Ok(self.events.len())
    }

    fn try_get_event_of_day(&self, day_id: &str) -> Result<Option<Event>> {
        Ok(self
            .events
            .iter()
            .find(|e| e.day_id.as_str() == day_id)
            .cloned())
    }

    fn events_of_venue(&self, venue_id: &str) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.venue_id.as_ref().is_some_and(|id| id.as_str() == venue_id))
            .cloned()
            .collect())
    }

    fn events_with_advance_status(&self, status: AdvanceStatus) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.advance_status == status)
            .cloned()
            .collect())
    }
}

impl VenueRepo for MemoryDb {
    fn get_venue(&self, id: &str) -> Result<Venue> {
        self.venues
            .iter()
            .find(|v| v.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.venues.clone())
    }

    fn count_venues(&self) -> Result<usize> {
        Ok(self.venues.len())
    }

    fn venues_in_city(&self, city: &str) -> Result<Vec<Venue>> {
        Ok(self
            .venues
            .iter()
            .filter(|v| v.city == city)
            .cloned()
            .collect())
    }
}

impl HotelRepo for MemoryDb {
    fn get_hotel(&self, id: &str) -> Result<Hotel> {
        self.hotels
            .iter()
            .find(|h| h.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(self.hotels.clone())
    }

    fn count_hotels(&self) -> Result<usize> {
        Ok(self.hotels.len())
    }

    fn hotels_in_city(&self, city: &str) -> Result<Vec<Hotel>> {
        Ok(self
            .hotels
            .iter()
            .filter(|h| h.city == city)
            .cloned()
            .collect())
    }
}

impl PersonnelRepo for MemoryDb {
    fn get_person(&self, id: &str) -> Result<Person> {
        self.personnel
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_personnel(&self) -> Result<Vec<Person>> {
        Ok(self.personnel.clone())
    }

    fn count_personnel(&self) -> Result<usize> {
        Ok(self.personnel.len())
    }

    fn personnel_of_tour(&self, tour_id: &str) -> Result<Vec<Person>> {
        Ok(self
            .personnel
            .iter()
            .filter(|p| p.is_on_tour(tour_id))
            .cloned()
            .collect())
    }

    fn personnel_in_department(&self, department: &str) -> Result<Vec<Person>> {
        Ok(self
            .personnel
            .iter()
            .filter(|p| p.department == department)
            .cloned()
            .collect())
    }
}

impl ContactRepo for MemoryDb {
    fn get_contact(&self, id: &str) -> Result<Contact> {
        self.contacts
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn count_contacts(&self) -> Result<usize> {
        Ok(self.contacts.len())
    }

    fn contacts_of_company(&self, company_id: &str) -> Result<Vec<Contact>> {
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

impl CompanyRepo for MemoryDb {
    fn get_company(&self, id: &str) -> Result<Company> {
        self.companies
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_companies(&self) -> Result<Vec<Company>> {
        Ok(self.companies.clone())
    }

    fn count_companies(&self) -> Result<usize> {
        Ok(self.companies.len())
    }
}

impl GuestRepo for MemoryDb {
    fn get_guest(&self, id: &str) -> Result<Guest> {
        self.guests
            .iter()
            .find(|g| g.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_guests(&self) -> Result<Vec<Guest>> {
        Ok(self.guests.clone())
    }

    fn count_guests(&self) -> Result<usize> {
        Ok(self.guests.len())
    }

    fn guests_of_event(&self, event_id: &str) -> Result<Vec<Guest>> {
        Ok(self
            .guests
            .iter()
            .filter(|g| g.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }

    fn guests_with_status(&self, status: GuestStatus) -> Result<Vec<Guest>> {
        Ok(self
            .guests
            .iter()
            .filter(|g| g.status == status)
            .cloned()
            .collect())
    }

    fn ticket_allocations_of_event(&self, event_id: &str) -> Result<Vec<TicketAllocation>> {
        Ok(self
            .ticket_allocations
            .iter()
            .filter(|a| a.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MemoryDb {
    fn get_user(&self, id: &str) -> Result<User> {
        self.users
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.len())
    }

    fn users_of_organization(&self, organization_id: &str) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.organization_id.as_str() == organization_id)
            .cloned()
            .collect())
    }

    fn users_with_role(&self, role: UserRole) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    fn users_with_status(&self, status: UserStatus) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.status == status)
            .cloned()
            .collect())
    }

    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

impl UserGroupRepo for MemoryDb {
    fn get_user_group(&self, id: &str) -> Result<UserGroup> {
        self.user_groups
            .iter()
            .find(|g| g.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_user_groups(&self) -> Result<Vec<UserGroup>> {
        Ok(self.user_groups.clone())
    }

    fn count_user_groups(&self) -> Result<usize> {
        Ok(self.user_groups.len())
    }

    fn user_groups_of_organization(&self, organization_id: &str) -> Result<Vec<UserGroup>> {
        Ok(self
            .user_groups
            .iter()
            .filter(|g| g.organization_id.as_str() == organization_id)
            .cloned()
            .collect())
    }
}
