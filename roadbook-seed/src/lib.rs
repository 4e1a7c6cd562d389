//! # roadbook-seed
//!
//! The demo dataset: a fully-connected "HomeComing 2025" tour with its
//! itinerary, shows, venues, hotels, crew, external contacts, guest
//! lists and application accounts. [`demo`] builds a populated
//! [`MemoryDb`]; ids are stable and interconnected so joins resolve.

mod days;
mod events;
mod guests;
mod hotels;
mod organizations;
mod people;
mod tours;
mod users;
mod venues;

use roadbook_db_mem::MemoryDb;

/// The tour all demo screens open on.
pub const HOMECOMING_TOUR_ID: &str = "tour-1";

/// The single demo organization.
pub const DEMO_ORGANIZATION_ID: &str = "org-1";

pub fn demo() -> MemoryDb {
    let (personnel, contacts, companies) = people::people();
    let (guests, ticket_allocations) = guests::guest_lists();
    let (users, user_groups) = users::accounts();
    MemoryDb {
        organizations: organizations::organizations(),
        tours: tours::tours(),
        days: days::days(),
        events: events::events(),
        venues: venues::venues(),
        hotels: hotels::hotels(),
        personnel,
        contacts,
        companies,
        guests,
        ticket_allocations,
        users,
        user_groups,
    }
}

#[cfg(test)]
mod tests;
