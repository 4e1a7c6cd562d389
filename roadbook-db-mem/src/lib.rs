//! # roadbook-db-mem
//!
//! In-memory implementation of the `roadbook-core` repositories: plain
//! `Vec` tables scanned linearly on every call. The tables are filled
//! once at construction and never mutated afterwards.

mod repositories;

use roadbook_core::Db;
use roadbook_entities::{
    company::Company, contact::Contact, day::Day, event::Event, guest::Guest, hotel::Hotel,
    organization::Organization, person::Person, ticket::TicketAllocation, tour::Tour, user::User,
    user_group::UserGroup, venue::Venue,
};

/// All tables of the dataset, in source order.
///
/// Source order is the only order: filters return matching records in
/// the order they were inserted, and duplicate ids resolve to the
/// first record.
#[derive(Debug, Default)]
pub struct MemoryDb {
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

impl Db for MemoryDb {}
