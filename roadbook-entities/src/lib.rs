#![deny(missing_debug_implementations)]

//! # roadbook-entities
//!
//! Reusable, agnostic domain entities for the roadbook tour manager.
//!
//! The entities carry only generic functionality and do not reveal any
//! application-specific business logic.

pub mod company;
pub mod contact;
pub mod day;
pub mod event;
pub mod guest;
pub mod hotel;
pub mod id;
pub mod organization;
pub mod person;
pub mod ticket;
pub mod tour;
pub mod user;
pub mod user_group;
pub mod venue;

pub mod time {
    pub use time::{Date, Month, OffsetDateTime, Weekday};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
