mod crew;
mod dashboard;
mod day_details;
mod error;
mod event_details;
mod guest_list;
mod listing;
mod search;
mod tours;
mod users;

#[cfg(test)]
mod tests;

pub use self::{
    crew::*, dashboard::*, day_details::*, error::Error, event_details::*, guest_list::*,
    listing::*, search::*, tours::*, users::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::Db, repositories::*};
    pub use roadbook_entities::{
        company::*, contact::*, day::*, event::*, guest::*, hotel::*, id::*, organization::*,
        person::*, ticket::*, tour::*, user::*, user_group::*, venue::*,
    };
}
