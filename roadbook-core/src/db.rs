use crate::repositories::*;

/// The whole fixed dataset behind a single handle.
pub trait Db:
    OrganizationRepo
    + TourRepo
    + DayRepo
    + EventRepo
    + VenueRepo
    + HotelRepo
    + PersonnelRepo
    + ContactRepo
    + CompanyRepo
    + GuestRepo
    + UserRepo
    + UserGroupRepo
{
}
