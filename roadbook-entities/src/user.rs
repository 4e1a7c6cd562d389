use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;
use time::OffsetDateTime;

use crate::id::Id;

pub type UserRolePrimitive = u8;

/// Application role, ordered by privilege.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum UserRole {
    Viewer  = 0,
    Editor  = 1,
    Manager = 2,
    Admin   = 3,
}

impl Default for UserRole {
    fn default() -> UserRole {
        UserRole::Viewer
    }
}

#[derive(Debug, Error)]
#[error("Invalid user role primitive: {0}")]
pub struct InvalidUserRolePrimitive(UserRolePrimitive);

impl TryFrom<UserRolePrimitive> for UserRole {
    type Error = InvalidUserRolePrimitive;
    fn try_from(from: UserRolePrimitive) -> Result<Self, Self::Error> {
        Self::from_u8(from).ok_or(InvalidUserRolePrimitive(from))
    }
}

impl From<UserRole> for UserRolePrimitive {
    fn from(from: UserRole) -> Self {
        from.to_u8().expect("User role primitive")
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            UserRole::Viewer => "viewer",
            UserRole::Editor => "editor",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum UserStatus {
    Active,
    Pending,
    Inactive,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            UserStatus::Active => "active",
            UserStatus::Pending => "pending",
            UserStatus::Inactive => "inactive",
        };
        f.write_str(s)
    }
}

/// An application account within one organization.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id              : Id,
    pub organization_id : Id,
    pub first_name      : String,
    pub last_name       : String,
    pub email           : String,
    pub phone           : Option<String>,
    pub title           : Option<String>,
    pub role            : UserRole,
    pub status          : UserStatus,
    pub user_group_ids  : Vec<Id>,
    pub last_login_at   : Option<OffsetDateTime>,
    pub created_at      : OffsetDateTime,
    pub invited_at      : Option<OffsetDateTime>,
    pub invited_by      : Option<Id>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn can_edit(&self) -> bool {
        self.role >= UserRole::Editor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_ordered_by_privilege() {
        assert!(UserRole::Viewer < UserRole::Editor);
        assert!(UserRole::Editor < UserRole::Manager);
        assert!(UserRole::Manager < UserRole::Admin);
        assert_eq!(UserRole::default(), UserRole::Viewer);
    }

    #[test]
    fn role_primitive_round_trip() {
        assert_eq!(UserRole::try_from(2).unwrap(), UserRole::Manager);
        assert_eq!(<UserRolePrimitive as From<UserRole>>::from(UserRole::Admin), 3);
        assert!(UserRole::try_from(9).is_err());
    }

    #[test]
    fn edit_privilege_threshold() {
        use crate::builders::*;
        assert!(!User::build().role(UserRole::Viewer).finish().can_edit());
        assert!(User::build().role(UserRole::Editor).finish().can_edit());
        assert!(User::build().role(UserRole::Admin).finish().can_edit());
    }
}
