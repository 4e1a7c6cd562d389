use roadbook_entities::{user::*, user_group::*};
use time::{macros::datetime, OffsetDateTime};

use crate::DEMO_ORGANIZATION_ID;

fn user(
    id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: UserRole,
    created_at: OffsetDateTime,
) -> User {
    User {
        id: id.into(),
        organization_id: DEMO_ORGANIZATION_ID.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        phone: None,
        title: None,
        role,
        status: UserStatus::Active,
        user_group_ids: vec![],
        last_login_at: None,
        created_at,
        invited_at: None,
        invited_by: None,
    }
}

fn users() -> Vec<User> {
    vec![
        // Admins
        User {
            phone: Some("615-555-1212".into()),
            title: Some("Tour Manager".into()),
            user_group_ids: vec!["group-1".into()],
            last_login_at: Some(datetime!(2025 - 12 - 26 08:30 UTC)),
            ..user(
                "user-1",
                "Steve",
                "Coplan",
                "steve@coplanmusic.com",
                UserRole::Admin,
                datetime!(2023 - 01 - 15 00:00 UTC),
            )
        },
        User {
            phone: Some("615-555-1498".into()),
            title: Some("Production Manager".into()),
            user_group_ids: vec!["group-1".into()],
            last_login_at: Some(datetime!(2025 - 12 - 25 22:15 UTC)),
            ..user(
                "user-2",
                "Elena",
                "Sherertz",
                "elena@coplanmusic.com",
                UserRole::Admin,
                datetime!(2023 - 02 - 01 00:00 UTC),
            )
        },
        // Managers
        User {
            phone: Some("615-555-0011".into()),
            title: Some("FOH Engineer".into()),
            user_group_ids: vec!["group-2".into()],
            last_login_at: Some(datetime!(2025 - 12 - 26 07:45 UTC)),
            ..user(
                "user-3",
                "Sarah",
                "Jennings",
                "sarah.jennings@tourcrew.com",
                UserRole::Manager,
                datetime!(2023 - 03 - 10 00:00 UTC),
            )
        },
        User {
            phone: Some("615-555-0012".into()),
            title: Some("Monitor Engineer".into()),
            user_group_ids: vec!["group-2".into()],
            last_login_at: Some(datetime!(2025 - 12 - 24 18:30 UTC)),
            ..user(
                "user-4",
                "Kevin",
                "Watts",
                "kevin.watts@tourcrew.com",
                UserRole::Manager,
                datetime!(2023 - 03 - 15 00:00 UTC),
            )
        },
        // Editors
        User {
            phone: Some("615-555-0015".into()),
            title: Some("Lighting Director".into()),
            user_group_ids: vec!["group-3".into()],
            last_login_at: Some(datetime!(2025 - 12 - 25 14:20 UTC)),
            ..user(
                "user-5",
                "Rachel",
                "Green",
                "rachel.green@tourcrew.com",
                UserRole::Editor,
                datetime!(2023 - 04 - 01 00:00 UTC),
            )
        },
        User {
            phone: Some("615-555-0013".into()),
            title: Some("Drum Tech".into()),
            user_group_ids: vec!["group-3".into()],
            last_login_at: Some(datetime!(2025 - 12 - 23 11:00 UTC)),
            ..user(
                "user-6",
                "David",
                "Lee",
                "david.lee@tourcrew.com",
                UserRole::Editor,
                datetime!(2023 - 04 - 15 00:00 UTC),
            )
        },
        // Viewers
        User {
            phone: Some("615-555-0016".into()),
            title: Some("Bus Driver 1".into()),
            user_group_ids: vec!["group-4".into()],
            last_login_at: Some(datetime!(2025 - 12 - 22 09:00 UTC)),
            ..user(
                "user-7",
                "Tommy",
                "Rodriguez",
                "tommy.r@tourcrew.com",
                UserRole::Viewer,
                datetime!(2023 - 05 - 01 00:00 UTC),
            )
        },
        User {
            phone: Some("615-555-0014".into()),
            title: Some("Guitar Tech".into()),
            last_login_at: Some(datetime!(2025 - 12 - 21 16:30 UTC)),
            ..user(
                "user-8",
                "Marcus",
                "Chen",
                "marcus.chen@tourcrew.com",
                UserRole::Viewer,
                datetime!(2023 - 05 - 10 00:00 UTC),
            )
        },
        // Invitation still pending
        User {
            phone: Some("615-555-9999".into()),
            title: Some("Assistant Production Manager".into()),
            status: UserStatus::Pending,
            user_group_ids: vec!["group-3".into()],
            invited_at: Some(datetime!(2025 - 12 - 20 10:00 UTC)),
            invited_by: Some("user-2".into()),
            ..user(
                "user-9",
                "Alex",
                "Johnson",
                "alex.johnson@example.com",
                UserRole::Editor,
                datetime!(2025 - 12 - 20 00:00 UTC),
            )
        },
        // Left the organization
        User {
            phone: Some("615-555-8888".into()),
            title: Some("Former Stage Manager".into()),
            status: UserStatus::Inactive,
            last_login_at: Some(datetime!(2025 - 06 - 15 12:00 UTC)),
            ..user(
                "user-10",
                "Mike",
                "Wilson",
                "mike.wilson@former.com",
                UserRole::Editor,
                datetime!(2023 - 02 - 20 00:00 UTC),
            )
        },
    ]
}

fn group(
    id: &str,
    name: &str,
    description: &str,
    permissions: Permissions,
    user_count: u32,
    created_at: OffsetDateTime,
) -> UserGroup {
    UserGroup {
        id: id.into(),
        organization_id: DEMO_ORGANIZATION_ID.into(),
        name: name.into(),
        description: Some(description.into()),
        permissions,
        user_count,
        created_at,
        updated_at: created_at,
    }
}

fn user_groups() -> Vec<UserGroup> {
    vec![
        group(
            "group-1",
            "Administrators",
            "Full access to all features and settings",
            Permissions {
                tours: Access::full(),
                events: Access::full(),
                personnel: Access::full(),
                guests: Access::full(),
                venues: Access::full(),
                settings: Access::read_write(),
            },
            2,
            datetime!(2023 - 01 - 15 00:00 UTC),
        ),
        group(
            "group-2",
            "Tour Managers",
            "Can manage tour operations and events",
            Permissions {
                tours: Access::read_write(),
                events: Access::read_write(),
                personnel: Access::read_write(),
                guests: Access::read_write(),
                venues: Access::read_write(),
                settings: Access::read_only(),
            },
            2,
            datetime!(2023 - 02 - 01 00:00 UTC),
        ),
        group(
            "group-3",
            "Crew Members",
            "Can view and edit event details and personnel",
            Permissions {
                tours: Access::read_only(),
                events: Access::read_write(),
                personnel: Access::read_only(),
                guests: Access::read_write(),
                venues: Access::read_only(),
                settings: Access::none(),
            },
            3,
            datetime!(2023 - 03 - 01 00:00 UTC),
        ),
        group(
            "group-4",
            "Viewers",
            "Read-only access to tour information",
            Permissions {
                tours: Access::read_only(),
                events: Access::read_only(),
                personnel: Access::read_only(),
                guests: Access::read_only(),
                venues: Access::read_only(),
                settings: Access::none(),
            },
            2,
            datetime!(2023 - 04 - 01 00:00 UTC),
        ),
        group(
            "group-5",
            "Production Team",
            "Production crew with event and venue management access",
            Permissions {
                tours: Access::read_only(),
                events: Access::read_write(),
                personnel: Access::read_only(),
                guests: Access::read_only(),
                venues: Access::read_write(),
                settings: Access::none(),
            },
            0,
            datetime!(2023 - 05 - 01 00:00 UTC),
        ),
    ]
}

pub(crate) fn accounts() -> (Vec<User>, Vec<UserGroup>) {
    (users(), user_groups())
}
