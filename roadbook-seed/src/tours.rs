use roadbook_entities::tour::*;
use time::macros::date;

use crate::{DEMO_ORGANIZATION_ID, HOMECOMING_TOUR_ID};

pub(crate) fn tours() -> Vec<Tour> {
    vec![
        Tour {
            id: HOMECOMING_TOUR_ID.into(),
            organization_id: DEMO_ORGANIZATION_ID.into(),
            name: "HomeComing 2025".into(),
            artist: "Terri Clark & Paul Brandt".into(),
            start_date: date!(2025 - 10 - 14),
            end_date: date!(2025 - 12 - 02),
            tour_manager: "Steve Coplan".into(),
            status: TourStatus::Confirmed,
            // Stored as entered; the rehearsal performance makes the
            // derived show count come out one higher.
            total_days: Some(49),
            total_shows: Some(34),
            completed_shows: Some(0),
            total_crew: Some(12),
        },
        Tour {
            id: "tour-2".into(),
            organization_id: DEMO_ORGANIZATION_ID.into(),
            name: "Western Winds 2025".into(),
            artist: "The Blue Grass Band".into(),
            start_date: date!(2025 - 05 - 01),
            end_date: date!(2025 - 06 - 15),
            tour_manager: "Alice Cooper".into(),
            status: TourStatus::InProgress,
            total_days: Some(45),
            total_shows: Some(20),
            completed_shows: Some(8),
            total_crew: Some(12),
        },
        Tour {
            id: "tour-3".into(),
            organization_id: DEMO_ORGANIZATION_ID.into(),
            name: "Summer Revival 2024".into(),
            artist: "Neon Lights".into(),
            start_date: date!(2024 - 07 - 05),
            end_date: date!(2024 - 08 - 30),
            tour_manager: "Robert Plant".into(),
            status: TourStatus::Completed,
            total_days: Some(56),
            total_shows: Some(25),
            completed_shows: Some(25),
            total_crew: Some(15),
        },
    ]
}
