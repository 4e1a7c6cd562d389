use roadbook_entities::day::*;
use time::{macros::date, Date};

use crate::HOMECOMING_TOUR_ID;

fn day(id: &str, date: Date, day_type: DayType, city: &str, state: &str, timezone: &str) -> Day {
    Day {
        id: id.into(),
        tour_id: HOMECOMING_TOUR_ID.into(),
        date,
        day_type,
        status: DayStatus::Confirmed,
        city: city.into(),
        state: state.into(),
        country: "Canada".into(),
        timezone: timezone.into(),
        notes: None,
    }
}

fn noted(day: Day, notes: &str) -> Day {
    Day {
        notes: Some(notes.into()),
        ..day
    }
}

#[rustfmt::skip]
pub(crate) fn days() -> Vec<Day> {
    vec![
        // Week 1: out of Nashville into the Maritimes
        Day {
            country: "USA".into(),
            notes: Some("Fly to Moncton".into()),
            ..day(
                "day-1",
                date!(2025 - 10 - 14),
                DayType::Travel,
                "Nashville",
                "TN",
                "Central",
            )
        },
        day("day-2", date!(2025 - 10 - 15), DayType::Travel, "Moncton", "NB", "Atlantic"),
        day("day-3", date!(2025 - 10 - 16), DayType::Rehearsal, "Moncton", "NB", "Atlantic"),
        day("day-4", date!(2025 - 10 - 17), DayType::Show, "Moncton", "NB", "Atlantic"),
        day("day-5", date!(2025 - 10 - 18), DayType::Show, "Truro", "NS", "Atlantic"),
        noted(
            day("day-6", date!(2025 - 10 - 19), DayType::Travel, "Truro", "NS", "Atlantic"),
            "Fly to St. Johns",
        ),
        day("day-7", date!(2025 - 10 - 20), DayType::Show, "St. John's", "NL", "Newfoundland"),
        // Week 2: Newfoundland, then west into Ontario
        day("day-8", date!(2025 - 10 - 21), DayType::Show, "St. John's", "NL", "Newfoundland"),
        noted(
            day("day-9", date!(2025 - 10 - 22), DayType::Travel, "St. John's", "NL", "Newfoundland"),
            "Fly to Ottawa",
        ),
        day("day-10", date!(2025 - 10 - 23), DayType::Show, "Ottawa", "ON", "Eastern"),
        day("day-11", date!(2025 - 10 - 24), DayType::Show, "Oshawa", "ON", "Eastern"),
        day("day-12", date!(2025 - 10 - 25), DayType::Show, "Owen Sound", "ON", "Eastern"),
        day("day-13", date!(2025 - 10 - 26), DayType::Off, "London", "ON", "Eastern"),
        day("day-14", date!(2025 - 10 - 27), DayType::Show, "London", "ON", "Eastern"),
        // Week 3: Ontario continued
        day("day-15", date!(2025 - 10 - 28), DayType::Show, "Peterborough", "ON", "Eastern"),
        day("day-16", date!(2025 - 10 - 29), DayType::Show, "Peterborough", "ON", "Eastern"),
        day("day-17", date!(2025 - 10 - 30), DayType::Show, "Kitchener", "ON", "Eastern"),
        day("day-18", date!(2025 - 10 - 31), DayType::Off, "Niagara Falls", "ON", "Eastern"),
        day("day-19", date!(2025 - 11 - 01), DayType::Show, "Niagara Falls", "ON", "Eastern"),
        day("day-20", date!(2025 - 11 - 02), DayType::Show, "Belleville", "ON", "Eastern"),
        noted(
            day("day-21", date!(2025 - 11 - 03), DayType::Travel, "Belleville", "ON", "Eastern"),
            "Drive to Thunder Bay",
        ),
        // Week 4: northern Ontario into Manitoba
        day("day-22", date!(2025 - 11 - 04), DayType::Travel, "Thunder Bay", "ON", "Eastern"),
        day("day-23", date!(2025 - 11 - 05), DayType::Show, "Thunder Bay", "ON", "Eastern"),
        noted(
            day("day-24", date!(2025 - 11 - 06), DayType::Travel, "Thunder Bay", "ON", "Eastern"),
            "Drive to Winnipeg",
        ),
        day("day-25", date!(2025 - 11 - 07), DayType::Show, "Winnipeg", "MB", "Central"),
        day("day-26", date!(2025 - 11 - 08), DayType::Show, "Brandon", "MB", "Central"),
        day("day-27", date!(2025 - 11 - 09), DayType::Show, "Yorkton", "SK", "Central"),
        day("day-28", date!(2025 - 11 - 10), DayType::Off, "Yorkton", "SK", "Central"),
        // Week 5: Saskatchewan and into Alberta
        noted(
            day("day-29", date!(2025 - 11 - 11), DayType::Off, "Yorkton", "SK", "Central"),
            "Remembrance Day",
        ),
        day("day-30", date!(2025 - 11 - 12), DayType::Show, "Bonnyville", "AB", "Mountain"),
        day("day-31", date!(2025 - 11 - 13), DayType::Show, "Saskatoon", "SK", "Central"),
        day("day-32", date!(2025 - 11 - 14), DayType::Show, "Regina", "SK", "Central"),
        day("day-33", date!(2025 - 11 - 15), DayType::Show, "Medicine Hat", "AB", "Mountain"),
        day("day-34", date!(2025 - 11 - 16), DayType::Show, "Calgary", "AB", "Mountain"),
        day("day-35", date!(2025 - 11 - 17), DayType::Travel, "Calgary", "AB", "Mountain"),
        // Week 6: Alberta into the B.C. interior
        day("day-36", date!(2025 - 11 - 18), DayType::Show, "Red Deer", "AB", "Mountain"),
        day("day-37", date!(2025 - 11 - 19), DayType::Show, "Red Deer", "AB", "Mountain"),
        day("day-38", date!(2025 - 11 - 20), DayType::Show, "Edmonton", "AB", "Mountain"),
        day("day-39", date!(2025 - 11 - 21), DayType::Show, "Whitecourt", "AB", "Mountain"),
        day("day-40", date!(2025 - 11 - 22), DayType::Show, "Kelowna", "BC", "Pacific"),
        day("day-41", date!(2025 - 11 - 23), DayType::Show, "Kelowna", "BC", "Pacific"),
        day("day-42", date!(2025 - 11 - 24), DayType::Off, "Kelowna", "BC", "Pacific"),
        // Week 7: British Columbia
        day("day-43", date!(2025 - 11 - 25), DayType::Show, "Kamloops", "BC", "Pacific"),
        day("day-44", date!(2025 - 11 - 26), DayType::Show, "Nanaimo", "BC", "Pacific"),
        day("day-45", date!(2025 - 11 - 27), DayType::Show, "Campbell River", "BC", "Pacific"),
        day("day-46", date!(2025 - 11 - 28), DayType::Show, "Duncan", "BC", "Pacific"),
        day("day-47", date!(2025 - 11 - 29), DayType::Show, "Abbotsford", "BC", "Pacific"),
        Day {
            status: DayStatus::Pending,
            notes: Some("Potential 2nd show TBD".into()),
            ..day(
                "day-48",
                date!(2025 - 11 - 30),
                DayType::Hold,
                "Abbotsford",
                "BC",
                "Pacific",
            )
        },
        day("day-49", date!(2025 - 12 - 01), DayType::Show, "Cranbrook", "BC", "Pacific"),
        noted(
            day("day-50", date!(2025 - 12 - 02), DayType::Travel, "Cranbrook", "BC", "Pacific"),
            "Fly home",
        ),
    ]
}
