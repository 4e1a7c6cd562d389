// Substring search over the fixed tables: case-insensitive, full scan
// per call, results in source order. There is no index and no ranking.

use super::prelude::*;

fn matches(haystack: &str, needle_lowercase: &str) -> bool {
    haystack.to_lowercase().contains(needle_lowercase)
}

fn opt_matches(haystack: Option<&String>, needle_lowercase: &str) -> bool {
    haystack.is_some_and(|s| matches(s, needle_lowercase))
}

pub fn search_venues<D: VenueRepo>(db: &D, query: &str) -> Result<Vec<Venue>> {
    let q = query.to_lowercase();
    Ok(db
        .all_venues()?
        .into_iter()
        .filter(|v| matches(&v.name, &q) || matches(&v.city, &q))
        .collect())
}

pub fn search_personnel<D: PersonnelRepo>(db: &D, query: &str) -> Result<Vec<Person>> {
    let q = query.to_lowercase();
    Ok(db
        .all_personnel()?
        .into_iter()
        .filter(|p| {
            matches(&p.first_name, &q)
                || matches(&p.last_name, &q)
                || matches(&p.role, &q)
                || matches(&p.department, &q)
        })
        .collect())
}

pub fn search_contacts<D: ContactRepo>(db: &D, query: &str) -> Result<Vec<Contact>> {
    let q = query.to_lowercase();
    Ok(db
        .all_contacts()?
        .into_iter()
        .filter(|c| {
            matches(&c.first_name, &q)
                || matches(&c.last_name, &q)
                || matches(&c.role, &q)
                || opt_matches(c.company_name.as_ref(), &q)
        })
        .collect())
}

pub fn search_users<D: UserRepo>(db: &D, query: &str) -> Result<Vec<User>> {
    let q = query.to_lowercase();
    Ok(db
        .all_users()?
        .into_iter()
        .filter(|u| {
            matches(&u.first_name, &q)
                || matches(&u.last_name, &q)
                || matches(&u.email, &q)
                || opt_matches(u.title.as_ref(), &q)
                || matches(&u.role.to_string(), &q)
        })
        .collect())
}

pub fn search_user_groups<D: UserGroupRepo>(db: &D, query: &str) -> Result<Vec<UserGroup>> {
    let q = query.to_lowercase();
    Ok(db
        .all_user_groups()?
        .into_iter()
        .filter(|g| matches(&g.name, &q) || opt_matches(g.description.as_ref(), &q))
        .collect())
}

/// Per-table hits for one query across the whole dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlobalSearchResults {
    pub days: Vec<Day>,
    pub events: Vec<Event>,
    pub venues: Vec<Venue>,
    pub personnel: Vec<Person>,
    pub contacts: Vec<Contact>,
}

pub fn global_search<D>(db: &D, query: &str) -> Result<GlobalSearchResults>
where
    D: DayRepo + EventRepo + VenueRepo + PersonnelRepo + ContactRepo,
{
    let q = query.to_lowercase();
    log::debug!("global search for {query:?}");

    let days = db
        .all_days_chronologically()?
        .into_iter()
        .filter(|d| {
            matches(&d.city, &q) || matches(&d.state, &q) || matches(&d.day_type.to_string(), &q)
        })
        .collect();

    // Events carry no searchable text of their own; they match through
    // the venue they resolve to.
    let mut events = Vec::new();
    for event in db.all_events()? {
        let venue = match &event.venue_id {
            Some(id) => db.try_get_venue(id.as_str())?,
            None => None,
        };
        let hit = venue
            .as_ref()
            .map(|v| matches(&v.name, &q) || matches(&v.city, &q))
            .unwrap_or(false);
        if hit {
            events.push(event);
        }
    }

    Ok(GlobalSearchResults {
        days,
        events,
        venues: search_venues(db, query)?,
        personnel: search_personnel(db, query)?,
        contacts: search_contacts(db, query)?,
    })
}
