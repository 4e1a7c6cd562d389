use itertools::Itertools;

use super::prelude::*;

/// Unique department names, in first-appearance order.
pub fn departments<D: PersonnelRepo>(db: &D) -> Result<Vec<String>> {
    Ok(db
        .all_personnel()?
        .into_iter()
        .map(|p| p.department)
        .unique()
        .collect())
}

/// (department, headcount) pairs, in first-appearance order.
pub fn crew_count_by_department<D: PersonnelRepo>(db: &D) -> Result<Vec<(String, usize)>> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for person in db.all_personnel()? {
        match counts.iter_mut().find(|(d, _)| *d == person.department) {
            Some((_, n)) => *n += 1,
            None => counts.push((person.department, 1)),
        }
    }
    Ok(counts)
}
