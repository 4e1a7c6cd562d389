use super::prelude::*;

/// Human-readable label for a set of tour assignments.
///
/// Empty input reads "Not Assigned"; ids that resolve to nothing read
/// "Unknown Tour"; up to four resolved names are spelled out, more
/// collapse into a count.
pub fn tour_display_name<D: TourRepo>(db: &D, tour_ids: &[&str]) -> Result<String> {
    if tour_ids.is_empty() {
        return Ok("Not Assigned".into());
    }

    let mut names = Vec::with_capacity(tour_ids.len());
    for id in tour_ids {
        if let Some(tour) = db.try_get_tour(id)? {
            names.push(tour.name);
        }
    }

    Ok(match names.len() {
        0 => "Unknown Tour".into(),
        1 => names.remove(0),
        2 => names.join(" & "),
        3 | 4 => names.join(", "),
        n => format!("{n} Tours"),
    })
}
