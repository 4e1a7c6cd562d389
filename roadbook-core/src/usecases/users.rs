use super::prelude::*;

/// (role, count) pairs over all users, in first-appearance order.
pub fn user_count_by_role<D: UserRepo>(db: &D) -> Result<Vec<(UserRole, usize)>> {
    let mut counts: Vec<(UserRole, usize)> = Vec::new();
    for user in db.all_users()? {
        match counts.iter_mut().find(|(role, _)| *role == user.role) {
            Some((_, n)) => *n += 1,
            None => counts.push((user.role, 1)),
        }
    }
    Ok(counts)
}

/// (status, count) pairs over all users, in first-appearance order.
pub fn user_count_by_status<D: UserRepo>(db: &D) -> Result<Vec<(UserStatus, usize)>> {
    let mut counts: Vec<(UserStatus, usize)> = Vec::new();
    for user in db.all_users()? {
        match counts.iter_mut().find(|(status, _)| *status == user.status) {
            Some((_, n)) => *n += 1,
            None => counts.push((user.status, 1)),
        }
    }
    Ok(counts)
}
