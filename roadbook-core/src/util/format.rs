use time::{Date, Month};

/// Formatted integer percentage. An undefined ratio (zero total) yields
/// the "N/A" sentinel instead of NaN.
pub fn percentage(value: u64, total: u64) -> String {
    if total == 0 {
        return "N/A".into();
    }
    let percent = (value as f64 / total as f64 * 100.0).round() as u64;
    format!("{percent}%")
}

pub fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// "Oct 17, 2025"
pub fn format_display_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        month_abbrev(date.month()),
        date.day(),
        date.year()
    )
}

/// "Oct 14 - Dec 2, 2025", repeating the year only when it differs.
pub fn format_date_range(start: Date, end: Date) -> String {
    if start.year() == end.year() {
        format!(
            "{} {} - {} {}, {}",
            month_abbrev(start.month()),
            start.day(),
            month_abbrev(end.month()),
            end.day(),
            start.year()
        )
    } else {
        format!(
            "{} - {}",
            format_display_date(start),
            format_display_date(end)
        )
    }
}
