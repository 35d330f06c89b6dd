use chrono::{Datelike, Days, Months, NaiveDate};

/// Formats tried last, after offsets, keywords and compact digits. English month
/// names only, so results never depend on the locale.
const CALENDAR_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse what an operator typed into a date field. `None` for anything that is
/// not a date; the caller treats that as "no value".
pub fn parse_date_text(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_offset(text, today)
        .or_else(|| parse_keyword(text, today))
        .or_else(|| parse_compact(text))
        .or_else(|| parse_calendar(text))
}

/// `+N` / `-N` days; `d` and `w` suffixes are accepted.
fn parse_offset(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (sign, rest) = match text.chars().next()? {
        '+' => (1i64, &text[1..]),
        '-' => (-1i64, &text[1..]),
        _ => return None,
    };

    let (digits, unit_days) = match rest.chars().last()? {
        'd' | 'D' => (&rest[..rest.len() - 1], 1i64),
        'w' | 'W' => (&rest[..rest.len() - 1], 7i64),
        _ => (rest, 1i64),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let n: i64 = digits.parse().ok()?;
    let days = n.checked_mul(unit_days)?.checked_mul(sign)?;
    if days >= 0 {
        today.checked_add_days(Days::new(days as u64))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

fn parse_keyword(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let start_of_month = today.with_day(1)?;
    let end_of_month = start_of_month
        .checked_add_months(Months::new(1))?
        .checked_sub_days(Days::new(1))?;

    match text.to_ascii_lowercase().as_str() {
        "today" | "now" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        "som" | "start of month" => Some(start_of_month),
        "eom" | "end of month" => Some(end_of_month),
        "eoy" | "end of year" => NaiveDate::from_ymd_opt(today.year(), 12, 31),
        _ => None,
    }
}

/// `yyyymmdd` or `yymmdd` (20yy).
fn parse_compact(text: &str) -> Option<NaiveDate> {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (year, rest) = match text.len() {
        8 => (text[..4].parse::<i32>().ok()?, &text[4..]),
        6 => (2000 + text[..2].parse::<i32>().ok()?, &text[2..]),
        _ => return None,
    };
    let month = rest[..2].parse::<u32>().ok()?;
    let day = rest[2..].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_calendar(text: &str) -> Option<NaiveDate> {
    CALENDAR_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(text, fmt)
            .ok()
            .or_else(|| chrono::NaiveDateTime::parse_from_str(text, fmt).ok().map(|dt| dt.date()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_relative_offsets() {
        let today = d(2025, 3, 15);
        assert_eq!(parse_date_text("+3", today), Some(d(2025, 3, 18)));
        assert_eq!(parse_date_text("-15", today), Some(d(2025, 2, 28)));
        assert_eq!(parse_date_text("+2w", today), Some(d(2025, 3, 29)));
        assert_eq!(parse_date_text("+", today), None);
        assert_eq!(parse_date_text("+x", today), None);
    }

    #[test]
    fn test_keywords() {
        let today = d(2024, 2, 10);
        assert_eq!(parse_date_text("Tomorrow", today), Some(d(2024, 2, 11)));
        assert_eq!(parse_date_text("yesterday", today), Some(d(2024, 2, 9)));
        assert_eq!(parse_date_text("som", today), Some(d(2024, 2, 1)));
        assert_eq!(parse_date_text("eom", today), Some(d(2024, 2, 29)));
        assert_eq!(parse_date_text("end of year", today), Some(d(2024, 12, 31)));
    }

    #[test]
    fn test_compact_forms() {
        let today = d(2025, 1, 1);
        assert_eq!(parse_date_text("20250315", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("250315", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("20251332", today), None);
        assert_eq!(parse_date_text("2025031", today), None);
    }

    #[test]
    fn test_calendar_forms() {
        let today = d(2025, 1, 1);
        assert_eq!(parse_date_text("2025-03-15", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("2025/03/15", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("15 Mar 2025", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("March 15, 2025", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("2025-03-15T10:30:00", today), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_text("2025-02-30", today), None);
    }
}
