use chrono::{DateTime, Utc};

/// Placeholder rendered wherever a date is missing or unparsable.
pub const MISSING_DATE: &str = "—";

/// Parse an ISO-8601 timestamp the way the API sends them.
pub fn parse_event_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Relative time for the activity feeds: "Just now", "N minutes ago",
/// "N hours ago", "N days ago".
pub fn format_relative_time(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let date = match date {
        Some(date) => date,
        None => return MISSING_DATE.to_string(),
    };
    let elapsed = now - date;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if days > 0 {
        format!("{} day{} ago", days, plural(days))
    } else if hours > 0 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if minutes > 0 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else {
        "Just now".to_string()
    }
}

/// Date column of the users table: relative inside a week, absolute beyond.
pub fn format_registration_date(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let date = match date {
        Some(date) => date,
        None => return MISSING_DATE.to_string(),
    };
    let elapsed = now - date;
    let days = elapsed.num_days();

    if days <= 0 {
        let hours = elapsed.num_hours();
        if hours <= 0 {
            let minutes = elapsed.num_minutes();
            if minutes <= 1 {
                return "Just now".to_string();
            }
            return format!("{} minutes ago", minutes);
        }
        return format!("{} hour{} ago", hours, plural(hours));
    }
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{} days ago", days);
    }
    date.format("%d %b %Y").to_string()
}

/// Two decimals, thousands separators, naira sign: 1500000 -> "₦1,500,000.00".
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}₦{}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Prefix debits with a minus, the way the side panel shows them.
pub fn format_signed_currency(amount: f64, debit: bool) -> String {
    if debit {
        format!("-{}", format_currency(amount.abs()))
    } else {
        format_currency(amount)
    }
}

/// Compact form for chart axes and tiles: "₦1.5M", "₦3.2K", "₦750".
pub fn format_currency_abbrev(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("₦{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("₦{:.1}K", amount / 1_000.0)
    } else {
        format!("₦{:.0}", amount)
    }
}

/// Avatar initials from a customer name: "Adaeze Obi" -> "AO".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(secs_before_now: i64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Some(now - chrono::Duration::seconds(secs_before_now))
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(30, "Just now")]
    #[case(59, "Just now")]
    #[case(60, "1 minute ago")]
    #[case(120, "2 minutes ago")]
    #[case(59 * 60, "59 minutes ago")]
    #[case(60 * 60, "1 hour ago")]
    #[case(5 * 60 * 60, "5 hours ago")]
    #[case(23 * 60 * 60, "23 hours ago")]
    #[case(24 * 60 * 60, "1 day ago")]
    #[case(3 * 24 * 60 * 60, "3 days ago")]
    fn relative_time_buckets(#[case] secs: i64, #[case] expected: &str) {
        let now = fixed_now();
        assert_eq!(format_relative_time(at(secs, now), now), expected);
    }

    #[test]
    fn relative_time_placeholder_for_missing_or_invalid() {
        let now = fixed_now();
        assert_eq!(format_relative_time(None, now), MISSING_DATE);
        assert_eq!(parse_event_date(Some("not-a-date")), None);
        assert_eq!(parse_event_date(Some("")), None);
        assert_eq!(parse_event_date(None), None);
    }

    #[test]
    fn parse_event_date_accepts_iso8601() {
        let parsed = parse_event_date(Some("2025-06-15T11:00:00.000Z")).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 15, 11, 0, 0).unwrap());
    }

    #[rstest]
    #[case(0.0, "₦0.00")]
    #[case(50.0, "₦50.00")]
    #[case(1234.5, "₦1,234.50")]
    #[case(1_500_000.0, "₦1,500,000.00")]
    #[case(999.999, "₦1,000.00")]
    fn currency_formatting(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[rstest]
    #[case(1_500_000.0, "₦1.5M")]
    #[case(3_200.0, "₦3.2K")]
    #[case(750.0, "₦750")]
    fn abbreviated_currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency_abbrev(amount), expected);
    }

    #[test]
    fn signed_currency_marks_debits() {
        assert_eq!(format_signed_currency(120.0, true), "-₦120.00");
        assert_eq!(format_signed_currency(120.0, false), "₦120.00");
    }

    #[test]
    fn registration_date_column() {
        let now = fixed_now();
        assert_eq!(
            format_registration_date(at(2 * 60 * 60, now), now),
            "2 hours ago"
        );
        assert_eq!(
            format_registration_date(at(30 * 60 * 60, now), now),
            "Yesterday"
        );
        assert_eq!(
            format_registration_date(at(4 * 24 * 60 * 60, now), now),
            "4 days ago"
        );
        assert_eq!(
            format_registration_date(at(30 * 24 * 60 * 60, now), now),
            "16 May 2025"
        );
        assert_eq!(format_registration_date(None, now), MISSING_DATE);
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("Adaeze Obi"), "AO");
        assert_eq!(initials("chinedu"), "C");
        assert_eq!(initials(""), "");
    }
}
