use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Display format for the `dateJoined` field, e.g. `"Apr 3, 2019 03:27 PM"`.
pub const JOINED_FORMAT: &str = "%b %-d, %Y %I:%M %p";

/// ISO date accepted by the date filter, e.g. `"2019-04-03"`.
const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_joined(joined: DateTime<Local>) -> String {
  joined.format(JOINED_FORMAT).to_string()
}

/// Parse a joined timestamp back to its calendar day. Returns `None` for
/// strings that were not produced by [`format_joined`] (remote records may
/// carry arbitrary text there).
pub fn parse_joined(joined: &str) -> Option<NaiveDate> {
  NaiveDateTime::parse_from_str(joined, JOINED_FORMAT).ok().map(|dt| dt.date())
}

/// Parse a filter's date input: ISO first, then the joined display format.
pub fn parse_filter_date(date: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(date, FILTER_DATE_FORMAT).ok().or_else(|| parse_joined(date))
}

/// Whether a stored joined timestamp falls on the same calendar day as a
/// filter input. Unparseable values on either side match nothing.
pub fn same_joined_day(joined: &str, filter: &str) -> bool {
  match (parse_joined(joined), parse_filter_date(filter)) {
    (Some(a), Some(b)) => a == b,
    _ => false,
  }
}

/// Thousands-separated rendering, e.g. `12453` -> `"12,453"`.
pub fn format_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);

  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(c);
  }
  out
}

/// Currency rendering used by account balances and loan amounts,
/// e.g. `250000` -> `"₦250,000.00"`.
pub fn format_naira(amount: u64) -> String {
  format!("₦{}.00", format_thousands(amount))
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn joined_round_trips_through_display_format() {
    let joined = Local.with_ymd_and_hms(2019, 4, 3, 15, 27, 0).unwrap();
    let rendered = format_joined(joined);

    assert_eq!(rendered, "Apr 3, 2019 03:27 PM");
    assert_eq!(parse_joined(&rendered), NaiveDate::from_ymd_opt(2019, 4, 3));
  }

  #[test]
  fn filter_dates_accept_iso_and_display_formats() {
    let expected = NaiveDate::from_ymd_opt(2019, 4, 3);
    assert_eq!(parse_filter_date("2019-04-03"), expected);
    assert_eq!(parse_filter_date("Apr 3, 2019 03:27 PM"), expected);
    assert_eq!(parse_filter_date("not a date"), None);
  }

  #[test]
  fn same_day_comparison_ignores_time_of_day() {
    assert!(same_joined_day("Apr 3, 2019 03:27 PM", "2019-04-03"));
    assert!(same_joined_day("Apr 3, 2019 11:59 PM", "Apr 3, 2019 12:01 AM"));
    assert!(!same_joined_day("Apr 4, 2019 03:27 PM", "2019-04-03"));
    assert!(!same_joined_day("garbage", "2019-04-03"));
    assert!(!same_joined_day("Apr 3, 2019 03:27 PM", "garbage"));
  }

  #[test]
  fn thousands_grouping() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(12_453), "12,453");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
  }

  #[test]
  fn naira_rendering() {
    assert_eq!(format_naira(250_000), "₦250,000.00");
    assert_eq!(format_naira(50), "₦50.00");
  }
}
