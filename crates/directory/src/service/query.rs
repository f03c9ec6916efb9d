use lendr_config::Settings;
use lendr_database::{User, UserStatus};
use lendr_utils::{format_thousands, same_joined_day};

use crate::models::{UserFilter, UsersStatistics};

fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a record satisfies every provided constraint. Absent fields
/// impose none; a date that fails to parse matches nothing.
pub(crate) fn matches_filter(user: &User, filter: &UserFilter) -> bool {
  if let Some(organization) = &filter.organization {
    if !contains_ci(&user.organization, organization) {
      return false;
    }
  }

  if let Some(username) = &filter.username {
    if !contains_ci(&user.username, username) {
      return false;
    }
  }

  if let Some(email) = &filter.email {
    if !contains_ci(&user.email, email) {
      return false;
    }
  }

  if let Some(phone_number) = &filter.phone_number {
    if !user.phone_number.contains(phone_number.as_str()) {
      return false;
    }
  }

  if let Some(status) = filter.status {
    if user.status != status {
      return false;
    }
  }

  if let Some(date) = &filter.date {
    if !same_joined_day(&user.date_joined, date) {
      return false;
    }
  }

  true
}

pub(crate) fn apply_filters(users: &[User], filter: &UserFilter) -> Vec<User> {
  users.iter().filter(|user| matches_filter(user, filter)).cloned().collect()
}

/// Half-open slice `[(page-1)*limit, (page-1)*limit + limit)`; pages past
/// the end yield an empty vec rather than an error.
pub(crate) fn paginate(users: Vec<User>, page: usize, limit: usize) -> Vec<User> {
  let start = (page - 1).saturating_mul(limit);
  users.into_iter().skip(start).take(limit).collect()
}

/// Sorted, duplicate-free organization names for the filter dropdown.
pub(crate) fn organizations_of(users: &[User]) -> Vec<String> {
  let mut organizations: Vec<String> = users.iter().map(|u| u.organization.clone()).collect();
  organizations.sort();
  organizations.dedup();
  organizations
}

/// Summary counts over the collection. Loan/savings figures are derived
/// from configured multipliers, not real product data.
pub(crate) fn statistics_for(users: &[User], settings: &Settings) -> UsersStatistics {
  let total = users.len();
  let active = users.iter().filter(|u| u.status == UserStatus::Active).count();
  let with_loans = (total as f64 * settings.stats.loans_multiplier).floor() as u64;
  let with_savings = (total as f64 * settings.stats.savings_multiplier).floor() as u64;

  UsersStatistics {
    total_users: format_thousands(total as u64),
    active_users: format_thousands(active as u64),
    users_with_loans: format_thousands(with_loans),
    users_with_savings: format_thousands(with_savings),
  }
}
