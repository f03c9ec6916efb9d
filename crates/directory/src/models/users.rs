use lendr_database::{User, UserStatus};
use serde::{Deserialize, Serialize};

/// Window over the filtered collection. Values below 1 are treated as the
/// defaults by the query path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
  pub page: usize,
  pub limit: usize,
}

/// Per-field constraints combined with AND; an absent field imposes no
/// constraint. Text fields match as case-insensitive substrings, the phone
/// number as a plain substring, the date on calendar day, the status
/// exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
  pub organization: Option<String>,
  pub username: Option<String>,
  pub email: Option<String>,
  pub date: Option<String>,
  pub phone_number: Option<String>,
  pub status: Option<UserStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
  pub users: Vec<User>,
  /// Count of records matching the filter across the whole collection,
  /// independent of the requested page.
  pub total: usize,
  pub page: usize,
  pub limit: usize,
}

/// Dashboard summary counts, thousands-separated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersStatistics {
  pub total_users: String,
  pub active_users: String,
  pub users_with_loans: String,
  pub users_with_savings: String,
}
