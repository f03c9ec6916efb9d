use serde::{Deserialize, Serialize};

use crate::EnumHelpers;

/// Lifecycle state of a user record. Mutations flow through the durable
/// store so a changed status survives a re-fetch of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
  Active,
  Inactive,
  Pending,
  Blacklisted,
}

impl EnumHelpers for UserStatus {
  fn to_str(&self) -> &'static str {
    match self {
      UserStatus::Active => "Active",
      UserStatus::Inactive => "Inactive",
      UserStatus::Pending => "Pending",
      UserStatus::Blacklisted => "Blacklisted",
    }
  }

  fn from_optional_string(s: Option<String>) -> Option<Self> {
    match s.unwrap_or_default().to_lowercase().as_str() {
      "active" => Some(UserStatus::Active),
      "inactive" => Some(UserStatus::Inactive),
      "pending" => Some(UserStatus::Pending),
      "blacklisted" => Some(UserStatus::Blacklisted),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub organization: String,
  pub username: String,
  pub email: String,
  pub phone_number: String,
  pub date_joined: String, // display string, e.g. "Apr 3, 2019 03:27 PM"
  pub status: UserStatus,
  pub personal_info: PersonalInfo,
  pub education_and_employment: EducationAndEmployment,
  pub socials: Socials,
  pub guarantor: Guarantor,
  pub account_balance: String, // currency string, e.g. "₦250,000.00"
  pub account_number: String,
  pub bank_name: String,
  pub user_tier: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
  pub full_name: String,
  pub phone_number: String,
  pub email_address: String,
  pub bvn: String,
  pub gender: String,
  pub marital_status: String,
  pub children: String,
  pub type_of_residence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationAndEmployment {
  pub level_of_education: String,
  pub employment_status: String,
  pub sector_of_employment: String,
  pub duration_of_employment: String,
  pub office_email: String,
  pub monthly_income: String,
  pub loan_repayment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socials {
  pub twitter: String,
  pub facebook: String,
  pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
  pub full_name: String,
  pub phone_number: String,
  pub email_address: String,
  pub relationship: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_string_round_trip() {
    assert_eq!(UserStatus::Blacklisted.to_str(), "Blacklisted");
    assert_eq!(
      UserStatus::from_optional_string(Some("blacklisted".to_string())),
      Some(UserStatus::Blacklisted)
    );
    assert_eq!(UserStatus::from_optional_string(Some("unknown".to_string())), None);
    assert_eq!(UserStatus::from_optional_string(None), None);
  }

  #[test]
  fn user_serializes_with_wire_field_names() {
    let user = User {
      id: "user-1".to_string(),
      organization: "Irorun".to_string(),
      username: "grace1".to_string(),
      email: "g.oga@iro.com".to_string(),
      phone_number: "08012345678".to_string(),
      date_joined: "Apr 3, 2019 03:27 PM".to_string(),
      status: UserStatus::Pending,
      personal_info: PersonalInfo {
        full_name: "Grace Ogana".to_string(),
        phone_number: "08012345678".to_string(),
        email_address: "grace@gmail.com".to_string(),
        bvn: "12345678901".to_string(),
        gender: "Female".to_string(),
        marital_status: "Single".to_string(),
        children: "None".to_string(),
        type_of_residence: "Rented".to_string(),
      },
      education_and_employment: EducationAndEmployment {
        level_of_education: "B.Sc".to_string(),
        employment_status: "Employed".to_string(),
        sector_of_employment: "FinTech".to_string(),
        duration_of_employment: "2 years".to_string(),
        office_email: "grace@irorun.com".to_string(),
        monthly_income: "₦200,000.00 - ₦400,000.00".to_string(),
        loan_repayment: "₦40,000.00".to_string(),
      },
      socials: Socials {
        twitter: "@grace_ogana".to_string(),
        facebook: "Grace Ogana".to_string(),
        instagram: "@graceogana".to_string(),
      },
      guarantor: Guarantor {
        full_name: "Debby Ogana".to_string(),
        phone_number: "08012345678".to_string(),
        email_address: "debby.ogana@gmail.com".to_string(),
        relationship: "Sister".to_string(),
      },
      account_balance: "₦200,000.00".to_string(),
      account_number: "1234567890".to_string(),
      bank_name: "GTBank".to_string(),
      user_tier: 2,
    };

    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"phoneNumber\""));
    assert!(json.contains("\"dateJoined\""));
    assert!(json.contains("\"personalInfo\""));
    assert!(json.contains("\"educationAndEmployment\""));
    assert!(json.contains("\"status\":\"Pending\""));

    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
  }
}
