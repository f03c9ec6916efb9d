use crate::{
  EducationAndEmployment, Guarantor, PersonalInfo, Socials, User, UserStatus,
};

pub(crate) fn sample_user(id: &str) -> User {
  User {
    id: id.to_string(),
    organization: "Irorun".to_string(),
    username: "grace1".to_string(),
    email: "g.oga@iro.com".to_string(),
    phone_number: "08012345678".to_string(),
    date_joined: "Apr 3, 2019 03:27 PM".to_string(),
    status: UserStatus::Active,
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
  }
}
