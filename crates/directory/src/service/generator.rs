use chrono::{Local, TimeZone};
use lendr_config::Settings;
use lendr_database::{
  EducationAndEmployment, Guarantor, PersonalInfo, Socials, User, UserStatus,
};
use lendr_utils::{format_joined, format_naira};
use rand::Rng;

// Vocabularies for the generated collection
const ORGANIZATIONS: &[&str] = &["Lendr", "Irorun", "Lendstar", "PayDay", "QuickCash", "MoneyPlus"];

const FIRST_NAMES: &[&str] = &[
  "Adedeji", "Grace", "Tosin", "Debby", "Tunde", "Bola", "Chidi", "Emeka", "Ngozi", "Kemi",
  "Femi", "Yemi", "Segun", "Funke", "Dami", "Isaac", "Joy", "Peace", "Faith", "Victor",
];

const LAST_NAMES: &[&str] = &[
  "Effiom", "Ogana", "Dokunmu", "Adebayo", "Okonkwo", "Ibrahim", "Olumide", "Nnamdi", "Okafor",
  "Eze", "Bakare", "Adeleke", "Ajayi", "Balogun", "Chukwu", "Danjuma", "Ekezie", "Fashola",
  "Garba", "Hassan",
];

const EDUCATION_LEVELS: &[&str] = &["B.Sc", "M.Sc", "Ph.D", "HND", "OND", "SSCE"];

const EMPLOYMENT_STATUSES: &[&str] = &["Employed", "Self-employed", "Unemployed", "Student"];

const SECTORS: &[&str] = &[
  "FinTech", "Banking", "Healthcare", "Education", "Agriculture", "Technology", "Entertainment",
  "Manufacturing",
];

const RESIDENCE_TYPES: &[&str] =
  &["Parent's Apartment", "Own Apartment", "Rented", "Company Provided"];

const RELATIONSHIPS: &[&str] =
  &["Sister", "Brother", "Friend", "Colleague", "Spouse", "Parent", "Uncle", "Aunt"];

const MARITAL_STATUSES: &[&str] = &["Single", "Married", "Divorced", "Widowed"];

const CHILDREN: &[&str] = &["None", "1", "2", "3", "4", "5+"];

const BANKS: &[&str] = &[
  "Providus Bank", "GTBank", "First Bank", "UBA", "Access Bank", "Zenith Bank", "Sterling Bank",
  "Fidelity Bank",
];

const PHONE_PREFIXES: &[&str] = &["080", "081", "070", "090", "091"];

fn pick<'a>(rng: &mut impl Rng, items: &'a [&'a str]) -> &'a str {
  items[rng.gen_range(0..items.len())]
}

fn random_phone(rng: &mut impl Rng) -> String {
  format!("{}{:08}", pick(rng, PHONE_PREFIXES), rng.gen_range(0..100_000_000u64))
}

fn random_amount(rng: &mut impl Rng, min: u64, max: u64) -> String {
  format_naira(rng.gen_range(min..=max))
}

fn random_joined(rng: &mut impl Rng, since_year: i32) -> String {
  let now = Local::now();
  let start = Local.with_ymd_and_hms(since_year, 1, 1, 0, 0, 0).single().unwrap_or(now);
  let ts = rng.gen_range(start.timestamp()..=now.timestamp());
  format_joined(Local.timestamp_opt(ts, 0).single().unwrap_or(now))
}

fn random_status(rng: &mut impl Rng) -> UserStatus {
  // ~40% Active / 20% Inactive / 25% Pending / 15% Blacklisted
  let draw: f64 = rng.r#gen();
  if draw < 0.40 {
    UserStatus::Active
  } else if draw < 0.60 {
    UserStatus::Inactive
  } else if draw < 0.85 {
    UserStatus::Pending
  } else {
    UserStatus::Blacklisted
  }
}

fn zero_padded(rng: &mut impl Rng, digits: usize) -> String {
  let ceiling = 10u64.saturating_pow(digits as u32);
  format!("{:0width$}", rng.gen_range(0..ceiling), width = digits)
}

fn generate_user(rng: &mut impl Rng, seq: usize, settings: &Settings) -> User {
  let first_name = pick(rng, FIRST_NAMES);
  let last_name = pick(rng, LAST_NAMES);
  let full_name = format!("{} {}", first_name, last_name);
  let organization = pick(rng, ORGANIZATIONS);

  let first_lower = first_name.to_lowercase();
  let last_lower = last_name.to_lowercase();
  let org_lower = organization.to_lowercase();

  User {
    id: format!("user-{}", seq),
    organization: organization.to_string(),
    username: format!("{}{}", first_lower, seq),
    email: format!(
      "{}.{}@{}.com",
      &first_lower[..1],
      &last_lower[..last_lower.len().min(3)],
      &org_lower[..org_lower.len().min(3)]
    ),
    phone_number: random_phone(rng),
    date_joined: random_joined(rng, settings.generator.since_year),
    status: random_status(rng),
    personal_info: PersonalInfo {
      full_name: full_name.clone(),
      phone_number: random_phone(rng),
      email_address: format!("{}@gmail.com", first_lower),
      bvn: zero_padded(rng, settings.generator.bvn_length),
      gender: if rng.gen_bool(0.5) { "Male" } else { "Female" }.to_string(),
      marital_status: pick(rng, MARITAL_STATUSES).to_string(),
      children: pick(rng, CHILDREN).to_string(),
      type_of_residence: pick(rng, RESIDENCE_TYPES).to_string(),
    },
    education_and_employment: EducationAndEmployment {
      level_of_education: pick(rng, EDUCATION_LEVELS).to_string(),
      employment_status: pick(rng, EMPLOYMENT_STATUSES).to_string(),
      sector_of_employment: pick(rng, SECTORS).to_string(),
      duration_of_employment: format!("{} years", rng.gen_range(1..=15)),
      office_email: format!("{}@{}.com", first_lower, org_lower),
      monthly_income: format!(
        "{} - {}",
        random_amount(rng, 50_000, 400_000),
        random_amount(rng, 400_001, 900_000)
      ),
      loan_repayment: random_amount(rng, 10_000, 100_000),
    },
    socials: Socials {
      twitter: format!("@{}_{}", first_lower, last_lower),
      facebook: full_name.clone(),
      instagram: format!("@{}{}", first_lower, last_lower),
    },
    guarantor: Guarantor {
      full_name: format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
      phone_number: random_phone(rng),
      email_address: format!(
        "{}.{}@gmail.com",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase()
      ),
      relationship: pick(rng, RELATIONSHIPS).to_string(),
    },
    account_balance: random_amount(rng, 50_000, 500_000),
    account_number: zero_padded(rng, settings.generator.account_number_length),
    bank_name: pick(rng, BANKS).to_string(),
    user_tier: rng.gen_range(1..=3),
  }
}

/// Build a full synthetic collection matching the remote schema. Content is
/// randomized per call; memoization of the result is the caller's concern.
pub fn generate_users(settings: &Settings) -> Vec<User> {
  let mut rng = rand::thread_rng();
  (1..=settings.generator.total_users).map(|seq| generate_user(&mut rng, seq, settings)).collect()
}
