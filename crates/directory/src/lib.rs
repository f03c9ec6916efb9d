mod models;
mod service;

pub use models::*;
pub use service::*;

pub use lendr_database::{
  DatabaseInfo, EducationAndEmployment, Guarantor, KeyValueDb, PersonalInfo, RecordStore, Socials,
  User, UserStatus,
};
