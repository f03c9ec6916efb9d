mod users;

pub use users::*;

#[cfg(feature = "sqlite")]
use crate::SqliteDb;
use crate::{Database, KeyValueDb, ReferenceDb};

/// Common string/enum conversions shared by stored enums.
pub trait EnumHelpers {
  fn to_str(&self) -> &'static str;
  fn from_optional_string(s: Option<String>) -> Option<Self>
  where
    Self: Sized;
}

pub trait AbstractDatabase: Sync + Send + UsersRepository {}

impl AbstractDatabase for ReferenceDb {}
impl AbstractDatabase for KeyValueDb {}

#[cfg(feature = "sqlite")]
impl AbstractDatabase for SqliteDb {}

impl std::ops::Deref for Database {
  type Target = dyn AbstractDatabase;

  fn deref(&self) -> &Self::Target {
    match self {
      Database::Reference(dummy) => dummy,
      #[cfg(feature = "sqlite")]
      Database::Sqlite(sqlite) => sqlite,
    }
  }
}
