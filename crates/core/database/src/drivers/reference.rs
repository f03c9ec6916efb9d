use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::User;

#[derive(Default, Debug)]
pub struct ReferenceDb {
  pub users: Arc<Mutex<HashMap<String, User>>>,
}
