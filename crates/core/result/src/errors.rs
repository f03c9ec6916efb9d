use std::{error::Error, fmt};

use serde::{Deserialize, Serialize};

pub type BoxedErr = Box<dyn Error + Sync + Send>;
pub type OptionalErr = Option<BoxedErr>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum ErrorType {
  // General errors
  NotFound,
  NoEffect,
  InvalidProperty,
  InvalidData,
  MissingField,

  // Remote fetch errors
  HttpRequestError,
  HttpResponseError,
  HttpEmptyResponse,
  TimedOut,

  // Database errors
  DatabaseError,
  DBConnectionError,
  DBSelectError,
  DBInsertError,
  DBDeleteError,

  // External service errors
  InternalError,
  ConfigError,

  // JSON errors
  JsonMarshal,
  JsonUnmarshal,
}

impl fmt::Display for ErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorType::NotFound => write!(f, "Resource not found"),
      ErrorType::NoEffect => write!(f, "Operation had no effect"),
      ErrorType::InvalidProperty => write!(f, "Invalid property"),
      ErrorType::InvalidData => write!(f, "Invalid data"),
      ErrorType::MissingField => write!(f, "Missing required field"),
      ErrorType::HttpRequestError => write!(f, "HTTP request error"),
      ErrorType::HttpResponseError => write!(f, "HTTP response error"),
      ErrorType::HttpEmptyResponse => write!(f, "Empty HTTP response"),
      ErrorType::TimedOut => write!(f, "Operation timed out"),
      ErrorType::DatabaseError => write!(f, "Database error"),
      ErrorType::DBConnectionError => write!(f, "Database connection error"),
      ErrorType::DBSelectError => write!(f, "Database select error"),
      ErrorType::DBInsertError => write!(f, "Database insert error"),
      ErrorType::DBDeleteError => write!(f, "Database delete error"),
      ErrorType::InternalError => write!(f, "Internal error"),
      ErrorType::ConfigError => write!(f, "Configuration error"),
      ErrorType::JsonMarshal => write!(f, "JSON marshaling error"),
      ErrorType::JsonUnmarshal => write!(f, "JSON unmarshaling error"),
    }
  }
}

#[derive(Debug)]
pub struct DBError {
  pub err_type: ErrorType,
  pub err: Box<dyn Error + Send + Sync>,
  pub msg: String,
  pub path: String,
}

impl Default for DBError {
  fn default() -> Self {
    Self {
      err_type: ErrorType::DatabaseError,
      err: Box::new(std::io::Error::other("Database error")),
      msg: String::new(),
      path: String::new(),
    }
  }
}

impl fmt::Display for DBError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts = Vec::new();

    if !self.path.is_empty() {
      parts.push(format!("path: {}", self.path));
    }
    parts.push(format!("err_type: {}", self.err_type));
    if !self.msg.is_empty() {
      parts.push(format!("msg: {}", self.msg));
    }
    parts.push(format!("err: {}", self.err));

    write!(f, "{}", parts.join(", "))
  }
}

impl Error for DBError {}

impl DBError {
  pub fn new(
    path: impl Into<String>,
    err: Box<dyn Error + Send + Sync>,
    err_type: ErrorType,
    msg: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into() }
  }
}

#[derive(Debug)]
pub struct SimpleError {
  pub message: String,
  pub _type: ErrorType,
  pub err: BoxedErr,
}

impl fmt::Display for SimpleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self._type, self.message)
  }
}

impl Error for SimpleError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(self.err.as_ref())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn db_error_display_carries_path_and_message() {
    let err = DBError {
      err_type: ErrorType::DBInsertError,
      msg: "failed to store user user-1".to_string(),
      path: "database.users.users_put".to_string(),
      ..Default::default()
    };

    let rendered = err.to_string();
    assert!(rendered.contains("database.users.users_put"));
    assert!(rendered.contains("Database insert error"));
    assert!(rendered.contains("user-1"));
  }

  #[test]
  fn db_error_default_is_a_database_error() {
    let err = DBError::default();
    assert_eq!(err.err_type, ErrorType::DatabaseError);
    assert!(err.msg.is_empty());
  }
}
