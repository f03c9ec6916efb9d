use thiserror::Error as ThisError;

use crate::ErrorType;

/// Failure raised by the remote user-collection fetch. Callers recover by
/// switching to the generated fallback; nothing here is fatal.
#[derive(Debug, Clone, ThisError)]
pub enum FetchError {
  #[error("request timed out after {0} ms")]
  Timeout(u64),
  #[error("transport error: {0}")]
  Transport(String),
  #[error("endpoint responded with status: {0}")]
  Status(u16),
  #[error("endpoint returned an empty collection")]
  EmptyPayload,
  #[error("failed to decode payload: {0}")]
  Decode(String),
}

impl FetchError {
  pub fn err_type(&self) -> ErrorType {
    match self {
      FetchError::Timeout(_) => ErrorType::TimedOut,
      FetchError::Transport(_) => ErrorType::HttpRequestError,
      FetchError::Status(_) => ErrorType::HttpResponseError,
      FetchError::EmptyPayload => ErrorType::HttpEmptyResponse,
      FetchError::Decode(_) => ErrorType::JsonUnmarshal,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fetch_errors_map_to_their_error_type() {
    assert_eq!(FetchError::Timeout(10_000).err_type(), ErrorType::TimedOut);
    assert_eq!(FetchError::Status(503).err_type(), ErrorType::HttpResponseError);
    assert_eq!(FetchError::EmptyPayload.err_type(), ErrorType::HttpEmptyResponse);
  }

  #[test]
  fn fetch_error_messages_are_descriptive() {
    assert_eq!(FetchError::Timeout(10_000).to_string(), "request timed out after 10000 ms");
    assert_eq!(FetchError::Status(404).to_string(), "endpoint responded with status: 404");
  }
}
