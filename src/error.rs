use thiserror::Error;

/// Failure of a single call against the Clockify API.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The server answered with a non-2xx status; `body` is the raw response text.
  #[error("{method} {url} returned {status}: {body}")]
  Status {
    method: &'static str,
    url: String,
    status: u16,
    body: String,
  },

  #[error("{method} {url} failed: {source}")]
  Transport {
    method: &'static str,
    url: String,
    #[source]
    source: ureq::Error,
  },

  #[error("decoding response from {url}: {message}")]
  Decode { url: String, message: String },
}

/// A per-user insert that did not go through. Never aborts sibling inserts.
#[derive(Debug, Error)]
#[error("Error on inserting time entry for user {email} - {source}")]
pub struct InsertFailure {
  pub email: String,
  #[source]
  pub source: ApiError,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_error_surfaces_body() {
    let err = ApiError::Status {
      method: "GET",
      url: "https://api.clockify.me/api/v1/workspaces/w1/users".into(),
      status: 401,
      body: "{\"message\":\"Api key does not exist\"}".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("401"));
    assert!(msg.contains("Api key does not exist"));
  }

  #[test]
  fn insert_failure_names_user() {
    let err = InsertFailure {
      email: "a@x.com".into(),
      source: ApiError::Decode {
        url: "u".into(),
        message: "eof".into(),
      },
    };
    assert!(err.to_string().starts_with("Error on inserting time entry for user a@x.com - "));
  }
}
