/* src/client/core/src/error.rs */

use std::fmt;

/// Failure classes surfaced by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Transport,
  Parse,
  Integrity,
  NotFound,
  EmbedLoad,
}

impl ErrorKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Transport => "TRANSPORT_ERROR",
      Self::Parse => "PARSE_ERROR",
      Self::Integrity => "INTEGRITY_ERROR",
      Self::NotFound => "NOT_FOUND",
      Self::EmbedLoad => "EMBED_LOAD_ERROR",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
  /// The server answered with a non-success status.
  Status { url: String, status: u16 },
  /// The request never produced a response.
  Network { url: String, message: String },
  /// The body was not valid content.
  Parse { url: String, message: String },
  /// The payload digest did not match the expected one.
  Integrity { url: String, expected: String, actual: String },
}

impl FetchError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Status { .. } | Self::Network { .. } => ErrorKind::Transport,
      Self::Parse { .. } => ErrorKind::Parse,
      Self::Integrity { .. } => ErrorKind::Integrity,
    }
  }

  /// Integrity mismatches are terminal; everything else may be retried.
  pub fn is_retryable(&self) -> bool {
    self.kind() != ErrorKind::Integrity
  }

  pub fn url(&self) -> &str {
    match self {
      Self::Status { url, .. }
      | Self::Network { url, .. }
      | Self::Parse { url, .. }
      | Self::Integrity { url, .. } => url,
    }
  }
}

impl fmt::Display for FetchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let code = self.kind().as_str();
    match self {
      Self::Status { url, status } => write!(f, "{code}: HTTP {status} for {url}"),
      Self::Network { url, message } => write!(f, "{code}: {url}: {message}"),
      Self::Parse { url, message } => write!(f, "{code}: {url}: {message}"),
      Self::Integrity { url, expected, actual } => {
        write!(f, "{code}: {url}: expected digest {expected}, got {actual}")
      }
    }
  }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
  /// No project with this id in the collection the click came from.
  NotFound { project_id: String },
  /// A substituted player failed to load.
  EmbedLoad { slot: usize, source_url: String },
}

impl ModalError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::NotFound { .. } => ErrorKind::NotFound,
      Self::EmbedLoad { .. } => ErrorKind::EmbedLoad,
    }
  }
}

impl fmt::Display for ModalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let code = self.kind().as_str();
    match self {
      Self::NotFound { project_id } => write!(f, "{code}: no project with id \"{project_id}\""),
      Self::EmbedLoad { slot, source_url } => {
        write!(f, "{code}: player {slot} failed to load {source_url}")
      }
    }
  }
}

impl std::error::Error for ModalError {}
