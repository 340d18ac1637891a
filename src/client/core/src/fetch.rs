/* src/client/core/src/fetch.rs */

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::FetchError;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  /// Attempts after the first one.
  pub max_retries: u32,
  pub retry_delay: Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self { max_retries: 2, retry_delay: Duration::from_millis(1000) }
  }
}

/// Rebuild a value with every object's keys in sorted order.
fn canonicalize(value: &Value) -> Value {
  match value {
    Value::Object(map) => {
      let sorted: BTreeMap<&String, Value> = map.iter().map(|(k, v)| (k, canonicalize(v))).collect();
      Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), v)).collect())
    }
    Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
    other => other.clone(),
  }
}

/// SHA-256 hex of the compact, key-sorted serialization. Whitespace and key
/// order in the source file do not affect the result.
pub fn content_digest(value: &Value) -> String {
  let canonical = serde_json::to_vec(&canonicalize(value)).unwrap_or_default();
  hex::encode(Sha256::digest(&canonical))
}

async fn fetch_once<T: DeserializeOwned>(
  transport: &dyn Transport,
  url: &str,
  expected_digest: Option<&str>,
) -> Result<T, FetchError> {
  let resp = transport.get(url).await?;
  if !resp.is_success() {
    return Err(FetchError::Status { url: url.to_string(), status: resp.status });
  }
  let parse = |e: serde_json::Error| FetchError::Parse { url: url.to_string(), message: e.to_string() };
  let value: Value = serde_json::from_slice(&resp.body).map_err(parse)?;
  if let Some(expected) = expected_digest {
    let actual = content_digest(&value);
    if !actual.eq_ignore_ascii_case(expected) {
      return Err(FetchError::Integrity {
        url: url.to_string(),
        expected: expected.to_string(),
        actual,
      });
    }
  }
  serde_json::from_value(value).map_err(parse)
}

/// Fetch and decode a JSON document, retrying transient failures.
///
/// At most `1 + max_retries` requests are made, with `retry_delay` between
/// them. Integrity mismatches fail immediately.
pub async fn fetch_json<T: DeserializeOwned>(
  transport: &dyn Transport,
  url: &str,
  policy: &RetryPolicy,
  expected_digest: Option<&str>,
) -> Result<T, FetchError> {
  let mut attempt = 0;
  loop {
    debug!("GET {url} (attempt {})", attempt + 1);
    match fetch_once(transport, url, expected_digest).await {
      Ok(value) => return Ok(value),
      Err(e) if e.is_retryable() && attempt < policy.max_retries => {
        attempt += 1;
        warn!(
          "{e}; retrying in {}ms ({attempt}/{})",
          policy.retry_delay.as_millis(),
          policy.max_retries
        );
        tokio::time::sleep(policy.retry_delay).await;
      }
      Err(e) => return Err(e),
    }
  }
}
