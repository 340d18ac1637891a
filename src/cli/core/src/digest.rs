/* src/cli/core/src/digest.rs */

use std::path::Path;

use anyhow::{Context, Result};
use folio_client::content_digest;

use crate::ui;

pub fn digest_file(path: &Path) -> Result<String> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let value: serde_json::Value =
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  Ok(content_digest(&value))
}

pub fn run(path: &Path) -> Result<()> {
  let digest = digest_file(path)?;
  ui::plain(&digest);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formatting_does_not_change_digest() {
    let tmp = tempfile::tempdir().unwrap();
    let compact = tmp.path().join("compact.json");
    let pretty = tmp.path().join("pretty.json");
    std::fs::write(&compact, r#"{"name":"An","id":1}"#).unwrap();
    std::fs::write(&pretty, "{\n  \"id\": 1,\n  \"name\": \"An\"\n}\n").unwrap();

    assert_eq!(digest_file(&compact).unwrap(), digest_file(&pretty).unwrap());
  }

  #[test]
  fn invalid_json_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.json");
    std::fs::write(&path, "{").unwrap();

    let err = digest_file(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
  }
}
