/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::{Result, bail};
use folio_client::{Category, content_digest, fetch_json, transport_for};
use folio_render::Locale;

use crate::config::{FolioConfig, config_dir};
use crate::ui;

pub async fn run(config_path: &Path, config: &FolioConfig) -> Result<()> {
  ui::banner("check");
  let base_dir = config_dir(config_path);
  let client = config.client_config(&base_dir);
  let transport = transport_for(&client.base_url);

  let mut failures = 0u32;
  for locale in Locale::ALL {
    for category in Category::ALL {
      let url = client.url(locale, category);
      let expected = client.digest(locale, category);
      match fetch_json::<serde_json::Value>(transport.as_ref(), &url, &client.retry, expected).await
      {
        Ok(value) => {
          let pinned = if expected.is_some() { " (digest pinned)" } else { "" };
          ui::ok(&format!("{locale}/{category}{pinned}"));
          ui::detail(&content_digest(&value));
        }
        Err(e) => {
          failures += 1;
          ui::fail(&format!("{locale}/{category}"));
          ui::detail(&e.to_string());
        }
      }
    }
  }

  ui::blank();
  if failures > 0 {
    bail!("{failures} content document(s) failed");
  }
  ui::ok("all content documents reachable");
  Ok(())
}
