/* src/cli/core/src/config/types.rs */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use folio_client::{ClientConfig, RetryPolicy, parse_digest_key};
use folio_render::Locale;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
  pub content: ContentSection,
  #[serde(default)]
  pub fetch: FetchSection,
  #[serde(default)]
  pub locale: LocaleSection,
  #[serde(default)]
  pub site: SiteSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  /// `http(s)` url, or a directory relative to `folio.toml`.
  pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSection {
  #[serde(default = "default_max_retries")]
  pub max_retries: u32,
  #[serde(default = "default_retry_delay_ms")]
  pub retry_delay_ms: u64,
  /// `"<locale>/<category>" = "<sha256 hex>"`
  #[serde(default)]
  pub digests: BTreeMap<String, String>,
}

impl Default for FetchSection {
  fn default() -> Self {
    Self {
      max_retries: default_max_retries(),
      retry_delay_ms: default_retry_delay_ms(),
      digests: BTreeMap::new(),
    }
  }
}

fn default_max_retries() -> u32 {
  2
}

fn default_retry_delay_ms() -> u64 {
  1000
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSection {
  #[serde(default = "default_locale")]
  pub default: String,
  /// File remembering the chosen language.
  #[serde(default = "default_store")]
  pub store: String,
}

impl Default for LocaleSection {
  fn default() -> Self {
    Self { default: default_locale(), store: default_store() }
  }
}

fn default_locale() -> String {
  "vi".to_string()
}

fn default_store() -> String {
  ".folio/state.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_template")]
  pub template: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { template: default_template(), out_dir: default_out_dir() }
  }
}

fn default_template() -> String {
  "index.html".to_string()
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn is_remote(url: &str) -> bool {
  url.starts_with("http://") || url.starts_with("https://")
}

impl FolioConfig {
  pub fn validate(&self) -> Result<()> {
    if self.content.base_url.trim().is_empty() {
      bail!("content.base_url must not be empty");
    }
    if Locale::from_code(&self.locale.default).is_none() {
      bail!("locale.default \"{}\" is not one of \"vi\", \"en\"", self.locale.default);
    }
    for (key, digest) in &self.fetch.digests {
      if parse_digest_key(key).is_none() {
        bail!("fetch.digests key \"{key}\" must look like \"vi/projects\"");
      }
      if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("fetch.digests.\"{key}\" is not a SHA-256 hex digest");
      }
    }
    Ok(())
  }

  pub fn default_locale(&self) -> Locale {
    Locale::from_code(&self.locale.default).unwrap_or_default()
  }

  /// Content base with local directories resolved against `base_dir`.
  pub fn content_base(&self, base_dir: &Path) -> String {
    let base = self.content.base_url.trim();
    if is_remote(base) {
      base.to_string()
    } else {
      base_dir.join(base).to_string_lossy().into_owned()
    }
  }

  pub fn store_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.locale.store)
  }

  pub fn template_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.site.template)
  }

  pub fn out_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.site.out_dir)
  }

  pub fn client_config(&self, base_dir: &Path) -> ClientConfig {
    let mut config = ClientConfig::new(self.content_base(base_dir));
    config.retry = RetryPolicy {
      max_retries: self.fetch.max_retries,
      retry_delay: Duration::from_millis(self.fetch.retry_delay_ms),
    };
    config.digests = self
      .fetch
      .digests
      .iter()
      .filter_map(|(key, digest)| Some((parse_digest_key(key)?, digest.to_ascii_lowercase())))
      .collect();
    config.default_locale = self.default_locale();
    config
  }
}
