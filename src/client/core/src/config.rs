/* src/client/core/src/config.rs */

use std::collections::BTreeMap;
use std::time::Duration;

use folio_render::Locale;

use crate::category::Category;
use crate::fetch::RetryPolicy;

pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);
pub const EMBED_DELAY: Duration = Duration::from_millis(500);

/// Runtime settings, usually built from `folio.toml` by the CLI.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// `http(s)` url or local directory holding `<locale>/<category>.json`.
  pub base_url: String,
  pub retry: RetryPolicy,
  /// Expected content digests; categories without an entry are not checked.
  pub digests: BTreeMap<(Locale, Category), String>,
  /// Used when the store holds no choice yet.
  pub default_locale: Locale,
  pub debounce: Duration,
  pub embed_delay: Duration,
}

impl ClientConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      retry: RetryPolicy::default(),
      digests: BTreeMap::new(),
      default_locale: Locale::default(),
      debounce: DEBOUNCE_WINDOW,
      embed_delay: EMBED_DELAY,
    }
  }

  pub fn digest(&self, locale: Locale, category: Category) -> Option<&str> {
    self.digests.get(&(locale, category)).map(String::as_str)
  }

  pub fn url(&self, locale: Locale, category: Category) -> String {
    category.url(&self.base_url, locale)
  }
}
