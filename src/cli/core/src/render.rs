/* src/cli/core/src/render.rs */

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use folio_client::{
  App, Category, ClientConfig, FileStore, LocaleStore, MemoryDocument, MemoryStore, Transport,
  transport_for,
};
use folio_render::{Locale, PageSnapshot, assemble_page, extract_labels};

use crate::config::{FolioConfig, config_dir};
use crate::ui;

pub struct RenderedPage {
  pub locale: Locale,
  pub html: String,
  /// Categories that fell back to their inline error or hidden state.
  pub failed: Vec<Category>,
}

fn snapshot(doc: &Mutex<MemoryDocument>) -> PageSnapshot {
  doc.lock().map(|d| d.snapshot()).unwrap_or_else(|poisoned| poisoned.into_inner().snapshot())
}

fn page(app: &App, doc: &Mutex<MemoryDocument>, template: &str) -> RenderedPage {
  // No viewport here: every deferred image gets its real source.
  app.reveal_all();
  let locale = app.locale();
  let failed =
    Category::ALL.into_iter().filter(|c| app.cached_locale(*c) != Some(locale)).collect();
  RenderedPage { locale, html: assemble_page(template, &snapshot(doc)), failed }
}

/// Render `first`, then (unless `only_first`) switch to the other locale and
/// render it too, exactly as a visitor toggling the language would see it.
pub async fn render_site(
  client: ClientConfig,
  transport: Arc<dyn Transport>,
  template: &str,
  first: Locale,
  only_first: bool,
) -> Vec<RenderedPage> {
  let doc = Arc::new(Mutex::new(MemoryDocument::with_labels(extract_labels(template))));
  let store = Arc::new(MemoryStore::new(Some(first)));
  let app = App::new(client, transport, store, doc.clone());

  app.start().await;
  let mut pages = vec![page(&app, &doc, template)];
  if !only_first {
    app.switch_language(first.other()).await;
    pages.push(page(&app, &doc, template));
  }
  pages
}

fn write_page(path: &Path, html: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

pub async fn run(
  config_path: &Path,
  config: &FolioConfig,
  lang: Option<&str>,
  out: Option<PathBuf>,
) -> Result<()> {
  ui::banner("render");
  let base_dir = config_dir(config_path);
  let template_path = config.template_path(&base_dir);
  let template = std::fs::read_to_string(&template_path)
    .with_context(|| format!("failed to read template {}", template_path.display()))?;
  let out_dir = out.unwrap_or_else(|| config.out_dir(&base_dir));

  let store = FileStore::new(config.store_path(&base_dir));
  let only = match lang {
    Some(code) => {
      let locale: Locale = code.parse()?;
      store.save(locale).with_context(|| format!("failed to persist language {locale}"))?;
      Some(locale)
    }
    None => None,
  };
  let first = only.or_else(|| store.load()).unwrap_or_else(|| config.default_locale());

  let client = config.client_config(&base_dir);
  ui::arrow(&format!("content from {}", client.base_url));
  let transport: Arc<dyn Transport> = Arc::from(transport_for(&client.base_url));
  let pages = render_site(client, transport, &template, first, only.is_some()).await;

  for (index, page) in pages.iter().enumerate() {
    for category in &page.failed {
      ui::warn(&format!("{}/{category} failed to load; page shows the fallback", page.locale));
    }
    let path = out_dir.join(page.locale.code()).join("index.html");
    write_page(&path, &page.html)?;
    if index == 0 {
      write_page(&out_dir.join("index.html"), &page.html)?;
    }
    ui::ok(&format!("{} ({})", path.display(), ui::format_size(page.html.len() as u64)));
  }
  Ok(())
}
