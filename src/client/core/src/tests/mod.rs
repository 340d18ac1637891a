/* src/client/core/src/tests/mod.rs */


use std::sync::{Arc, Mutex, MutexGuard};

use folio_render::{Locale, Region};

use crate::app::App;
use crate::category::Category;
use crate::config::ClientConfig;
use crate::document::MemoryDocument;
use crate::store::MemoryStore;
use crate::testing::ScriptedTransport;

const BASE: &str = "data";

fn url(locale: Locale, category: Category) -> String {
  category.url(BASE, locale)
}

fn personal_info(locale: Locale) -> String {
  let (name, tagline) = match locale {
    Locale::Primary => ("Nguyễn An", "Thiết kế đồ họa"),
    Locale::Secondary => ("An Nguyen", "Graphic design"),
  };
  serde_json::json!({
    "name": name,
    "tagline": tagline,
    "profile_picture_url": "images/profile.jpg",
    "social_links": [
      { "platform": "Behance", "url": "https://behance.net/an", "icon_class": "fab fa-behance" }
    ]
  })
  .to_string()
}

fn projects(locale: Locale) -> String {
  let (first, second) = match locale {
    Locale::Primary => ("Nhận diện thương hiệu", "Bao bì"),
    Locale::Secondary => ("Brand identity", "Packaging"),
  };
  serde_json::json!([
    {
      "id": "p1",
      "project_name": first,
      "project_thumbnail_url": "images/p1.jpg",
      "media": [
        { "type": "image", "url": "images/p1-a.jpg", "alt_text": "A" },
        { "type": "video", "url": "https://youtu.be/abc123" },
        { "type": "video", "url": "https://vimeo.com/76979871" }
      ]
    },
    { "id": 2, "project_name": second }
  ])
  .to_string()
}

fn video_projects(locale: Locale) -> String {
  let name = locale.pick("Phim ngắn", "Short film");
  serde_json::json!([
    { "id": "v1", "project_name": name, "video_url": "https://www.youtube.com/watch?v=xyz789" }
  ])
  .to_string()
}

/// An app wired to scripted content for both locales.
struct Harness {
  app: App,
  transport: Arc<ScriptedTransport>,
  store: Arc<MemoryStore>,
  doc: Arc<Mutex<MemoryDocument>>,
}

impl Harness {
  fn new() -> Self {
    Self::with_config(ClientConfig::new(BASE), None)
  }

  fn with_config(config: ClientConfig, stored: Option<Locale>) -> Self {
    let transport = Arc::new(ScriptedTransport::new());
    for locale in Locale::ALL {
      transport.serve(&url(locale, Category::PersonalInfo), &personal_info(locale));
      transport.serve(&url(locale, Category::Projects), &projects(locale));
      transport.serve(&url(locale, Category::VideoProjects), &video_projects(locale));
    }
    let store = Arc::new(MemoryStore::new(stored));
    let doc = Arc::new(Mutex::new(MemoryDocument::with_labels([
      ("nav_home".to_string(), "Trang Chủ".to_string()),
      ("nav_video_projects".to_string(), "Dự Án Video".to_string()),
      ("footer_name".to_string(), "Tên Nhà Thiết Kế".to_string()),
    ])));
    let app = App::new(config, transport.clone(), store.clone(), doc.clone());
    Self { app, transport, store, doc }
  }

  fn doc(&self) -> MutexGuard<'_, MemoryDocument> {
    self.doc.lock().unwrap()
  }

  fn region(&self, region: Region) -> String {
    self.doc().region(region).unwrap_or_default().to_string()
  }
}
