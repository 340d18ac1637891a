/* src/client/core/src/cache.rs */

use std::sync::Arc;

use folio_render::{Locale, PersonalInfo, Project, VideoProject};

/// One cached payload plus the locale it was fetched for.
#[derive(Debug)]
pub struct Slot<T> {
  entry: Option<(Locale, Arc<T>)>,
}

impl<T> Default for Slot<T> {
  fn default() -> Self {
    Self { entry: None }
  }
}

impl<T> Slot<T> {
  /// The cached payload, only if it was fetched for `locale`.
  pub fn get(&self, locale: Locale) -> Option<Arc<T>> {
    match &self.entry {
      Some((tag, payload)) if *tag == locale => Some(Arc::clone(payload)),
      _ => None,
    }
  }

  pub fn put(&mut self, locale: Locale, payload: Arc<T>) {
    self.entry = Some((locale, payload));
  }

  pub fn clear(&mut self) {
    self.entry = None;
  }

  /// Locale of the cached entry, valid or not.
  pub fn locale(&self) -> Option<Locale> {
    self.entry.as_ref().map(|(tag, _)| *tag)
  }

  pub fn is_empty(&self) -> bool {
    self.entry.is_none()
  }
}

/// Per-category cache. Entries fetched under another locale read as misses.
#[derive(Debug, Default)]
pub struct ContentCache {
  pub personal_info: Slot<PersonalInfo>,
  pub projects: Slot<Vec<Project>>,
  pub video_projects: Slot<Vec<VideoProject>>,
}

impl ContentCache {
  pub fn clear(&mut self) {
    self.personal_info.clear();
    self.projects.clear();
    self.video_projects.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.personal_info.is_empty() && self.projects.is_empty() && self.video_projects.is_empty()
  }
}
