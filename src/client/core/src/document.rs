/* src/client/core/src/document.rs */

use folio_render::html;
use folio_render::{PageSnapshot, Region};

/// The page the runtime renders into.
///
/// Regions are addressed by name; individual elements inside rendered
/// markup are addressed by their `id`. Element operations return `false`
/// when no such element exists.
pub trait Document: Send {
  fn set_html(&mut self, region: Region, html: &str);
  fn set_text(&mut self, region: Region, text: &str);
  fn set_hidden(&mut self, region: Region, hidden: bool);
  fn set_lang(&mut self, code: &str);
  fn set_title(&mut self, title: &str);
  /// Every `data-lang` key with its current text.
  fn labels(&self) -> Vec<(String, String)>;
  fn set_label(&mut self, key: &str, text: &str);
  /// Add a `<link rel="preload">` hint unless one exists for `url`.
  fn add_preload(&mut self, url: &str);
  fn set_attribute(&mut self, element_id: &str, name: &str, value: &str) -> bool;
  fn set_element_hidden(&mut self, element_id: &str, hidden: bool) -> bool;
  fn replace_element(&mut self, element_id: &str, markup: &str) -> bool;
}

/// Document held as region markup strings.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
  page: PageSnapshot,
}

impl MemoryDocument {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seed the label texts, usually from [`folio_render::extract_labels`].
  pub fn with_labels<I>(labels: I) -> Self
  where
    I: IntoIterator<Item = (String, String)>,
  {
    Self { page: PageSnapshot { labels: labels.into_iter().collect(), ..PageSnapshot::default() } }
  }

  pub fn region(&self, region: Region) -> Option<&str> {
    self.page.regions.get(&region).map(String::as_str)
  }

  pub fn is_hidden(&self, region: Region) -> bool {
    self.page.hidden.contains(&region)
  }

  pub fn label(&self, key: &str) -> Option<&str> {
    self.page.labels.get(key).map(String::as_str)
  }

  pub fn lang(&self) -> &str {
    &self.page.lang
  }

  pub fn title(&self) -> &str {
    &self.page.title
  }

  pub fn preloads(&self) -> &[String] {
    &self.page.preloads
  }

  /// Attribute of an element in any rendered region.
  pub fn element_attribute(&self, element_id: &str, name: &str) -> Option<String> {
    self.page.regions.values().find_map(|markup| html::attribute(markup, element_id, name))
  }

  pub fn has_element(&self, element_id: &str) -> bool {
    self.page.regions.values().any(|markup| html::find_open_tag(markup, "id", element_id).is_some())
  }

  pub fn element_hidden(&self, element_id: &str) -> Option<bool> {
    self.page.regions.values().find_map(|markup| {
      let tag = &markup[html::find_open_tag(markup, "id", element_id)?];
      Some(tag.contains(" hidden"))
    })
  }

  pub fn snapshot(&self) -> PageSnapshot {
    self.page.clone()
  }

  /// Apply `edit` to the first region containing the element.
  fn edit_element(&mut self, edit: impl Fn(&str) -> Option<String>) -> bool {
    for markup in self.page.regions.values_mut() {
      if let Some(updated) = edit(markup) {
        *markup = updated;
        return true;
      }
    }
    false
  }
}

impl Document for MemoryDocument {
  fn set_html(&mut self, region: Region, markup: &str) {
    self.page.regions.insert(region, markup.to_string());
  }

  fn set_text(&mut self, region: Region, text: &str) {
    self.page.regions.insert(region, text.to_string());
  }

  fn set_hidden(&mut self, region: Region, hidden: bool) {
    if hidden {
      self.page.hidden.insert(region);
    } else {
      self.page.hidden.remove(&region);
    }
  }

  fn set_lang(&mut self, code: &str) {
    self.page.lang = code.to_string();
  }

  fn set_title(&mut self, title: &str) {
    self.page.title = title.to_string();
  }

  fn labels(&self) -> Vec<(String, String)> {
    self.page.labels.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
  }

  fn set_label(&mut self, key: &str, text: &str) {
    if let Some(slot) = self.page.labels.get_mut(key) {
      *slot = text.to_string();
    }
  }

  fn add_preload(&mut self, url: &str) {
    if !self.page.preloads.iter().any(|u| u == url) {
      self.page.preloads.push(url.to_string());
    }
  }

  fn set_attribute(&mut self, element_id: &str, name: &str, value: &str) -> bool {
    self.edit_element(|markup| html::set_attribute(markup, element_id, name, value))
  }

  fn set_element_hidden(&mut self, element_id: &str, hidden: bool) -> bool {
    self.edit_element(|markup| html::set_boolean_attribute(markup, element_id, "hidden", hidden))
  }

  fn replace_element(&mut self, element_id: &str, markup: &str) -> bool {
    self.edit_element(|region| html::replace_element(region, element_id, markup))
  }
}
