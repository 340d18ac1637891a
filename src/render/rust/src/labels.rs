/* src/render/rust/src/labels.rs */

use std::collections::BTreeMap;

use crate::locale::Locale;

// Secondary-locale overrides for chrome labels. Primary text is whatever the
// document shipped with, captured once before the first switch.
const SECONDARY_LABELS: &[(&str, &str)] = &[
  ("nav_home", "Home"),
  ("nav_about", "About"),
  ("nav_projects", "Projects"),
  ("nav_video_projects", "Video Projects"),
  ("nav_contact", "Contact"),
  ("projects_title", "My Projects"),
  ("video_projects_title", "My Video Projects"),
  ("footer_name", "Designer Name"),
];

pub fn secondary_label(key: &str) -> Option<&'static str> {
  SECONDARY_LABELS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Chrome label texts keyed by `data-lang` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
  originals: BTreeMap<String, String>,
}

impl LabelTable {
  /// Capture the document's original (primary-locale) label texts.
  pub fn capture<I, K, V>(originals: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
  {
    let originals =
      originals.into_iter().map(|(k, v)| (k.into(), v.as_ref().trim().to_string())).collect();
    Self { originals }
  }

  /// Resolve every captured key for `locale`. Keys without a secondary
  /// override keep their original text.
  pub fn translate(&self, locale: Locale) -> Vec<(&str, &str)> {
    self
      .originals
      .iter()
      .map(|(key, original)| {
        let text = match locale {
          Locale::Primary => original.as_str(),
          Locale::Secondary => secondary_label(key).unwrap_or(original.as_str()),
        };
        (key.as_str(), text)
      })
      .collect()
  }

  /// Footer fallback when personal info carries no name.
  pub fn footer_name(&self, locale: Locale) -> &str {
    match locale {
      Locale::Secondary => secondary_label("footer_name").unwrap_or_default(),
      Locale::Primary => self
        .originals
        .get("footer_name")
        .map(String::as_str)
        .or_else(|| secondary_label("footer_name"))
        .unwrap_or_default(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.originals.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table() -> LabelTable {
    LabelTable::capture([
      ("nav_home", " Trang Chủ "),
      ("projects_title", "Dự Án Của Tôi"),
      ("custom_key", "Chỉ tiếng Việt"),
    ])
  }

  #[test]
  fn primary_keeps_originals_trimmed() {
    let t = table();
    let labels = t.translate(Locale::Primary);
    assert!(labels.contains(&("nav_home", "Trang Chủ")));
  }

  #[test]
  fn secondary_overrides_known_keys() {
    let t = table();
    let labels = t.translate(Locale::Secondary);
    assert!(labels.contains(&("nav_home", "Home")));
    assert!(labels.contains(&("projects_title", "My Projects")));
  }

  #[test]
  fn secondary_falls_back_to_original_for_unknown_key() {
    let t = table();
    let labels = t.translate(Locale::Secondary);
    assert!(labels.contains(&("custom_key", "Chỉ tiếng Việt")));
  }

  #[test]
  fn footer_name_fallbacks() {
    let t = LabelTable::capture([("footer_name", "Tên Nhà Thiết Kế")]);
    assert_eq!(t.footer_name(Locale::Primary), "Tên Nhà Thiết Kế");
    assert_eq!(t.footer_name(Locale::Secondary), "Designer Name");
    assert_eq!(LabelTable::default().footer_name(Locale::Primary), "Designer Name");
  }
}
