/* src/client/core/src/category.rs */

use std::fmt;

use folio_render::Locale;

/// The three content documents published per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
  PersonalInfo,
  Projects,
  VideoProjects,
}

impl Category {
  pub const ALL: [Self; 3] = [Self::PersonalInfo, Self::Projects, Self::VideoProjects];

  pub fn stem(self) -> &'static str {
    match self {
      Self::PersonalInfo => "personal_info",
      Self::Projects => "projects",
      Self::VideoProjects => "video_projects",
    }
  }

  pub fn from_stem(stem: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.stem() == stem)
  }

  /// `<base>/<locale>/<stem>.json`
  pub fn url(self, base_url: &str, locale: Locale) -> String {
    format!("{}/{}/{}.json", base_url.trim_end_matches('/'), locale.code(), self.stem())
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.stem())
  }
}

/// Parse a digest table key of the form `vi/projects`.
pub fn parse_digest_key(key: &str) -> Option<(Locale, Category)> {
  let (locale, stem) = key.split_once('/')?;
  Some((Locale::from_code(locale)?, Category::from_stem(stem)?))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn urls_follow_locale_layout() {
    assert_eq!(Category::Projects.url("data", Locale::Primary), "data/vi/projects.json");
    assert_eq!(
      Category::VideoProjects.url("https://cdn.example.com/data/", Locale::Secondary),
      "https://cdn.example.com/data/en/video_projects.json"
    );
  }

  #[test]
  fn digest_keys() {
    assert_eq!(parse_digest_key("en/personal_info"), Some((Locale::Secondary, Category::PersonalInfo)));
    assert_eq!(parse_digest_key("fr/projects"), None);
    assert_eq!(parse_digest_key("vi/blog"), None);
    assert_eq!(parse_digest_key("projects"), None);
  }
}
