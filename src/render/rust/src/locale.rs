/* src/render/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
  /// Source language of the site (Vietnamese).
  #[default]
  #[serde(rename = "vi")]
  Primary,
  /// Alternate language (English).
  #[serde(rename = "en")]
  Secondary,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::Primary, Locale::Secondary];

  pub fn code(self) -> &'static str {
    match self {
      Self::Primary => "vi",
      Self::Secondary => "en",
    }
  }

  pub fn from_code(code: &str) -> Option<Self> {
    match code.trim() {
      "vi" => Some(Self::Primary),
      "en" => Some(Self::Secondary),
      _ => None,
    }
  }

  /// Choose between the primary and secondary rendition of a string.
  pub fn pick<'a>(self, primary: &'a str, secondary: &'a str) -> &'a str {
    match self {
      Self::Primary => primary,
      Self::Secondary => secondary,
    }
  }

  pub fn other(self) -> Self {
    match self {
      Self::Primary => Self::Secondary,
      Self::Secondary => Self::Primary,
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown locale \"{}\" (expected \"vi\" or \"en\")", self.0)
  }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
  }
}
