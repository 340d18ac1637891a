/* src/render/rust/src/region.rs */

use std::fmt;

/// Named mount points of the site document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
  Hero,
  About,
  Contact,
  FooterName,
  ProjectGrid,
  VideoProjectGrid,
  VideoSection,
  VideoNavItem,
  Modal,
  ModalContent,
}

impl Region {
  pub const ALL: [Region; 10] = [
    Region::Hero,
    Region::About,
    Region::Contact,
    Region::FooterName,
    Region::ProjectGrid,
    Region::VideoProjectGrid,
    Region::VideoSection,
    Region::VideoNavItem,
    Region::Modal,
    Region::ModalContent,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Self::Hero => "hero",
      Self::About => "about",
      Self::Contact => "contact",
      Self::FooterName => "footer-name",
      Self::ProjectGrid => "project-grid",
      Self::VideoProjectGrid => "video-project-grid",
      Self::VideoSection => "video-projects",
      Self::VideoNavItem => "nav-video-projects",
      Self::Modal => "project-modal",
      Self::ModalContent => "modal-project-content",
    }
  }

  /// Regions whose content is plain text rather than markup.
  pub fn is_text(self) -> bool {
    matches!(self, Self::FooterName)
  }

  /// Content marker in a page template, e.g. `<!--folio:hero-->`.
  pub fn content_marker(self) -> String {
    format!("<!--folio:{}-->", self.name())
  }

  /// Visibility marker placed right before the tag it controls.
  pub fn toggle_marker(self) -> String {
    format!("<!--folio:toggle:{}-->", self.name())
  }
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
