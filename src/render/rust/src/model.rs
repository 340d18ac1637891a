/* src/render/rust/src/model.rs */

use serde::{Deserialize, Deserializer, Serialize};

/// Personal info as fetched; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
  pub name: Option<String>,
  pub profile_picture_url: Option<String>,
  pub tagline: Option<String>,
  pub bio_short: Option<String>,
  pub bio_long: Option<String>,
  pub cta_button: Option<String>,
  pub about_title: Option<String>,
  pub skills_technical_title: Option<String>,
  pub skills_technical: Option<Vec<String>>,
  pub skills_software_title: Option<String>,
  pub skills_software: Option<Vec<String>>,
  pub experience_title: Option<String>,
  pub work_experience: Option<Vec<WorkExperience>>,
  pub contact_title: Option<String>,
  pub contact_message: Option<String>,
  pub contact_email_label: Option<String>,
  pub contact_email: Option<String>,
  pub contact_phone_label: Option<String>,
  pub phone_number: Option<String>,
  pub social_links: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
  pub job_title: Option<String>,
  pub company_name: Option<String>,
  pub company_logo_url: Option<String>,
  pub duration: Option<String>,
  pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
  pub platform: Option<String>,
  pub url: Option<String>,
  pub icon_class: Option<String>,
}

/// How a social link's icon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef<'a> {
  Image(&'a str),
  Symbol(&'a str),
}

const DEFAULT_ICON_CLASS: &str = "fa fa-link";
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".svg", ".gif"];

impl SocialLink {
  pub fn icon(&self) -> IconRef<'_> {
    let raw = self.icon_class.as_deref().unwrap_or_default();
    let lower = raw.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
      IconRef::Image(raw)
    } else if raw.is_empty() {
      IconRef::Symbol(DEFAULT_ICON_CLASS)
    } else {
      IconRef::Symbol(raw)
    }
  }
}

/// A portfolio project card and its modal detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,
  pub project_name: Option<String>,
  pub project_category: Option<String>,
  pub project_summary: Option<String>,
  pub project_thumbnail_url: Option<String>,
  pub project_description_detailed: Option<String>,
  pub tools_used: Vec<String>,
  pub project_live_url: Option<String>,
  pub project_case_study_url: Option<String>,
  pub project_date: Option<String>,
  pub client_name: Option<String>,
  pub media: Vec<MediaItem>,
  // Per-record label overrides shown in the modal.
  pub project_category_label: Option<String>,
  pub project_date_label: Option<String>,
  pub client_label: Option<String>,
  pub tools_label: Option<String>,
  pub view_live_label: Option<String>,
  pub case_study_label: Option<String>,
  pub media_title: Option<String>,
}

/// A project whose main content is a third-party video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoProject {
  #[serde(flatten)]
  pub project: Project,
  pub video_url: String,
  pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
  Image {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    alt_text: Option<String>,
    #[serde(default)]
    caption: Option<String>,
  },
  Video {
    #[serde(default)]
    url: String,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    alt_text: Option<String>,
  },
  #[serde(other)]
  Unsupported,
}

/// Something that can appear in a project grid and be looked up by id.
pub trait Listed {
  fn id(&self) -> &str;
  fn project(&self) -> &Project;
}

impl Listed for Project {
  fn id(&self) -> &str {
    &self.id
  }

  fn project(&self) -> &Project {
    self
  }
}

impl Listed for VideoProject {
  fn id(&self) -> &str {
    &self.project.id
  }

  fn project(&self) -> &Project {
    &self.project
  }
}

/// A text field, or `fallback` when it is absent or empty.
pub fn text_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
  field.as_deref().filter(|s| !s.is_empty()).unwrap_or(fallback)
}

/// Linear lookup within one render batch.
pub fn find_by_id<'a, T: Listed>(items: &'a [T], id: &str) -> Option<&'a T> {
  items.iter().find(|item| item.id() == id)
}

// Content files use both `"id": "p1"` and `"id": 7`.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
  }

  Ok(match Option::<RawId>::deserialize(deserializer)? {
    Some(RawId::Text(s)) => s,
    Some(RawId::Int(n)) => n.to_string(),
    Some(RawId::Float(f)) => f.to_string(),
    None => String::new(),
  })
}
