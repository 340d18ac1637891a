/* src/render/rust/src/modal.rs */

use std::fmt::Write;

use crate::escape::escape_html;
use crate::locale::Locale;
use crate::messages::{Msg, PLACEHOLDER_IMAGE};
use crate::model::{MediaItem, Project, VideoProject, text_or};
use crate::video::embed_url;

const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// What the modal is showing.
#[derive(Debug, Clone, Copy)]
pub enum ModalSubject<'a> {
  Project(&'a Project),
  Video(&'a VideoProject),
}

impl ModalSubject<'_> {
  fn project(&self) -> &Project {
    match self {
      Self::Project(p) => p,
      Self::Video(v) => &v.project,
    }
  }
}

/// A video player that starts as a placeholder and is swapped in later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSlot {
  pub slot: usize,
  pub embed_url: String,
  pub source_url: String,
  pub title: String,
}

impl EmbedSlot {
  pub fn placeholder_id(&self) -> String {
    format!("video-placeholder-{}", self.slot)
  }

  pub fn iframe_id(&self) -> String {
    format!("video-iframe-{}", self.slot)
  }

  pub fn error_id(&self) -> String {
    format!("video-error-{}", self.slot)
  }

  pub fn link_id(&self) -> String {
    format!("video-link-{}", self.slot)
  }

  /// The live player that replaces the placeholder.
  pub fn player_html(&self) -> String {
    format!(
      r#"<iframe id="{}" src="{}" title="{}" allow="{IFRAME_ALLOW}" allowfullscreen loading="lazy" frameborder="0"></iframe>"#,
      self.iframe_id(),
      escape_html(&self.embed_url),
      escape_html(&self.title),
    )
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
  pub html: String,
  pub embeds: Vec<EmbedSlot>,
}

struct EmbedText {
  blocked: Msg,
  link: Msg,
  aria: Msg,
}

fn push_embed(
  out: &mut String,
  embeds: &mut Vec<EmbedSlot>,
  source_url: &str,
  title: &str,
  caption: &str,
  text: &EmbedText,
  locale: Locale,
) {
  let slot = EmbedSlot {
    slot: embeds.len(),
    embed_url: embed_url(source_url),
    source_url: source_url.to_string(),
    title: title.to_string(),
  };
  let _ = write!(
    out,
    concat!(
      r#"<div class="media-item" id="video-container-{n}">"#,
      r#"<div class="video-placeholder" id="{placeholder}"><span>{loading}</span></div>"#,
      r#"<p class="video-error" id="{error}" hidden>{blocked}</p>"#,
      r#"<a href="{href}" target="_blank" rel="noopener" class="cta-button" id="{link}" hidden aria-label="{aria}">{view}</a>"#,
      "<p>{caption}</p>",
      "</div>"
    ),
    n = slot.slot,
    placeholder = slot.placeholder_id(),
    loading = Msg::VideoLoading.text(locale),
    error = slot.error_id(),
    blocked = text.blocked.text(locale),
    href = escape_html(source_url),
    link = slot.link_id(),
    aria = text.aria.text(locale),
    view = text.link.text(locale),
    caption = escape_html(caption),
  );
  embeds.push(slot);
}

fn render_media(subject: ModalSubject<'_>, locale: Locale) -> (String, Vec<EmbedSlot>) {
  let mut out = String::from(r#"<div class="media-gallery">"#);
  let mut embeds = Vec::new();
  let project = subject.project();

  if let ModalSubject::Video(video) = subject
    && !video.video_url.is_empty()
  {
    let text = EmbedText { blocked: Msg::VideoBlocked, link: Msg::ViewOnYouTube, aria: Msg::ViewOnYouTubeAria };
    push_embed(
      &mut out,
      &mut embeds,
      &video.video_url,
      text_or(&project.project_name, "Video"),
      video.caption.as_deref().unwrap_or_default(),
      &text,
      locale,
    );
  } else {
    let image_count =
      project.media.iter().filter(|item| matches!(item, MediaItem::Image { .. })).count();
    let size_class = if image_count > 1 { "media-image-multiple" } else { "media-image-single" };

    for item in &project.media {
      match item {
        MediaItem::Image { url, alt_text, caption } => {
          let _ = write!(
            out,
            r#"<div class="media-item"><img class="zoomable-image {size_class}" src="{}" alt="{}" loading="lazy" onerror="this.src='{PLACEHOLDER_IMAGE}'"><p class="media-caption">{}</p></div>"#,
            escape_html(url.as_deref().filter(|u| !u.is_empty()).unwrap_or(PLACEHOLDER_IMAGE)),
            escape_html(alt_text.as_deref().unwrap_or("Media")),
            escape_html(caption.as_deref().unwrap_or_default()),
          );
        }
        MediaItem::Video { url, caption, alt_text } => {
          let text = EmbedText { blocked: Msg::MediaVideoBlocked, link: Msg::ViewVideo, aria: Msg::ViewVideo };
          push_embed(
            &mut out,
            &mut embeds,
            url,
            alt_text.as_deref().unwrap_or("Video"),
            caption.as_deref().unwrap_or_default(),
            &text,
            locale,
          );
        }
        MediaItem::Unsupported => {}
      }
    }
  }

  out.push_str("</div>");
  (out, embeds)
}

fn label<'a>(custom: &'a Option<String>, fallback: Msg, locale: Locale) -> &'a str {
  text_or(custom, fallback.text(locale))
}

/// Detail view for one project or video project.
pub fn render_modal(subject: ModalSubject<'_>, locale: Locale) -> ModalView {
  let p = subject.project();
  let mut html = String::new();

  let _ = write!(
    html,
    "<h2>{}</h2>",
    escape_html(text_or(&p.project_name, Msg::ProjectName.text(locale)))
  );

  html.push_str(r#"<div class="project-meta">"#);
  let _ = write!(
    html,
    "<span><strong>{}</strong> {}</span><br><span><strong>{}</strong> {}</span>",
    escape_html(label(&p.project_category_label, Msg::CategoryLabel, locale)),
    escape_html(text_or(&p.project_category, Msg::ProjectCategory.text(locale))),
    escape_html(label(&p.project_date_label, Msg::DateLabel, locale)),
    escape_html(p.project_date.as_deref().unwrap_or_default()),
  );
  if let Some(client) = p.client_name.as_deref().filter(|c| !c.is_empty()) {
    let _ = write!(
      html,
      "<span><strong>{}</strong> {}</span>",
      escape_html(label(&p.client_label, Msg::ClientLabel, locale)),
      escape_html(client),
    );
  }
  html.push_str("</div>");

  let _ = write!(
    html,
    r#"<div class="description-detailed">{}</div>"#,
    escape_html(text_or(&p.project_description_detailed, Msg::DetailedDescription.text(locale))),
  );

  if !p.tools_used.is_empty() {
    let tools: Vec<String> = p.tools_used.iter().map(|t| escape_html(t.as_str())).collect();
    let _ = write!(
      html,
      "<p><strong>{}</strong> {}</p>",
      escape_html(label(&p.tools_label, Msg::ToolsLabel, locale)),
      tools.join(", "),
    );
  }

  let links = [
    (&p.project_live_url, &p.view_live_label, Msg::ViewLive, Msg::ViewLiveAria),
    (&p.project_case_study_url, &p.case_study_label, Msg::CaseStudy, Msg::CaseStudyAria),
  ];
  for (url, custom, fallback, aria) in links {
    if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
      let _ = write!(
        html,
        r#"<p><a href="{}" target="_blank" rel="noopener" class="cta-button" aria-label="{}">{}</a></p>"#,
        escape_html(url),
        aria.text(locale),
        escape_html(label(custom, fallback, locale)),
      );
    }
  }

  let _ = write!(
    html,
    "<h3>{}</h3>",
    escape_html(label(&p.media_title, Msg::MediaTitle, locale))
  );

  let (media, embeds) = render_media(subject, locale);
  html.push_str(&media);
  ModalView { html, embeds }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn project(value: serde_json::Value) -> Project {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn metadata_and_optional_rows() {
    let p = project(json!({
      "id": "p1",
      "project_name": "Brand",
      "project_category": "Identity",
      "project_date": "2024",
      "tools_used": ["Figma", "<Illustrator>"],
      "project_live_url": "https://example.com"
    }));
    let view = render_modal(ModalSubject::Project(&p), Locale::Secondary);
    assert!(view.html.contains("<h2>Brand</h2>"));
    assert!(view.html.contains("<strong>Category:</strong> Identity"));
    assert!(view.html.contains("<strong>Date:</strong> 2024"));
    assert!(!view.html.contains("Client:"));
    assert!(view.html.contains("Figma, &lt;Illustrator&gt;"));
    assert!(view.html.contains(">View Live</a>"));
    assert!(!view.html.contains("Case Study"));
  }

  #[test]
  fn label_overrides_win() {
    let p = project(json!({"id": "p1", "client_name": "Acme", "client_label": "Customer:"}));
    let view = render_modal(ModalSubject::Project(&p), Locale::Secondary);
    assert!(view.html.contains("<strong>Customer:</strong> Acme"));
  }

  #[test]
  fn empty_heading_fields_fall_back() {
    let p = project(json!({
      "id": "p1",
      "project_name": "",
      "project_category": "",
      "project_description_detailed": "",
      "project_category_label": ""
    }));
    let view = render_modal(ModalSubject::Project(&p), Locale::Secondary);
    assert!(view.html.starts_with("<h2>Project Name</h2>"));
    assert!(view.html.contains("<strong>Category:</strong> Category</span>"));
    assert!(view.html.contains(r#"<div class="description-detailed">Detailed description</div>"#));
  }

  #[test]
  fn images_size_by_count_and_videos_become_slots() {
    let p = project(json!({
      "id": "p1",
      "media": [
        {"type": "image", "url": "a.jpg", "caption": "one"},
        {"type": "image", "url": "b.jpg"},
        {"type": "video", "url": "https://vimeo.com/42", "caption": "clip"}
      ]
    }));
    let view = render_modal(ModalSubject::Project(&p), Locale::Primary);
    assert_eq!(view.html.matches("media-image-multiple").count(), 2);
    assert_eq!(view.embeds.len(), 1);
    assert_eq!(view.embeds[0].embed_url, "https://player.vimeo.com/video/42");
    assert!(view.html.contains(r#"id="video-placeholder-0""#));
    assert!(view.html.contains("Đang tải video..."));
    assert!(view.html.contains(r#"<p class="video-error" id="video-error-0" hidden>"#));
  }

  #[test]
  fn single_image_uses_single_class() {
    let p = project(json!({"id": "p1", "media": [{"type": "image"}]}));
    let view = render_modal(ModalSubject::Project(&p), Locale::Primary);
    assert!(view.html.contains("media-image-single"));
    assert!(view.html.contains(&format!(r#"src="{PLACEHOLDER_IMAGE}""#)));
  }

  #[test]
  fn video_project_embeds_main_video_only() {
    let v: VideoProject = serde_json::from_value(json!({
      "id": "v1",
      "project_name": "Reel",
      "video_url": "https://www.youtube.com/watch?v=xyz",
      "media": [{"type": "image", "url": "ignored.jpg"}]
    }))
    .unwrap();
    let view = render_modal(ModalSubject::Video(&v), Locale::Secondary);
    assert_eq!(view.embeds.len(), 1);
    assert_eq!(view.embeds[0].embed_url, "https://www.youtube.com/embed/xyz?rel=0&modestbranding=1");
    assert!(!view.html.contains("ignored.jpg"));
    assert!(view.html.contains("View on YouTube"));
  }

  #[test]
  fn player_markup_is_escaped() {
    let slot = EmbedSlot {
      slot: 3,
      embed_url: "https://e.com/?a=1&b=2".into(),
      source_url: String::new(),
      title: "\"t\"".into(),
    };
    let html = slot.player_html();
    assert!(html.starts_with(r#"<iframe id="video-iframe-3" src="https://e.com/?a=1&amp;b=2""#));
    assert!(html.contains(r#"title="&quot;t&quot;""#));
  }
}
