/* src/render/rust/src/projects.rs */

use std::fmt::Write;

use crate::escape::escape_html;
use crate::locale::Locale;
use crate::messages::{Msg, PLACEHOLDER_IMAGE};
use crate::model::{Project, VideoProject, text_or};
use crate::video::video_thumbnail;

/// Element whose click opens the modal for `project_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBinding {
  pub element_id: String,
  pub project_id: String,
}

/// Image rendered with its real source withheld in `data-src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
  pub element_id: String,
  pub src: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridView {
  pub html: String,
  pub cards: Vec<CardBinding>,
  pub lazy_images: Vec<LazyImage>,
}

impl GridView {
  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }
}

fn thumbnail_tag(element_id: &str, src: &str, alt: &str, class: &str) -> String {
  format!(
    r#"<img id="{element_id}" src="{PLACEHOLDER_IMAGE}" data-src="{}" alt="{}" class="{class}" loading="lazy" onerror="this.src='{PLACEHOLDER_IMAGE}'">"#,
    escape_html(src),
    escape_html(alt),
  )
}

fn card_info(name: &str, category: &str, summary: &str) -> String {
  format!(
    r#"<div class="project-info"><h3>{}</h3><span class="project-category">{}</span><p class="project-summary">{}</p></div>"#,
    escape_html(name),
    escape_html(category),
    escape_html(summary),
  )
}

pub fn render_project_grid(projects: &[Project], locale: Locale) -> GridView {
  let mut view = GridView::default();
  for (index, project) in projects.iter().enumerate() {
    let card_id = format!("project-card-{index}");
    let thumb_id = format!("project-thumb-{index}");
    let src = project
      .project_thumbnail_url
      .as_deref()
      .filter(|u| !u.is_empty())
      .unwrap_or(PLACEHOLDER_IMAGE);

    let _ = write!(
      view.html,
      r#"<div class="project-card" id="{card_id}" data-project-id="{}">{}{}</div>"#,
      escape_html(&project.id),
      thumbnail_tag(
        &thumb_id,
        src,
        text_or(&project.project_name, "Project"),
        "project-thumbnail"
      ),
      card_info(
        text_or(&project.project_name, Msg::ProjectName.text(locale)),
        text_or(&project.project_category, Msg::ProjectCategory.text(locale)),
        text_or(&project.project_summary, Msg::ProjectSummary.text(locale)),
      ),
    );

    view.cards.push(CardBinding { element_id: card_id, project_id: project.id.clone() });
    view.lazy_images.push(LazyImage { element_id: thumb_id, src: src.to_string() });
  }
  view
}

pub fn render_video_grid(videos: &[VideoProject], locale: Locale) -> GridView {
  let mut view = GridView::default();
  for (index, video) in videos.iter().enumerate() {
    let project = &video.project;
    let card_id = format!("video-card-{index}");
    let thumb_id = format!("video-thumb-{index}");
    let play_id = format!("video-play-{index}");
    let src = video_thumbnail(project.project_thumbnail_url.as_deref(), &video.video_url);

    let _ = write!(
      view.html,
      concat!(
        r#"<div class="video-project-card" id="{card_id}" data-project-id="{id}">"#,
        r#"<div class="video-thumbnail-wrapper">{thumb}"#,
        r#"<button class="play-button" id="{play_id}" data-project-id="{id}" aria-label="{play}">"#,
        r##"<svg width="50" height="50" viewBox="0 0 24 24"><path d="M8 5v14l11-7z" fill="#fff"/></svg>"##,
        "</button></div>{info}</div>"
      ),
      card_id = card_id,
      id = escape_html(&project.id),
      thumb = thumbnail_tag(
        &thumb_id,
        &src,
        text_or(&project.project_name, "Video Project"),
        "video-project-thumbnail"
      ),
      play_id = play_id,
      play = Msg::PlayVideo.text(locale),
      info = card_info(
        text_or(&project.project_name, Msg::VideoProjectName.text(locale)),
        text_or(&project.project_category, Msg::VideoCategory.text(locale)),
        text_or(&project.project_summary, Msg::VideoSummary.text(locale)),
      ),
    );

    view.cards.push(CardBinding { element_id: play_id, project_id: project.id.clone() });
    view.lazy_images.push(LazyImage { element_id: thumb_id, src });
  }
  view
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::html::{inner_html, text_content};
  use serde_json::json;

  fn projects(value: serde_json::Value) -> Vec<Project> {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn empty_input_renders_empty_grid() {
    let view = render_project_grid(&[], Locale::Primary);
    assert!(view.is_empty());
    assert_eq!(view.html, "");
  }

  #[test]
  fn markup_in_name_renders_as_text() {
    let list = projects(json!([{"id": "p1", "project_name": "<b>X</b>"}]));
    let view = render_project_grid(&list, Locale::Secondary);
    assert!(!view.html.contains("<b>"));
    let title = inner_html(&view.html, "class", "project-info").unwrap();
    let h3 = text_content(title.split("</h3>").next().unwrap());
    assert_eq!(h3, "<b>X</b>");
  }

  #[test]
  fn missing_fields_use_localized_placeholders() {
    let list = projects(json!([{"id": "p1"}]));
    let vi = render_project_grid(&list, Locale::Primary);
    assert!(vi.html.contains("<h3>Tên Dự Án</h3>"));
    assert!(vi.html.contains(r#"<span class="project-category">Thể loại</span>"#));
    let en = render_project_grid(&list, Locale::Secondary);
    assert!(en.html.contains("<h3>Project Name</h3>"));
    assert!(en.html.contains(r#"<p class="project-summary">Project summary</p>"#));
  }

  #[test]
  fn empty_fields_use_localized_placeholders() {
    let list = projects(json!([
      {"id": "p1", "project_name": "", "project_category": "", "project_summary": ""}
    ]));
    let view = render_project_grid(&list, Locale::Secondary);
    assert!(view.html.contains("<h3>Project Name</h3>"));
    assert!(view.html.contains(r#"<span class="project-category">Category</span>"#));
    assert!(view.html.contains(r#"<p class="project-summary">Project summary</p>"#));
    assert!(view.html.contains(r#"alt="Project""#));

    let videos: Vec<VideoProject> =
      serde_json::from_value(json!([{"id": "v1", "project_name": "", "video_url": ""}])).unwrap();
    let view = render_video_grid(&videos, Locale::Secondary);
    assert!(view.html.contains("<h3>Video Project Name</h3>"));
  }

  #[test]
  fn thumbnails_are_lazy_and_fall_back() {
    let list = projects(json!([
      {"id": "p1", "project_thumbnail_url": "images/p1.jpg"},
      {"id": "p2"}
    ]));
    let view = render_project_grid(&list, Locale::Primary);
    assert_eq!(view.lazy_images.len(), 2);
    assert_eq!(view.lazy_images[0].src, "images/p1.jpg");
    assert_eq!(view.lazy_images[1].src, PLACEHOLDER_IMAGE);
    assert!(view.html.contains(r#"data-src="images/p1.jpg""#));
    assert_eq!(view.html.matches(r#"loading="lazy""#).count(), 2);
    assert_eq!(view.html.matches("onerror=").count(), 2);
  }

  #[test]
  fn cards_bind_their_ids() {
    let list = projects(json!([{"id": "a"}, {"id": "b"}]));
    let view = render_project_grid(&list, Locale::Primary);
    assert_eq!(
      view.cards,
      vec![
        CardBinding { element_id: "project-card-0".into(), project_id: "a".into() },
        CardBinding { element_id: "project-card-1".into(), project_id: "b".into() },
      ]
    );
  }

  #[test]
  fn video_cards_derive_thumbnail_and_bind_play_button() {
    let videos: Vec<VideoProject> = serde_json::from_value(json!([
      {"id": "v1", "video_url": "https://youtu.be/abc"},
      {"id": "v2", "video_url": "https://example.com/clip"}
    ]))
    .unwrap();
    let view = render_video_grid(&videos, Locale::Secondary);
    assert_eq!(view.lazy_images[0].src, "https://img.youtube.com/vi/abc/hqdefault.jpg");
    assert_eq!(view.lazy_images[1].src, PLACEHOLDER_IMAGE);
    assert_eq!(view.cards[0].element_id, "video-play-0");
    assert!(view.html.contains("<h3>Video Project Name</h3>"));
    assert!(view.html.contains(r#"aria-label="Play video""#));
  }

  #[test]
  fn video_card_keeps_explicit_thumbnail() {
    let videos: Vec<VideoProject> = serde_json::from_value(json!([
      {"id": "v1", "video_url": "https://vimeo.com/123", "project_thumbnail_url": "images/reel.jpg"}
    ]))
    .unwrap();
    let view = render_video_grid(&videos, Locale::Primary);
    assert_eq!(view.lazy_images[0].src, "images/reel.jpg");
  }
}
