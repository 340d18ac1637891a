/* src/render/rust/src/video.rs */

use crate::messages::PLACEHOLDER_IMAGE;

const THUMBNAIL_HOST: &str = "img.youtube.com";

/// Extract a YouTube video id from `watch?v=`, `youtu.be/` and `/shorts/` links.
pub fn youtube_id(url: &str) -> Option<&str> {
  let rest = if let Some(pos) = url.find("youtube.com/watch?") {
    let query = &url[pos + "youtube.com/watch?".len()..];
    query.split('&').find_map(|pair| pair.strip_prefix("v="))?
  } else if let Some(pos) = url.find("youtu.be/") {
    &url[pos + "youtu.be/".len()..]
  } else if let Some(pos) = url.find("youtube.com/shorts/") {
    &url[pos + "youtube.com/shorts/".len()..]
  } else {
    return None;
  };

  let id = rest.split(['?', '&', '#', '/']).next().unwrap_or_default();
  if id.is_empty() { None } else { Some(id) }
}

fn vimeo_id(url: &str) -> Option<&str> {
  let pos = url.find("vimeo.com/")?;
  let rest = url[pos + "vimeo.com/".len()..].split(['?', '#']).next().unwrap_or_default();
  let id = rest.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
  if id.is_empty() { None } else { Some(id) }
}

pub fn youtube_thumbnail(id: &str) -> String {
  format!("https://{THUMBNAIL_HOST}/vi/{id}/hqdefault.jpg")
}

/// Thumbnail for a video card. A non-empty explicit thumbnail wins; otherwise
/// one is derived from the video link, falling back to the placeholder.
pub fn video_thumbnail(explicit: Option<&str>, video_url: &str) -> String {
  if let Some(url) = explicit.filter(|u| !u.is_empty()) {
    return url.to_string();
  }
  match youtube_id(video_url) {
    Some(id) => youtube_thumbnail(id),
    None => PLACEHOLDER_IMAGE.to_string(),
  }
}

/// Player URL for an embeddable link. Unknown hosts are embedded as given.
pub fn embed_url(url: &str) -> String {
  if let Some(id) = youtube_id(url) {
    format!("https://www.youtube.com/embed/{id}?rel=0&modestbranding=1")
  } else if let Some(id) = vimeo_id(url) {
    format!("https://player.vimeo.com/video/{id}")
  } else {
    url.to_string()
  }
}
