/* src/render/rust/src/page.rs */

use std::collections::{BTreeMap, BTreeSet};

use crate::escape::{escape_html, unescape_html};
use crate::html::{insert_attribute_at_next_tag, inner_html, replace_inner};
use crate::region::Region;

/// Final state of a rendered document, ready to be written into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
  pub lang: String,
  pub title: String,
  pub regions: BTreeMap<Region, String>,
  pub hidden: BTreeSet<Region>,
  pub labels: BTreeMap<String, String>,
  pub preloads: Vec<String>,
}

/// Collect `data-lang` label keys and their original text from a template.
pub fn extract_labels(template: &str) -> Vec<(String, String)> {
  const ATTR: &str = r#" data-lang=""#;
  let mut labels = Vec::new();
  let mut from = 0;
  while let Some(rel) = template[from..].find(ATTR) {
    let start = from + rel + ATTR.len();
    let Some(len) = template[start..].find('"') else { break };
    let key = &template[start..start + len];
    if let Some(inner) = inner_html(template, "data-lang", key) {
      labels.push((key.to_string(), unescape_html(inner.trim())));
    }
    from = start + len;
  }
  labels
}

/// Set `<html lang="...">`, replacing an existing value.
pub fn inject_html_lang(html: &str, locale: &str) -> String {
  let Some(start) = html.find("<html") else {
    return html.to_string();
  };
  let end = html[start..].find('>').map_or(html.len(), |p| start + p);
  let tag = &html[start..end];
  if let Some(attr) = tag.find(" lang=\"") {
    let value_start = start + attr + " lang=\"".len();
    let value_end = html[value_start..].find('"').map_or(end, |p| value_start + p);
    format!("{}{}{}", &html[..value_start], escape_html(locale), &html[value_end..])
  } else {
    html.replacen("<html", &format!("<html lang=\"{}\"", escape_html(locale)), 1)
  }
}

/// Replace the text of the first `<title>` element.
pub fn inject_title(html: &str, title: &str) -> String {
  let (Some(open), Some(close)) = (html.find("<title>"), html.find("</title>")) else {
    return html.to_string();
  };
  if close < open {
    return html.to_string();
  }
  let content_start = open + "<title>".len();
  format!("{}{}{}", &html[..content_start], escape_html(title), &html[close..])
}

/// Insert image preload hints before `</head>`.
pub fn inject_preloads(html: &str, urls: &[String]) -> String {
  if urls.is_empty() {
    return html.to_string();
  }
  let links: String = urls
    .iter()
    .map(|url| format!(r#"<link rel="preload" as="image" href="{}">"#, escape_html(url)))
    .collect();
  if let Some(pos) = html.find("</head>") {
    format!("{}{links}{}", &html[..pos], &html[pos..])
  } else {
    format!("{links}{html}")
  }
}

/// Write a snapshot into a page template.
///
/// Content regions replace `<!--folio:NAME-->` markers. Hidden regions add a
/// `hidden` attribute to the tag following `<!--folio:toggle:NAME-->`. Labels
/// replace the text of `data-lang` elements.
pub fn assemble_page(template: &str, page: &PageSnapshot) -> String {
  let mut html = template.to_string();

  for (region, content) in &page.regions {
    let rendered = if region.is_text() { escape_html(content) } else { content.clone() };
    html = html.replace(&region.content_marker(), &rendered);
  }

  for region in Region::ALL {
    let marker = region.toggle_marker();
    while let Some(pos) = html.find(&marker) {
      html.replace_range(pos..pos + marker.len(), "");
      if page.hidden.contains(&region) {
        html = insert_attribute_at_next_tag(&html, pos, "hidden");
      }
    }
  }

  for (key, text) in &page.labels {
    if let Some(updated) = replace_inner(&html, "data-lang", key, &escape_html(text)) {
      html = updated;
    }
  }

  if !page.lang.is_empty() {
    html = inject_html_lang(&html, &page.lang);
  }
  if !page.title.is_empty() {
    html = inject_title(&html, &page.title);
  }
  inject_preloads(&html, &page.preloads)
}
