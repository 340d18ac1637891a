/* src/render/rust/src/html.rs */

// Minimal tag-level editing over rendered fragments. Only handles markup this
// crate produces itself: double-quoted attributes, no `>` inside attribute values.

use std::ops::Range;

use crate::escape::escape_html;

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
  "wbr",
];

/// Byte range of the opening tag carrying `attr="value"`.
pub fn find_open_tag(html: &str, attr: &str, value: &str) -> Option<Range<usize>> {
  let needle = format!(r#" {attr}="{}""#, escape_html(value));
  let mut from = 0;
  while let Some(rel) = html[from..].find(&needle) {
    let hit = from + rel;
    let start = html[..hit].rfind('<')?;
    // The needle must sit inside the tag, not in text after it.
    if !html[start..hit].contains('>') {
      let end = hit + html[hit..].find('>')? + 1;
      return Some(start..end);
    }
    from = hit + needle.len();
  }
  None
}

fn tag_name(tag: &str) -> &str {
  let inner = tag.trim_start_matches('<');
  let end = inner.find(|c: char| c.is_whitespace() || c == '>' || c == '/').unwrap_or(inner.len());
  &inner[..end]
}

fn name_end(html: &str, tag_start: usize) -> usize {
  let bytes = html.as_bytes();
  let mut end = tag_start + 1;
  while end < bytes.len() && !matches!(bytes[end], b' ' | b'>' | b'/' | b'\n' | b'\t') {
    end += 1;
  }
  end
}

/// Byte range of an attribute (` name="..."` or bare ` name`) inside a tag.
fn attribute_span(tag: &str, name: &str) -> Option<Range<usize>> {
  let quoted = format!(r#" {name}=""#);
  if let Some(pos) = tag.find(&quoted) {
    let value_start = pos + quoted.len();
    let close = tag[value_start..].find('"')?;
    return Some(pos..value_start + close + 1);
  }
  let bare = format!(" {name}");
  let mut from = 0;
  while let Some(rel) = tag[from..].find(&bare) {
    let pos = from + rel;
    let after = tag.as_bytes().get(pos + bare.len()).copied();
    if matches!(after, Some(b' ' | b'>' | b'/')) {
      return Some(pos..pos + bare.len());
    }
    from = pos + bare.len();
  }
  None
}

/// Read an attribute value from the element selected by `id`.
pub fn attribute(html: &str, id: &str, name: &str) -> Option<String> {
  let tag = &html[find_open_tag(html, "id", id)?];
  let quoted = format!(r#" {name}=""#);
  let start = tag.find(&quoted)? + quoted.len();
  let end = start + tag[start..].find('"')?;
  Some(crate::escape::unescape_html(&tag[start..end]))
}

/// Set (or overwrite) an attribute on the element selected by `id`.
pub fn set_attribute(html: &str, id: &str, name: &str, value: &str) -> Option<String> {
  let tag_range = find_open_tag(html, "id", id)?;
  let rendered = format!(r#" {name}="{}""#, escape_html(value));
  Some(rewrite_attribute(html, tag_range, name, Some(&rendered)))
}

/// Add or remove a boolean attribute such as `hidden`.
pub fn set_boolean_attribute(html: &str, id: &str, name: &str, present: bool) -> Option<String> {
  let tag_range = find_open_tag(html, "id", id)?;
  let rendered = format!(" {name}");
  Some(rewrite_attribute(html, tag_range, name, present.then_some(rendered.as_str())))
}

/// Insert a boolean attribute right after the tag name of the first tag at or
/// after `from`. Used for marker-driven page assembly.
pub fn insert_attribute_at_next_tag(html: &str, from: usize, attr: &str) -> String {
  let Some(rel) = html[from..].find('<') else {
    return html.to_string();
  };
  let at = name_end(html, from + rel);
  format!("{} {attr}{}", &html[..at], &html[at..])
}

fn rewrite_attribute(html: &str, tag: Range<usize>, name: &str, rendered: Option<&str>) -> String {
  let tag_text = &html[tag.clone()];
  let mut out = String::with_capacity(html.len() + 16);
  out.push_str(&html[..tag.start]);
  match (attribute_span(tag_text, name), rendered) {
    (Some(span), Some(new)) => {
      out.push_str(&tag_text[..span.start]);
      out.push_str(new);
      out.push_str(&tag_text[span.end..]);
    }
    (Some(span), None) => {
      out.push_str(&tag_text[..span.start]);
      out.push_str(&tag_text[span.end..]);
    }
    (None, Some(new)) => {
      let at = name_end(tag_text, 0);
      out.push_str(&tag_text[..at]);
      out.push_str(new);
      out.push_str(&tag_text[at..]);
    }
    (None, None) => out.push_str(tag_text),
  }
  out.push_str(&html[tag.end..]);
  out
}

/// Byte range of the whole element (opening tag through matching close tag).
fn element_span(html: &str, open: Range<usize>) -> Option<Range<usize>> {
  let name = tag_name(&html[open.clone()]).to_ascii_lowercase();
  if VOID_ELEMENTS.contains(&name.as_str()) || html[open.clone()].ends_with("/>") {
    return Some(open);
  }
  let opener = format!("<{name}");
  let closer = format!("</{name}>");
  let mut depth = 1usize;
  let mut cursor = open.end;
  while depth > 0 {
    let next_close = cursor + html[cursor..].find(&closer)?;
    let next_open = html[cursor..next_close]
      .match_indices(&opener)
      .map(|(i, _)| cursor + i)
      .find(|&i| {
        matches!(html.as_bytes().get(i + opener.len()).copied(), Some(b' ' | b'>' | b'\n' | b'\t'))
      });
    match next_open {
      Some(i) => {
        depth += 1;
        cursor = i + opener.len();
      }
      None => {
        depth -= 1;
        cursor = next_close + closer.len();
      }
    }
  }
  Some(open.start..cursor)
}

/// Replace the whole element selected by `id` with `replacement`.
pub fn replace_element(html: &str, id: &str, replacement: &str) -> Option<String> {
  let open = find_open_tag(html, "id", id)?;
  let span = element_span(html, open)?;
  Some(format!("{}{replacement}{}", &html[..span.start], &html[span.end..]))
}

/// Replace the children of the element carrying `attr="value"`.
pub fn replace_inner(html: &str, attr: &str, value: &str, inner: &str) -> Option<String> {
  let open = find_open_tag(html, attr, value)?;
  let span = element_span(html, open.clone())?;
  if span == open {
    return None;
  }
  let name = tag_name(&html[open.clone()]);
  let close_start = span.end - (name.len() + 3);
  Some(format!("{}{inner}{}", &html[..open.end], &html[close_start..]))
}

/// Inner markup of the element carrying `attr="value"`.
pub fn inner_html<'a>(html: &'a str, attr: &str, value: &str) -> Option<&'a str> {
  let open = find_open_tag(html, attr, value)?;
  let span = element_span(html, open.clone())?;
  let name = tag_name(&html[open.clone()]);
  let close_start = span.end.checked_sub(name.len() + 3)?;
  html.get(open.end..close_start)
}

/// Visible text of a fragment: tags stripped, entities decoded.
pub fn text_content(html: &str) -> String {
  let mut out = String::with_capacity(html.len());
  let mut in_tag = false;
  for ch in html.chars() {
    match ch {
      '<' => in_tag = true,
      '>' if in_tag => in_tag = false,
      c if !in_tag => out.push(c),
      _ => {}
    }
  }
  crate::escape::unescape_html(&out)
}
