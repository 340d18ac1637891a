/* src/render/rust/src/escape.rs */

/// Escape text for safe insertion into HTML content or a quoted attribute value.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// Reverse of [`escape_html`] for the five entities it produces.
/// Used to read back visible text from rendered fragments.
pub fn unescape_html(s: &str) -> String {
  s.replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#x27;", "'")
    .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
  }

  #[test]
  fn safe_string_untouched() {
    assert_eq!(escape_html("hello world"), "hello world");
    assert_eq!(escape_html(""), "");
  }

  #[test]
  fn script_tag_is_inert() {
    let out = escape_html("<script>alert(1)</script>");
    assert!(!out.contains('<'));
    assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
  }

  #[test]
  fn attribute_breakout_is_neutralized() {
    let out = escape_html(r#"x" onerror="alert(1)"#);
    assert!(!out.contains('"'));
  }

  #[test]
  fn unescape_reverses_escape() {
    let raw = r#"<b>"Tom & Jerry's"</b>"#;
    assert_eq!(unescape_html(&escape_html(raw)), raw);
  }

  #[test]
  fn unescape_does_not_double_decode() {
    assert_eq!(unescape_html("&amp;lt;"), "&lt;");
  }
}
