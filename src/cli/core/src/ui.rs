/* src/cli/core/src/ui.rs */

//! Terminal output for the `folio` commands. All stdout writes go through here.
#![allow(clippy::print_stdout)]

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn marked(color: &str, mark: char, msg: &str) -> String {
  format!("  {color}{mark}{RESET} {msg}")
}

pub fn ok(msg: &str) {
  println!("{}", marked(GREEN, '\u{2713}', msg));
}

pub fn fail(msg: &str) {
  println!("{}", marked(RED, '\u{2717}', msg));
}

pub fn warn(msg: &str) {
  println!("{}", marked(YELLOW, '!', msg));
}

pub fn arrow(msg: &str) {
  println!("{}", marked(GREEN, '\u{2192}', msg));
}

/// Secondary line under a status mark, such as a digest or an error cause.
pub fn detail(msg: &str) {
  println!("        {DIM}{msg}{RESET}");
}

/// Bare machine-readable output with no decoration.
pub fn plain(msg: &str) {
  println!("{msg}");
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}Folio{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

pub fn format_size(bytes: u64) -> String {
  if bytes >= 1_000_000 {
    format!("{:.1} MB", bytes as f64 / 1_000_000.0)
  } else if bytes >= 1_000 {
    format!("{:.1} kB", bytes as f64 / 1_000.0)
  } else {
    format!("{bytes} B")
  }
}

pub fn blank() {
  println!();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sizes() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2_048), "2.0 kB");
    assert_eq!(format_size(3_500_000), "3.5 MB");
  }

  #[test]
  fn marks_are_colored_and_reset() {
    assert_eq!(marked(GREEN, '\u{2713}', "vi/projects"), "  \x1b[32m\u{2713}\x1b[0m vi/projects");
    assert_eq!(marked(YELLOW, '!', "x"), "  \x1b[33m!\x1b[0m x");
  }
}
