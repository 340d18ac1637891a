/* src/client/core/src/observer.rs */

use std::collections::BTreeMap;

/// Distance outside the viewport at which an element counts as visible.
pub const REVEAL_MARGIN_PX: f64 = 200.0;

pub type OnVisible = Box<dyn FnOnce() + Send>;

/// One-shot proximity observer.
///
/// Each observed element fires its callback at most once, the first time it
/// is reported within the margin, and is then forgotten.
pub struct ProximityObserver {
  margin: f64,
  pending: BTreeMap<String, OnVisible>,
}

impl Default for ProximityObserver {
  fn default() -> Self {
    Self::with_margin(REVEAL_MARGIN_PX)
  }
}

impl ProximityObserver {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_margin(margin: f64) -> Self {
    Self { margin, pending: BTreeMap::new() }
  }

  /// Watch `element_id`, replacing any earlier registration for it.
  pub fn observe(&mut self, element_id: impl Into<String>, on_visible: OnVisible) {
    self.pending.insert(element_id.into(), on_visible);
  }

  pub fn unobserve_where(&mut self, matches: impl Fn(&str) -> bool) {
    self.pending.retain(|id, _| !matches(id));
  }

  /// `distance` is how far the element sits outside the viewport, zero or
  /// negative when on screen. Returns the callback to run if it is now due.
  pub fn take_visible(&mut self, element_id: &str, distance: f64) -> Option<OnVisible> {
    if distance > self.margin {
      return None;
    }
    self.pending.remove(element_id)
  }

  /// Drain every pending callback, e.g. for static output with no viewport.
  pub fn take_all(&mut self) -> Vec<OnVisible> {
    std::mem::take(&mut self.pending).into_values().collect()
  }

  pub fn is_observing(&self, element_id: &str) -> bool {
    self.pending.contains_key(element_id)
  }

  pub fn len(&self) -> usize {
    self.pending.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pending.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::sync::atomic::{AtomicUsize, Ordering};

  use super::*;

  fn counter() -> (Arc<AtomicUsize>, OnVisible) {
    let hits = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&hits);
    let on_visible: OnVisible = Box::new(move || {
      inner.fetch_add(1, Ordering::SeqCst);
    });
    (hits, on_visible)
  }

  #[test]
  fn fires_once_within_margin() {
    let mut observer = ProximityObserver::new();
    let (hits, cb) = counter();
    observer.observe("project-thumb-0", cb);

    assert!(observer.take_visible("project-thumb-0", 450.0).is_none());
    assert!(observer.is_observing("project-thumb-0"));

    let due = observer.take_visible("project-thumb-0", 200.0).unwrap();
    due();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(observer.take_visible("project-thumb-0", 0.0).is_none());
    assert!(observer.is_empty());
  }

  #[test]
  fn unobserve_by_prefix() {
    let mut observer = ProximityObserver::new();
    observer.observe("project-thumb-0", counter().1);
    observer.observe("video-thumb-0", counter().1);
    observer.unobserve_where(|id| id.starts_with("project-"));
    assert_eq!(observer.len(), 1);
    assert!(observer.is_observing("video-thumb-0"));
  }

  #[test]
  fn take_all_drains() {
    let mut observer = ProximityObserver::new();
    let (hits, cb) = counter();
    observer.observe("a", cb);
    for due in observer.take_all() {
      due();
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(observer.is_empty());
  }
}
