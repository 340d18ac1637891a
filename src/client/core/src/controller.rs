/* src/client/core/src/controller.rs */

use std::sync::Mutex;

use folio_render::Locale;
use log::{debug, error};
use tokio::task::JoinHandle;

use crate::app::{App, lock};

/// Await a detached switch. `None` means the task panicked or was cancelled.
async fn join_switch(switch: JoinHandle<bool>) -> Option<bool> {
  match switch.await {
    Ok(changed) => Some(changed),
    Err(e) => {
      error!("language switch task failed: {e}");
      None
    }
  }
}

/// Debounced entry point for language changes.
///
/// Each request cancels the one still waiting; only a request that survives
/// the quiescence window reaches [`App::switch_language`].
pub struct LanguageController {
  app: App,
  pending: Mutex<Option<JoinHandle<()>>>,
}

impl LanguageController {
  pub fn new(app: App) -> Self {
    Self { app, pending: Mutex::new(None) }
  }

  pub fn app(&self) -> &App {
    &self.app
  }

  pub async fn start(&self) {
    self.app.start().await;
  }

  pub fn set_language(&self, locale: Locale) {
    let app = self.app.clone();
    let window = app.config().debounce;
    let mut pending = lock(&self.pending);
    if let Some(previous) = pending.take() {
      debug!("superseding pending language switch");
      previous.abort();
    }
    *pending = Some(tokio::spawn(async move {
      tokio::time::sleep(window).await;
      // Past the window the switch runs to completion even if superseded.
      let switch = tokio::spawn(async move { app.switch_language(locale).await });
      join_switch(switch).await;
    }));
  }

  /// Wait for the scheduled switch, if any, to finish.
  pub async fn settle(&self) {
    let handle = lock(&self.pending).take();
    if let Some(handle) = handle {
      let _ = handle.await;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn join_switch_passes_the_outcome_through() {
    assert_eq!(join_switch(tokio::spawn(async { true })).await, Some(true));
    assert_eq!(join_switch(tokio::spawn(async { false })).await, Some(false));
  }

  #[tokio::test]
  async fn join_switch_reports_a_panicked_task() {
    let switch: JoinHandle<bool> = tokio::spawn(async { panic!("switch blew up") });
    assert_eq!(join_switch(switch).await, None);
  }
}
