/* src/client/core/src/modal.rs */

use std::collections::BTreeSet;
use std::sync::Arc;

use folio_render::{
  EmbedSlot, ModalSubject, Project, Region, VideoProject, find_by_id, render_modal,
};
use log::{error, warn};
use tokio::task::JoinHandle;

use crate::app::App;
use crate::category::Category;
use crate::error::ModalError;

/// The list a card was rendered from; the modal looks its project up here.
#[derive(Debug, Clone)]
pub enum Collection {
  Projects(Arc<Vec<Project>>),
  Videos(Arc<Vec<VideoProject>>),
}

impl Collection {
  pub fn category(&self) -> Category {
    match self {
      Self::Projects(_) => Category::Projects,
      Self::Videos(_) => Category::VideoProjects,
    }
  }

  pub fn find(&self, project_id: &str) -> Option<ModalSubject<'_>> {
    match self {
      Self::Projects(items) => find_by_id(items.as_slice(), project_id).map(ModalSubject::Project),
      Self::Videos(items) => find_by_id(items.as_slice(), project_id).map(ModalSubject::Video),
    }
  }
}

#[derive(Debug, Default)]
pub(crate) struct ModalState {
  open: bool,
  /// Bumped on every open and close; a substitution only applies to its own.
  generation: u64,
  embeds: Vec<EmbedSlot>,
  substituted: BTreeSet<usize>,
  pending: Option<JoinHandle<()>>,
}

impl ModalState {
  fn cancel_pending(&mut self) {
    if let Some(handle) = self.pending.take() {
      handle.abort();
    }
  }
}

impl App {
  /// Show the detail view for `project_id`. Video players appear as
  /// placeholders and are swapped for iframes after the embed delay.
  pub fn open_modal(&self, project_id: &str, collection: &Collection) -> Result<(), ModalError> {
    let Some(subject) = collection.find(project_id) else {
      let err = ModalError::NotFound { project_id: project_id.to_string() };
      error!("{err}");
      return Err(err);
    };
    let view = render_modal(subject, self.locale());

    let generation = {
      let mut state = self.state();
      let modal = &mut state.modal;
      modal.cancel_pending();
      modal.generation += 1;
      modal.open = true;
      modal.embeds = view.embeds.clone();
      modal.substituted.clear();
      let mut doc = self.document();
      doc.set_html(Region::ModalContent, &view.html);
      doc.set_hidden(Region::Modal, false);
      modal.generation
    };

    if !view.embeds.is_empty() {
      let app = self.clone();
      let delay = self.config().embed_delay;
      let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        app.substitute_embeds(generation);
      });
      let mut state = self.state();
      if state.modal.generation == generation {
        state.modal.pending = Some(handle);
      } else {
        handle.abort();
      }
    }
    Ok(())
  }

  fn substitute_embeds(&self, generation: u64) {
    let mut state = self.state();
    let modal = &mut state.modal;
    if !modal.open || modal.generation != generation {
      return;
    }
    let mut doc = self.document();
    for embed in &modal.embeds {
      if doc.replace_element(&embed.placeholder_id(), &embed.player_html()) {
        modal.substituted.insert(embed.slot);
      }
    }
    modal.pending = None;
  }

  /// A player failed to load: hide it and show the direct link instead.
  /// Returns `false` when the slot has no live player.
  pub fn embed_failed(&self, slot: usize) -> bool {
    let state = self.state();
    let modal = &state.modal;
    if !modal.open || !modal.substituted.contains(&slot) {
      return false;
    }
    let Some(embed) = modal.embeds.iter().find(|e| e.slot == slot) else {
      return false;
    };
    warn!("{}", ModalError::EmbedLoad { slot, source_url: embed.source_url.clone() });
    let mut doc = self.document();
    doc.set_element_hidden(&embed.iframe_id(), true);
    doc.set_element_hidden(&embed.error_id(), false);
    doc.set_element_hidden(&embed.link_id(), false);
    true
  }

  /// Hide the modal, cancel pending substitutions and stop every player.
  pub fn close_modal(&self) {
    let mut state = self.state();
    let modal = &mut state.modal;
    modal.cancel_pending();
    modal.generation += 1;
    modal.open = false;
    let mut doc = self.document();
    for slot in &modal.substituted {
      if let Some(embed) = modal.embeds.iter().find(|e| e.slot == *slot) {
        doc.set_attribute(&embed.iframe_id(), "src", "");
      }
    }
    doc.set_hidden(Region::Modal, true);
    modal.substituted.clear();
    modal.embeds.clear();
  }

  pub fn modal_is_open(&self) -> bool {
    self.state().modal.open
  }
}
