/* src/client/core/src/app.rs */

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_render::{CardBinding, LabelTable, LazyImage, Locale, Msg};
use log::{debug, error, warn};
use tokio::task::JoinSet;

use crate::cache::ContentCache;
use crate::category::Category;
use crate::config::ClientConfig;
use crate::document::Document;
use crate::modal::{Collection, ModalState};
use crate::observer::ProximityObserver;
use crate::store::LocaleStore;
use crate::transport::Transport;

pub type SharedDocument = Arc<Mutex<dyn Document>>;

pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Identity of one load: results are applied only while both still match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
  pub locale: Locale,
  pub epoch: u64,
}

pub(crate) struct State {
  pub locale: Locale,
  pub epoch: u64,
  pub cache: ContentCache,
  /// Clickable element id -> (project id, collection it was rendered from).
  pub bindings: HashMap<String, (String, Collection)>,
  pub modal: ModalState,
}

impl State {
  pub fn ticket(&self) -> Ticket {
    Ticket { locale: self.locale, epoch: self.epoch }
  }
}

struct Inner {
  config: ClientConfig,
  transport: Arc<dyn Transport>,
  store: Arc<dyn LocaleStore>,
  document: SharedDocument,
  observer: Mutex<ProximityObserver>,
  labels: LabelTable,
  state: Mutex<State>,
}

/// Application context shared by the loaders, the language controller and
/// the modal presenter. Cloning is cheap.
#[derive(Clone)]
pub struct App {
  inner: Arc<Inner>,
}

impl App {
  /// Build the context, capturing the document's original label texts.
  pub fn new(
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    store: Arc<dyn LocaleStore>,
    document: SharedDocument,
  ) -> Self {
    let labels = LabelTable::capture(lock(&document).labels());
    let state = State {
      locale: config.default_locale,
      epoch: 0,
      cache: ContentCache::default(),
      bindings: HashMap::new(),
      modal: ModalState::default(),
    };
    Self {
      inner: Arc::new(Inner {
        config,
        transport,
        store,
        document,
        observer: Mutex::new(ProximityObserver::new()),
        labels,
        state: Mutex::new(state),
      }),
    }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.inner.config
  }

  pub fn transport(&self) -> &dyn Transport {
    self.inner.transport.as_ref()
  }

  pub fn labels(&self) -> &LabelTable {
    &self.inner.labels
  }

  pub(crate) fn state(&self) -> MutexGuard<'_, State> {
    lock(&self.inner.state)
  }

  pub(crate) fn document(&self) -> MutexGuard<'_, dyn Document + 'static> {
    lock(&self.inner.document)
  }

  pub fn locale(&self) -> Locale {
    self.state().locale
  }

  pub fn ticket(&self) -> Ticket {
    self.state().ticket()
  }

  /// Locale a category is cached under, if any.
  pub fn cached_locale(&self, category: Category) -> Option<Locale> {
    let state = self.state();
    match category {
      Category::PersonalInfo => state.cache.personal_info.locale(),
      Category::Projects => state.cache.projects.locale(),
      Category::VideoProjects => state.cache.video_projects.locale(),
    }
  }

  /// Restore the persisted locale, translate the chrome and load everything.
  pub async fn start(&self) {
    let locale = self.inner.store.load().unwrap_or(self.inner.config.default_locale);
    {
      let mut state = self.state();
      state.locale = locale;
      state.epoch += 1;
    }
    self.apply_chrome(locale);
    self.load_all().await;
  }

  /// Switch to `locale` immediately. Returns `false` when it is already active.
  pub async fn switch_language(&self, locale: Locale) -> bool {
    {
      let mut state = self.state();
      if state.locale == locale {
        debug!("language {locale} already active");
        return false;
      }
      state.locale = locale;
      state.epoch += 1;
      state.cache.clear();
    }
    if let Err(e) = self.inner.store.save(locale) {
      warn!("failed to persist language {locale}: {e}");
    }
    self.apply_chrome(locale);
    self.load_all().await;
    true
  }

  /// Document language, title and static labels.
  fn apply_chrome(&self, locale: Locale) {
    let mut doc = self.document();
    doc.set_lang(locale.code());
    doc.set_title(Msg::DocumentTitle.text(locale));
    for (key, text) in self.inner.labels.translate(locale) {
      doc.set_label(key, text);
    }
  }

  /// Run the three loaders concurrently. One failing never stops the others.
  pub async fn load_all(&self) {
    let mut join_set = JoinSet::new();
    for category in Category::ALL {
      let app = self.clone();
      join_set.spawn(async move { app.load(category).await });
    }
    while let Some(result) = join_set.join_next().await {
      if let Err(e) = result {
        error!("loader task failed: {e}");
      }
    }
  }

  pub(crate) fn bind_cards(&self, cards: Vec<CardBinding>, collection: Collection) {
    let category = collection.category();
    let mut state = self.state();
    state.bindings.retain(|_, (_, bound)| bound.category() != category);
    for card in cards {
      state.bindings.insert(card.element_id, (card.project_id, collection.clone()));
    }
  }

  pub(crate) fn unbind(&self, category: Category) {
    self.state().bindings.retain(|_, (_, bound)| bound.category() != category);
  }

  /// Register thumbnails whose real source is set on first approach.
  pub(crate) fn observe_lazy(&self, prefix: &str, images: Vec<LazyImage>) {
    let mut observer = lock(&self.inner.observer);
    observer.unobserve_where(|id| id.starts_with(prefix));
    for image in images {
      let document = Arc::clone(&self.inner.document);
      let LazyImage { element_id, src } = image;
      let id = element_id.clone();
      observer.observe(
        element_id,
        Box::new(move || {
          lock(&document).set_attribute(&id, "src", &src);
        }),
      );
    }
  }

  /// Report how far `element_id` is from the viewport.
  pub fn report_distance(&self, element_id: &str, distance: f64) -> bool {
    let due = lock(&self.inner.observer).take_visible(element_id, distance);
    match due {
      Some(reveal) => {
        reveal();
        true
      }
      None => false,
    }
  }

  /// Reveal every pending image, for output without a viewport.
  pub fn reveal_all(&self) {
    let due = lock(&self.inner.observer).take_all();
    for reveal in due {
      reveal();
    }
  }

  pub fn pending_reveals(&self) -> usize {
    lock(&self.inner.observer).len()
  }

  /// Dispatch a click. Returns `false` when nothing is bound to the element.
  pub fn click(&self, element_id: &str) -> bool {
    let target = self.state().bindings.get(element_id).cloned();
    let Some((project_id, collection)) = target else {
      return false;
    };
    // Misses are logged by the presenter and otherwise ignored.
    let _ = self.open_modal(&project_id, &collection);
    true
  }
}
