/* src/client/core/src/loader.rs */

use std::sync::Arc;

use folio_render::{
  Locale, Msg, PersonalInfo, Project, Region, SPINNER_HTML, VideoProject, escape_html,
  render_personal_info, render_project_grid, render_video_grid,
};
use log::{debug, error};
use serde::de::DeserializeOwned;

use crate::app::App;
use crate::cache::{ContentCache, Slot};
use crate::category::Category;
use crate::fetch::fetch_json;
use crate::modal::Collection;

/// A payload type with its own cache slot, regions and rendering.
trait Content: Sized + Send + Sync + 'static {
  const CATEGORY: Category;
  /// Region that shows the spinner and inline errors.
  const REGION: Region;

  type Wire: DeserializeOwned + Send;

  fn from_wire(wire: Self::Wire) -> Self;
  fn slot(cache: &mut ContentCache) -> &mut Slot<Self>;
  fn render(app: &App, payload: Arc<Self>, locale: Locale);
  fn fail(app: &App, locale: Locale);
}

fn error_markup(msg: Msg, locale: Locale) -> String {
  format!("<p>{}</p>", escape_html(msg.text(locale)))
}

impl Content for PersonalInfo {
  const CATEGORY: Category = Category::PersonalInfo;
  const REGION: Region = Region::Hero;

  type Wire = PersonalInfo;

  fn from_wire(wire: Self::Wire) -> Self {
    wire
  }

  fn slot(cache: &mut ContentCache) -> &mut Slot<Self> {
    &mut cache.personal_info
  }

  fn render(app: &App, payload: Arc<Self>, locale: Locale) {
    let view = render_personal_info(&payload, locale, app.labels());
    let mut doc = app.document();
    doc.set_html(Region::Hero, &view.hero);
    doc.set_html(Region::About, &view.about);
    doc.set_html(Region::Contact, &view.contact);
    doc.set_text(Region::FooterName, &view.footer_name);
    if let Some(url) = &view.preload {
      doc.add_preload(url);
    }
  }

  fn fail(app: &App, locale: Locale) {
    app.document().set_html(Region::Hero, &error_markup(Msg::PersonalInfoError, locale));
  }
}

impl Content for Vec<Project> {
  const CATEGORY: Category = Category::Projects;
  const REGION: Region = Region::ProjectGrid;

  type Wire = Option<Vec<Project>>;

  fn from_wire(wire: Self::Wire) -> Self {
    wire.unwrap_or_default()
  }

  fn slot(cache: &mut ContentCache) -> &mut Slot<Self> {
    &mut cache.projects
  }

  fn render(app: &App, payload: Arc<Self>, locale: Locale) {
    let view = render_project_grid(&payload, locale);
    app.document().set_html(Region::ProjectGrid, &view.html);
    app.bind_cards(view.cards, Collection::Projects(payload));
    app.observe_lazy("project-thumb-", view.lazy_images);
  }

  fn fail(app: &App, locale: Locale) {
    app.document().set_html(Region::ProjectGrid, &error_markup(Msg::ProjectsError, locale));
    app.unbind(Category::Projects);
    app.observe_lazy("project-thumb-", Vec::new());
  }
}

impl Content for Vec<VideoProject> {
  const CATEGORY: Category = Category::VideoProjects;
  const REGION: Region = Region::VideoProjectGrid;

  type Wire = Option<Vec<VideoProject>>;

  fn from_wire(wire: Self::Wire) -> Self {
    wire.unwrap_or_default()
  }

  fn slot(cache: &mut ContentCache) -> &mut Slot<Self> {
    &mut cache.video_projects
  }

  fn render(app: &App, payload: Arc<Self>, locale: Locale) {
    if payload.is_empty() {
      hide_video_section(app);
      return;
    }
    let view = render_video_grid(&payload, locale);
    {
      let mut doc = app.document();
      doc.set_html(Region::VideoProjectGrid, &view.html);
      doc.set_hidden(Region::VideoSection, false);
      doc.set_hidden(Region::VideoNavItem, false);
    }
    app.bind_cards(view.cards, Collection::Videos(payload));
    app.observe_lazy("video-thumb-", view.lazy_images);
  }

  fn fail(app: &App, _locale: Locale) {
    hide_video_section(app);
  }
}

fn hide_video_section(app: &App) {
  {
    let mut doc = app.document();
    doc.set_html(Region::VideoProjectGrid, "");
    doc.set_hidden(Region::VideoSection, true);
    doc.set_hidden(Region::VideoNavItem, true);
  }
  app.unbind(Category::VideoProjects);
  app.observe_lazy("video-thumb-", Vec::new());
}

impl App {
  /// Load one category for the active locale: spinner, cache or fetch, render.
  pub async fn load(&self, category: Category) {
    match category {
      Category::PersonalInfo => self.load_content::<PersonalInfo>().await,
      Category::Projects => self.load_content::<Vec<Project>>().await,
      Category::VideoProjects => self.load_content::<Vec<VideoProject>>().await,
    }
  }

  async fn load_content<C: Content>(&self) {
    let ticket = self.ticket();
    let locale = ticket.locale;
    self.document().set_html(C::REGION, SPINNER_HTML);

    let cached = C::slot(&mut self.state().cache).get(locale);
    let (payload, fetched) = match cached {
      Some(payload) => {
        debug!("{} for {locale} served from cache", C::CATEGORY);
        (Ok(payload), false)
      }
      None => {
        let config = self.config();
        let url = config.url(locale, C::CATEGORY);
        let result = fetch_json::<C::Wire>(
          self.transport(),
          &url,
          &config.retry,
          config.digest(locale, C::CATEGORY),
        )
        .await;
        (result.map(|wire| Arc::new(C::from_wire(wire))), true)
      }
    };

    {
      let mut state = self.state();
      if state.ticket() != ticket {
        debug!("discarding stale {} result for {locale}", C::CATEGORY);
        return;
      }
      if fetched && let Ok(payload) = &payload {
        C::slot(&mut state.cache).put(locale, Arc::clone(payload));
      }
    }

    match payload {
      Ok(payload) => C::render(self, payload, locale),
      Err(e) => {
        error!("failed to load {} for {locale}: {e}", C::CATEGORY);
        C::fail(self, locale);
      }
    }
  }
}
