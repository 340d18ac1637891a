/* src/render/rust/src/lib.rs */

pub mod escape;
pub mod html;
pub mod labels;
pub mod locale;
pub mod messages;
pub mod modal;
pub mod model;
pub mod page;
pub mod personal;
pub mod projects;
pub mod region;
pub mod video;

// Public API re-exports
pub use escape::escape_html;
pub use labels::LabelTable;
pub use locale::{Locale, UnknownLocale};
pub use messages::{Msg, PLACEHOLDER_IMAGE, SPINNER_HTML};
pub use modal::{EmbedSlot, ModalSubject, ModalView, render_modal};
pub use model::{
  IconRef, Listed, MediaItem, PersonalInfo, Project, SocialLink, VideoProject, WorkExperience,
  find_by_id,
};
pub use page::{PageSnapshot, assemble_page, extract_labels};
pub use personal::{PersonalInfoView, ResolvedPersonalInfo, render_personal_info};
pub use projects::{CardBinding, GridView, LazyImage, render_project_grid, render_video_grid};
pub use region::Region;
pub use video::{embed_url, video_thumbnail, youtube_id};
