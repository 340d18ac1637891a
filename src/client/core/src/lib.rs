/* src/client/core/src/lib.rs */

pub mod app;
pub mod cache;
pub mod category;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod modal;
pub mod observer;
pub mod store;
pub mod transport;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

// Public API re-exports
pub use app::{App, SharedDocument, Ticket};
pub use cache::ContentCache;
pub use category::{Category, parse_digest_key};
pub use config::ClientConfig;
pub use controller::LanguageController;
pub use document::{Document, MemoryDocument};
pub use error::{ErrorKind, FetchError, ModalError};
pub use fetch::{RetryPolicy, content_digest, fetch_json};
pub use modal::Collection;
pub use observer::{ProximityObserver, REVEAL_MARGIN_PX};
pub use store::{FileStore, LocaleStore, MemoryStore};
pub use transport::{FileTransport, HttpTransport, Response, Transport, transport_for};
