/* src/client/core/src/store.rs */

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use folio_render::Locale;
use log::warn;
use serde_json::{Map, Value};

/// Key the chosen language is persisted under.
pub const LANGUAGE_KEY: &str = "language";

/// Where the user's language choice survives between sessions.
pub trait LocaleStore: Send + Sync {
  fn load(&self) -> Option<Locale>;
  fn save(&self, locale: Locale) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
  value: Mutex<Option<Locale>>,
}

impl MemoryStore {
  pub fn new(initial: Option<Locale>) -> Self {
    Self { value: Mutex::new(initial) }
  }
}

impl LocaleStore for MemoryStore {
  fn load(&self) -> Option<Locale> {
    *self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
  }

  fn save(&self, locale: Locale) -> io::Result<()> {
    *self.value.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(locale);
    Ok(())
  }
}

/// JSON object on disk, e.g. `{"language": "en"}`. Other keys are preserved.
#[derive(Debug, Clone)]
pub struct FileStore {
  path: PathBuf,
}

impl FileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  fn read_map(&self) -> Map<String, Value> {
    let Ok(raw) = std::fs::read_to_string(&self.path) else {
      return Map::new();
    };
    match serde_json::from_str::<Value>(&raw) {
      Ok(Value::Object(map)) => map,
      _ => {
        warn!("ignoring malformed locale store {}", self.path.display());
        Map::new()
      }
    }
  }
}

impl LocaleStore for FileStore {
  fn load(&self) -> Option<Locale> {
    let map = self.read_map();
    let code = map.get(LANGUAGE_KEY)?.as_str()?;
    let locale = Locale::from_code(code);
    if locale.is_none() {
      warn!("unknown stored language \"{code}\"");
    }
    locale
  }

  fn save(&self, locale: Locale) -> io::Result<()> {
    let mut map = self.read_map();
    map.insert(LANGUAGE_KEY.to_string(), Value::String(locale.code().to_string()));
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&Value::Object(map)).map_err(io::Error::other)?;
    std::fs::write(&self.path, json)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn file_store_round_trip_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".folio/state.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();
    let store = FileStore::new(&path);

    assert_eq!(store.load(), None);
    store.save(Locale::Secondary).unwrap();
    assert_eq!(store.load(), Some(Locale::Secondary));

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["theme"], "dark");
    assert_eq!(raw["language"], "en");
  }

  #[test]
  fn missing_or_garbage_file_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.load(), None);

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    assert_eq!(FileStore::new(&garbage).load(), None);

    let unknown = dir.path().join("unknown.json");
    std::fs::write(&unknown, r#"{"language": "fr"}"#).unwrap();
    assert_eq!(FileStore::new(&unknown).load(), None);
  }

  #[test]
  fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested/state.json"));
    store.save(Locale::Primary).unwrap();
    assert_eq!(store.load(), Some(Locale::Primary));
  }
}
