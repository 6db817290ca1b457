//! File-backed implementation of the world variable store.

use speed_session::VariableStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// A variable store persisted as a JSON map on disk.
///
/// Reads the whole file once at open and writes it back after every
/// mutation; the variable set is tiny, so there is no point batching.
/// Like the rest of the session core this is single-threaded, hence the
/// plain `RefCell` cache.
pub struct FileStore {
    path: PathBuf,
    variables: RefCell<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store, loading any existing content.
    ///
    /// A missing file is a fresh world; an unreadable file is logged and
    /// treated as empty rather than aborting startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let variables = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(error) => {
                    warn!(
                        "⚠️ World store {} is unreadable, starting empty: {error}",
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => {
                warn!(
                    "⚠️ Could not read world store {}, starting empty: {error}",
                    path.display()
                );
                HashMap::new()
            }
        };
        Self {
            path,
            variables: RefCell::new(variables),
        }
    }

    fn flush(&self) {
        let serialized = match serde_json::to_string_pretty(&*self.variables.borrow()) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!("⚠️ Could not serialize world store: {error}");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, serialized) {
            warn!(
                "⚠️ Could not write world store {}: {error}",
                self.path.display()
            );
        }
    }
}

impl VariableStore for FileStore {
    fn get_variable(&self, name: &str) -> Option<String> {
        self.variables.borrow().get(name).cloned()
    }

    fn set_variable(&self, name: &str, value: &str) {
        self.variables
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self.flush();
    }
}
