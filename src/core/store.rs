use crate::core::{ConfigProvider, Storage};
use crate::domain::model::TodoList;
use crate::utils::error::Result;

/// The list store: authoritative in-memory sequence plus a persisted copy
/// kept in sync after every mutation.
///
/// Constructed explicitly with an injected storage backend and config, so a
/// test can point it at a temp directory or an in-memory backend. The
/// persisted form is an XML property list whose root is an array of strings.
pub struct ListStore<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    items: TodoList,
}

impl<S: Storage, C: ConfigProvider> ListStore<S, C> {
    /// Creates an empty store. Call [`ListStore::load`] to pick up any
    /// previously persisted sequence.
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            items: TodoList::new(),
        }
    }

    /// Appends `item` at the end of the sequence and persists.
    pub fn add(&mut self, item: impl Into<String>) -> Result<()> {
        self.items.add(item.into());
        self.autosave()
    }

    /// Removes the item at `index` and persists. Returns the removed item.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        let removed = self.items.remove(index)?;
        self.autosave()?;
        Ok(removed)
    }

    /// Relocates the item at `from` to position `to` and persists.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.items.move_item(from, to)?;
        self.autosave()
    }

    /// Current number of items. No side effects.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the item at `index`. No side effects.
    pub fn item(&self, index: usize) -> Result<&str> {
        self.items.get(index)
    }

    /// The whole sequence in display order.
    pub fn items(&self) -> &[String] {
        self.items.as_slice()
    }

    /// Serializes the entire sequence as an XML property list and overwrites
    /// the data file. Whole-file overwrite; there is no temp-file rename, so
    /// a crash mid-write can truncate the file.
    pub fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        plist::to_writer_xml(&mut buf, &self.items)?;
        self.storage.write_file(self.config.data_file(), &buf)?;

        tracing::debug!(
            "Saved {} items to {}",
            self.items.len(),
            self.config.data_file()
        );
        Ok(())
    }

    /// Reads the data file and replaces the in-memory sequence wholesale if
    /// it holds a valid array of strings. An absent or malformed file leaves
    /// the current sequence untouched; no error is surfaced either way.
    pub fn load(&mut self) {
        let path = self.config.data_file();

        let bytes = match self.storage.read_file(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("No data loaded from {}: {}", path, e);
                return;
            }
        };

        match plist::from_bytes::<TodoList>(&bytes) {
            Ok(items) => {
                tracing::debug!("Loaded {} items from {}", items.len(), path);
                self.items = items;
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed data file {}: {}", path, e);
            }
        }
    }

    fn autosave(&self) -> Result<()> {
        if self.config.autosave() {
            self.save()?;
        }
        Ok(())
    }
}
