use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::config_base_dir;
use crate::doc::PoemDocument;

use super::StorageError;

const DRAFT_FILE: &str = "draft.json";

/// Reads and writes the draft and autosave records under one directory.
pub struct DraftStore {
    pub(super) dir: PathBuf,
}

impl DraftStore {
    /// Opens the store at `~/.config/quill/`. Returns `None` when no home
    /// directory can be resolved.
    pub fn open() -> Option<DraftStore> {
        config_base_dir().map(|base| DraftStore {
            dir: base.join("quill"),
        })
    }

    pub fn at(dir: PathBuf) -> DraftStore {
        DraftStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the full document to `draft.json`, overwriting any previous
    /// draft.
    pub fn save_draft(&self, doc: &PoemDocument) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let serialized = serde_json::to_string(doc)?;
        fs::write(self.dir.join(DRAFT_FILE), serialized)?;
        Ok(())
    }

    /// Loads the saved draft. A missing file is `NotFound`, malformed JSON is
    /// `Corrupt`; in both cases the caller's in-memory document stays as it
    /// was. Bounded fields are clamped back into their control ranges.
    pub fn load_draft(&self) -> Result<PoemDocument, StorageError> {
        let contents = match fs::read_to_string(self.dir.join(DRAFT_FILE)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound),
            Err(err) => return Err(err.into()),
        };
        let mut doc: PoemDocument = serde_json::from_str(&contents)?;
        doc.clamp_ranges();
        Ok(doc)
    }
}
