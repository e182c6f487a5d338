use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::doc::{PoemDocument, plain_text};

pub fn text_export_path(now_millis: i64) -> PathBuf {
    super::output_dir().join(format!("poem-{now_millis}.txt"))
}

/// Writes the plain-text rendering of the document. The caller is expected to
/// have rejected empty poems already.
pub fn export_text(doc: &PoemDocument, now_millis: i64) -> anyhow::Result<PathBuf> {
    let path = text_export_path(now_millis);
    fs::write(&path, plain_text(doc))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
