//! # Document Controller
//!
//! Holds the editor's text buffer and at most one backing file path, and
//! exposes the whole-file load/save operations against the filesystem.
//!
//! Failure leaves the document at its last-known-good value: `open` reads
//! before it assigns, and `save` goes through an atomic write (temp file +
//! `rename()`), so a failed write never truncates the previous content.
//! The one deliberate exception is `save_as`, which keeps the new path even
//! when the write then fails — the user already committed to the rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// The editor's document: a text buffer plus an optional backing file.
#[derive(Debug, Default)]
pub struct Document {
    /// Backing file, set on first successful save or open.
    pub path: Option<PathBuf>,
    /// The in-memory buffer, independent of any on-disk state.
    pub text: String,
    /// True when the buffer changed since the last successful save/open.
    pub modified: bool,
}

impl Document {
    /// An empty, pathless, unmodified document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty state ("new file"): buffer cleared, path dropped.
    pub fn clear(&mut self) {
        self.text.clear();
        self.path = None;
        self.modified = false;
    }

    /// Replace the buffer with the file's content and adopt the path.
    ///
    /// Reads first, assigns after: on any failure the buffer and path are
    /// untouched.
    pub fn open(&mut self, path: PathBuf) -> io::Result<()> {
        let text = fs::read_to_string(&path)?;
        debug!("opened {} ({} bytes)", path.display(), text.len());
        self.text = text;
        self.path = Some(path);
        self.modified = false;
        Ok(())
    }

    /// Write the full buffer to the document's path, overwriting the file.
    ///
    /// The caller resolves a path first (via the save-as prompt); calling
    /// this without one is an `InvalidInput` error.
    pub fn save(&mut self) -> io::Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no file path set"))?;
        atomic_write(path, &self.text)?;
        debug!("saved {} ({} bytes)", path.display(), self.text.len());
        self.modified = false;
        Ok(())
    }

    /// Adopt `path`, then save. The path stays adopted even if the write
    /// fails.
    pub fn save_as(&mut self, path: PathBuf) -> io::Result<()> {
        self.path = Some(path);
        self.save()
    }

    /// Maximal runs of non-whitespace in the buffer.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Unicode scalar count of the buffer.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Status bar text: `"Words: {w} | Characters: {c}"`, prefixed with the
    /// path when one is set.
    pub fn status_line(&self) -> String {
        let words = self.word_count();
        let chars = self.char_count();
        match &self.path {
            Some(path) => format!("{} | Words: {words} | Characters: {chars}", path.display()),
            None => format!("Words: {words} | Characters: {chars}"),
        }
    }
}

/// Write `contents` to `path` via a sibling `.tmp` file and `rename()`.
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
