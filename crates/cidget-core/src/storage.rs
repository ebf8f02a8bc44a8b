//! Disk write side of a fetch.
//!
//! The body streams into a `.part` temp file; a successful fetch fsyncs and
//! atomically renames it onto the output path, so the output path never holds
//! a partial body.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `downloaded_Qm….txt` → `downloaded_Qm….txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Handle for an in-progress download file.
///
/// Cloneable so the transfer callback and the finalizing caller share one
/// file; appends go through the shared cursor, so writes must stay on a
/// single stream.
#[derive(Clone)]
pub struct PartFile {
    file: Arc<File>,
    temp_path: PathBuf,
}

impl PartFile {
    /// Create the temp file at `temp_path`, truncating anything already there.
    pub fn create(temp_path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        Ok(PartFile {
            file: Arc::new(file),
            temp_path: temp_path.to_path_buf(),
        })
    }

    /// Append `data` at the current cursor.
    pub fn append(&self, data: &[u8]) -> io::Result<()> {
        (&*self.file).write_all(data)
    }

    /// Sync file contents to disk. Call before [`PartFile::finalize`].
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Path of the temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Atomically rename the temp file onto `final_path`, consuming the
    /// handle. Fails if `final_path` is on a different filesystem.
    pub fn finalize(self, final_path: &Path) -> io::Result<()> {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        std::fs::rename(&temp_path, final_path)
    }

    /// Remove the temp file, consuming the handle. Used on failed fetches.
    pub fn discard(self) -> io::Result<()> {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        std::fs::remove_file(&temp_path)
    }
}
