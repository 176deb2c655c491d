//! Writes a language's starter files into a directory.
//!
//! Each [`Language`] carries a fixed table of `destination ← virtual path` pairs. The
//! [`Scaffolder`] walks that table in order, reads each asset and writes it verbatim,
//! creating or truncating the destination file.
//!
//! The first error (missing asset, corrupt payload, unwritable destination) aborts the
//! run. Files already written stay on disk and the remaining entries are not attempted.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::assets::AssetFs;
use crate::error::{CjamError, Result};
use crate::language::Language;

/// Scaffolds solutions from an asset store.
pub struct Scaffolder<'a> {
    assets: &'a dyn AssetFs,
}

impl<'a> Scaffolder<'a> {
    pub fn new(assets: &'a dyn AssetFs) -> Self {
        Self { assets }
    }

    /// Write every file for `language` into `dest_dir`.
    ///
    /// Returns the written paths in write order. Existing files are overwritten.
    pub fn scaffold(&self, language: Language, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        info!(language = language.name(), dest = %dest_dir.display(), "scaffolding solution");

        let files = language.files();
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let content = self.assets.read_bytes(file.source)?;
            let target = dest_dir.join(file.destination);
            write_file(&target, &content)?;
            debug!(source = file.source, target = %target.display(), bytes = content.len(), "wrote file");
            written.push(target);
        }

        Ok(written)
    }

    /// Same as [`scaffold`](Self::scaffold), resolving the language by name or alias.
    pub fn scaffold_named(&self, language: &str, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        let language: Language = language.parse()?;
        self.scaffold(language, dest_dir)
    }
}

/// Destination files of `language` that already exist in `dest_dir`.
pub fn existing_files(language: Language, dest_dir: &Path) -> Vec<PathBuf> {
    language
        .files()
        .iter()
        .map(|file| dest_dir.join(file.destination))
        .filter(|path| path.exists())
        .collect()
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    let fs_err = |source| CjamError::FileSystem {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(fs_err)?;
    file.write_all(content).map_err(fs_err)?;
    Ok(())
}
