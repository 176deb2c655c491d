//! A view of an [`AssetFs`] rooted at a directory prefix.

use super::{path, AssetFile, AssetFs, Metadata};
use crate::error::{CjamError, Result};

/// Resolves every name relative to `prefix`, so a view over `/golang` opens
/// `/golang/main.go` for `main.go`.
///
/// Names that clean to a path outside the prefix (`../py27/solver.py`) are
/// reported as [`CjamError::NotFound`].
#[derive(Debug, Clone)]
pub struct PrefixFs<F> {
    inner: F,
    prefix: String,
}

impl<F: AssetFs> PrefixFs<F> {
    pub fn new(inner: F, prefix: &str) -> Self {
        Self {
            inner,
            prefix: path::clean(prefix),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn resolve(&self, name: &str) -> Result<String> {
        let resolved = path::join(&self.prefix, name);
        if self.covers(&resolved) {
            Ok(resolved)
        } else {
            Err(CjamError::NotFound(resolved))
        }
    }

    fn covers(&self, resolved: &str) -> bool {
        let dir = format!("{}/", self.prefix.trim_end_matches('/'));
        resolved == self.prefix || resolved.starts_with(&dir)
    }
}

impl<F: AssetFs> AssetFs for PrefixFs<F> {
    fn open(&self, name: &str) -> Result<AssetFile> {
        self.inner.open(&self.resolve(name)?)
    }

    fn stat(&self, name: &str) -> Result<Metadata> {
        self.inner.stat(&self.resolve(name)?)
    }

    /// Entries at or below the prefix. Paths stay absolute.
    fn list(&self) -> Vec<Metadata> {
        self.inner
            .list()
            .into_iter()
            .filter(|m| self.covers(&m.path))
            .collect()
    }

    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        self.inner.read_bytes(&self.resolve(name)?)
    }
}
