//! Read-only asset store for starter templates.
//!
//! Assets are addressed by POSIX-style virtual paths such as `/golang/main.go`. The
//! [`AssetFs`] trait gives callers a small filesystem-like view (open, stat, list, read)
//! over two interchangeable backends:
//!
//! - [`embedded::EmbeddedFs`] serves the payloads compiled into the binary. Each payload
//!   is decoded on first access and cached for the life of the process.
//! - [`local::LocalFs`] serves plain files from a template directory on disk. It exists
//!   for working on the templates without rebuilding.
//!
//! [`prefix::PrefixFs`] wraps either one to resolve names under a fixed directory.
//!
//! ## Adding a template
//!
//! 1. Add the plaintext file under `templates/<lang>/`
//! 2. Add an entry to [`data::ASSETS`] with its size, mtime and payload
//!    (see [`decode::encode_payload`])
//! 3. The `test_templates_match_embedded_payloads` test fails until both agree

pub mod data;
pub mod decode;
pub mod embedded;
pub mod local;
pub mod path;
pub mod prefix;
pub mod registry;

use std::io::{Cursor, Read};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::Result;

pub use embedded::EmbeddedFs;
pub use local::LocalFs;
pub use prefix::PrefixFs;
pub use registry::{Asset, AssetRegistry, AssetSpec};

/// What `stat` reports about an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Cleaned virtual path.
    pub path: String,
    /// Last element of the path.
    pub name: String,
    pub size: u64,
    /// Seconds since the Unix epoch.
    pub mod_time: i64,
    pub is_dir: bool,
}

impl Metadata {
    pub fn modified(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.mod_time.max(0) as u64)
    }
}

/// An opened asset. Reading yields the full decoded payload.
#[derive(Debug)]
pub struct AssetFile {
    metadata: Metadata,
    data: Cursor<Arc<[u8]>>,
}

impl AssetFile {
    pub fn new(metadata: Metadata, data: Arc<[u8]>) -> Self {
        Self {
            metadata,
            data: Cursor::new(data),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Directory entries under this asset. Always empty: the store does not track
    /// parent/child links, only flat paths.
    pub fn read_dir(&self) -> Vec<Metadata> {
        Vec::new()
    }
}

impl Read for AssetFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.data.read(buf)
    }
}

/// A read-only, filesystem-like view over a set of assets.
pub trait AssetFs: Send + Sync {
    /// Open an asset by virtual path.
    fn open(&self, path: &str) -> Result<AssetFile>;

    /// Report metadata for an asset without reading it.
    fn stat(&self, path: &str) -> Result<Metadata>;

    /// Metadata for every asset visible through this view, sorted by path.
    fn list(&self) -> Vec<Metadata>;

    /// Read an asset's full content.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read an asset as text. Invalid UTF-8 is replaced, never rejected.
    fn read_string(&self, path: &str) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Like [`read_bytes`](Self::read_bytes) for assets that ship with the binary.
    ///
    /// # Panics
    ///
    /// Panics if the asset is missing or cannot be decoded. Both mean the binary
    /// itself is broken.
    fn must_read_bytes(&self, path: &str) -> Vec<u8> {
        match self.read_bytes(path) {
            Ok(bytes) => bytes,
            Err(e) => panic!("bundled asset {path} is unavailable: {e}"),
        }
    }

    /// String version of [`must_read_bytes`](Self::must_read_bytes).
    ///
    /// # Panics
    ///
    /// Panics under the same conditions.
    fn must_read_string(&self, path: &str) -> String {
        String::from_utf8_lossy(&self.must_read_bytes(path)).into_owned()
    }
}

impl<T: AssetFs + ?Sized> AssetFs for &T {
    fn open(&self, path: &str) -> Result<AssetFile> {
        (**self).open(path)
    }

    fn stat(&self, path: &str) -> Result<Metadata> {
        (**self).stat(path)
    }

    fn list(&self) -> Vec<Metadata> {
        (**self).list()
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(path)
    }
}

impl<T: AssetFs + ?Sized> AssetFs for Box<T> {
    fn open(&self, path: &str) -> Result<AssetFile> {
        (**self).open(path)
    }

    fn stat(&self, path: &str) -> Result<Metadata> {
        (**self).stat(path)
    }

    fn list(&self) -> Vec<Metadata> {
        (**self).list()
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(path)
    }
}
