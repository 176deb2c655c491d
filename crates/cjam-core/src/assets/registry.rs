//! The immutable table of known assets.
//!
//! A registry is built once at startup from a list of [`AssetSpec`] entries and is
//! never mutated afterwards. The only state that changes at runtime is each asset's
//! decode cache, which moves from "not decoded" to "decoded" exactly once.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use super::decode::decode_payload;
use super::path;
use super::Metadata;
use crate::error::{CjamError, Result};

/// Static description of an asset, as compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    /// Virtual path, e.g. `/golang/main.go`.
    pub path: &'static str,
    /// Path relative to the template root, used by the local-disk store.
    pub local: &'static str,
    /// Declared uncompressed size. `0` means there is nothing to decode.
    pub size: u64,
    /// Modification time in seconds since the Unix epoch.
    pub mod_time: i64,
    pub is_dir: bool,
    /// Base64-wrapped gzip payload. Empty for directories.
    pub compressed: &'static str,
}

impl AssetSpec {
    pub const fn file(
        path: &'static str,
        local: &'static str,
        size: u64,
        mod_time: i64,
        compressed: &'static str,
    ) -> Self {
        Self {
            path,
            local,
            size,
            mod_time,
            is_dir: false,
            compressed,
        }
    }

    pub const fn dir(path: &'static str, local: &'static str) -> Self {
        Self {
            path,
            local,
            size: 0,
            mod_time: 0,
            is_dir: true,
            compressed: "",
        }
    }
}

/// A registered asset together with its lazily decoded payload.
#[derive(Debug)]
pub struct Asset {
    path: String,
    local: String,
    size: u64,
    mod_time: i64,
    is_dir: bool,
    compressed: String,
    decoded: OnceCell<Arc<[u8]>>,
    decodes: AtomicUsize,
}

impl Asset {
    /// A file asset carrying a compressed payload.
    pub fn file(
        path: &str,
        local: &str,
        size: u64,
        mod_time: i64,
        compressed: impl Into<String>,
    ) -> Self {
        Self {
            path: path::clean(path),
            local: local.to_string(),
            size,
            mod_time,
            is_dir: false,
            compressed: compressed.into(),
            decoded: OnceCell::new(),
            decodes: AtomicUsize::new(0),
        }
    }

    /// A directory node. Directories have no payload.
    pub fn dir(path: &str, local: &str) -> Self {
        let mut asset = Self::file(path, local, 0, 0, String::new());
        asset.is_dir = true;
        asset
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn local_path(&self) -> &str {
        &self.local
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Declared metadata for this asset. No decoding takes place.
    pub fn metadata(&self) -> Metadata {
        Metadata {
            path: self.path.clone(),
            name: path::base(&self.path).to_string(),
            size: self.size,
            mod_time: self.mod_time,
            is_dir: self.is_dir,
        }
    }

    /// Return the decoded payload, decoding it on first access.
    ///
    /// Concurrent first callers block until a single decode finishes and then all
    /// share its result. A failed decode is not cached; the next caller retries.
    /// Directories and zero-size entries yield an empty payload without decoding.
    pub fn decoded(&self) -> Result<Arc<[u8]>> {
        let bytes = self.decoded.get_or_try_init(|| -> Result<Arc<[u8]>> {
            if self.is_dir || self.size == 0 {
                return Ok(Arc::from(Vec::new()));
            }

            self.decodes.fetch_add(1, Ordering::SeqCst);
            let bytes = decode_payload(&self.compressed).map_err(|source| CjamError::Decode {
                path: self.path.clone(),
                source,
            })?;

            if bytes.len() as u64 != self.size {
                warn!(
                    path = %self.path,
                    declared = self.size,
                    decoded = bytes.len(),
                    "decoded asset size does not match its declared size"
                );
            }
            debug!(path = %self.path, size = bytes.len(), "decoded embedded asset");
            Ok(Arc::from(bytes))
        })?;
        Ok(Arc::clone(bytes))
    }

    /// Number of times the payload has actually been decompressed.
    pub fn decode_count(&self) -> usize {
        self.decodes.load(Ordering::SeqCst)
    }
}

impl From<&AssetSpec> for Asset {
    fn from(spec: &AssetSpec) -> Self {
        if spec.is_dir {
            Self::dir(spec.path, spec.local)
        } else {
            Self::file(spec.path, spec.local, spec.size, spec.mod_time, spec.compressed)
        }
    }
}

/// Lookup table from cleaned virtual path to [`Asset`].
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: HashMap<String, Asset>,
}

impl AssetRegistry {
    /// Build a registry from assets. A later entry replaces an earlier one with the
    /// same cleaned path.
    pub fn new(assets: impl IntoIterator<Item = Asset>) -> Self {
        let assets = assets
            .into_iter()
            .map(|asset| (asset.path.clone(), asset))
            .collect();
        Self { assets }
    }

    /// Build a registry from a static spec table.
    pub fn from_specs(specs: &[AssetSpec]) -> Self {
        Self::new(specs.iter().map(Asset::from))
    }

    /// The templates compiled into this binary.
    pub fn bundled() -> Self {
        Self::from_specs(super::data::ASSETS)
    }

    /// Look up an asset by virtual path. The path is cleaned first.
    pub fn get(&self, virtual_path: &str) -> Result<&Asset> {
        let key = path::clean(virtual_path);
        self.assets.get(&key).ok_or(CjamError::NotFound(key))
    }

    pub fn contains(&self, virtual_path: &str) -> bool {
        self.assets.contains_key(&path::clean(virtual_path))
    }

    /// All assets sorted by virtual path.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        let mut assets: Vec<&Asset> = self.assets.values().collect();
        assets.sort_by(|a, b| a.path.cmp(&b.path));
        assets.into_iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
