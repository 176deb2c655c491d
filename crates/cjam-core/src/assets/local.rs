//! Asset store backed by plain files in a template directory.
//!
//! The registry still decides which virtual paths exist; only the bytes and the
//! metadata come from disk, via each asset's local path under `root`. Edits to the
//! templates show up without rebuilding the binary.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use tracing::debug;

use super::registry::{Asset, AssetRegistry};
use super::{path, AssetFile, AssetFs, Metadata};
use crate::error::{CjamError, Result};

#[derive(Debug, Clone)]
pub struct LocalFs {
    registry: Arc<AssetRegistry>,
    root: PathBuf,
}

impl LocalFs {
    pub fn new(registry: Arc<AssetRegistry>, root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn disk_path(&self, asset: &Asset) -> PathBuf {
        self.root.join(asset.local_path())
    }

    fn disk_metadata(&self, asset: &Asset) -> Result<Metadata> {
        let disk = self.disk_path(asset);
        let meta = std::fs::metadata(&disk).map_err(|source| CjamError::FileSystem {
            path: disk.clone(),
            source,
        })?;

        let mod_time = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        Ok(Metadata {
            path: asset.path().to_string(),
            name: path::base(asset.path()).to_string(),
            size: if meta.is_dir() { 0 } else { meta.len() },
            mod_time,
            is_dir: meta.is_dir(),
        })
    }
}

impl AssetFs for LocalFs {
    fn open(&self, path: &str) -> Result<AssetFile> {
        let asset = self.registry.get(path)?;
        let metadata = self.disk_metadata(asset)?;
        if metadata.is_dir {
            return Ok(AssetFile::new(metadata, Arc::from(Vec::new())));
        }

        let disk = self.disk_path(asset);
        debug!(path = asset.path(), disk = %disk.display(), "reading local template");
        let bytes = std::fs::read(&disk).map_err(|source| CjamError::FileSystem {
            path: disk.clone(),
            source,
        })?;
        Ok(AssetFile::new(metadata, Arc::from(bytes)))
    }

    fn stat(&self, path: &str) -> Result<Metadata> {
        let asset = self.registry.get(path)?;
        self.disk_metadata(asset)
    }

    /// Assets whose local file is missing are left out.
    fn list(&self) -> Vec<Metadata> {
        self.registry
            .iter()
            .filter_map(|asset| self.disk_metadata(asset).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EmbeddedFs;

    fn templates_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
    }

    #[test]
    fn test_templates_match_embedded_payloads() {
        let registry = Arc::new(AssetRegistry::bundled());
        let local = LocalFs::new(Arc::clone(&registry), templates_root());
        let embedded = EmbeddedFs::new(Arc::clone(&registry));

        for asset in registry.iter().filter(|a| !a.is_dir()) {
            let on_disk = local.read_bytes(asset.path()).unwrap();
            let bundled = embedded.read_bytes(asset.path()).unwrap();
            assert_eq!(on_disk, bundled, "templates/{} is out of sync", asset.local_path());
        }
    }

    #[test]
    fn test_reads_edited_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("golang")).unwrap();
        std::fs::write(dir.path().join("golang/solver.go"), "package main // edited\n").unwrap();

        let fs = LocalFs::new(Arc::new(AssetRegistry::bundled()), dir.path());
        assert_eq!(fs.read_string("/golang/solver.go").unwrap(), "package main // edited\n");

        let meta = fs.stat("/golang/solver.go").unwrap();
        assert_eq!(meta.size, 23);
        assert!(!meta.is_dir);
        assert!(fs.stat("/golang").unwrap().is_dir);
    }

    #[test]
    fn test_missing_local_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new(Arc::new(AssetRegistry::bundled()), dir.path());

        let err = fs.read_bytes("/py27/main.py").unwrap_err();
        assert!(matches!(err, CjamError::FileSystem { .. }));
        assert!(matches!(fs.read_bytes("/py3/main.py"), Err(CjamError::NotFound(_))));
    }

    #[test]
    fn test_list_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("node6")).unwrap();
        std::fs::write(dir.path().join("node6/main.js"), "'use strict';\n").unwrap();

        let fs = LocalFs::new(Arc::new(AssetRegistry::bundled()), dir.path());
        let paths: Vec<String> = fs.list().into_iter().map(|m| m.path).collect();
        assert_eq!(paths, vec!["/", "/node6", "/node6/main.js"]);
    }
}
