//! Asset store backed by the payloads compiled into the binary.

use std::sync::Arc;

use tracing::trace;

use super::registry::AssetRegistry;
use super::{AssetFile, AssetFs, Metadata};
use crate::error::Result;

/// Serves assets from an [`AssetRegistry`], decoding each payload once on demand.
#[derive(Debug, Clone)]
pub struct EmbeddedFs {
    registry: Arc<AssetRegistry>,
}

impl EmbeddedFs {
    pub fn new(registry: Arc<AssetRegistry>) -> Self {
        Self { registry }
    }

    /// A store over the templates shipped in this binary.
    pub fn bundled() -> Self {
        Self::new(Arc::new(AssetRegistry::bundled()))
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }
}

impl AssetFs for EmbeddedFs {
    fn open(&self, path: &str) -> Result<AssetFile> {
        let asset = self.registry.get(path)?;
        trace!(path = asset.path(), "opening embedded asset");
        let data = asset.decoded()?;
        Ok(AssetFile::new(asset.metadata(), data))
    }

    fn stat(&self, path: &str) -> Result<Metadata> {
        Ok(self.registry.get(path)?.metadata())
    }

    fn list(&self) -> Vec<Metadata> {
        self.registry.iter().map(|asset| asset.metadata()).collect()
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        Ok(self.registry.get(path)?.decoded()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::error::CjamError;

    #[test]
    fn test_read_golang_main() {
        let fs = EmbeddedFs::bundled();
        let main = fs.read_string("/golang/main.go").unwrap();
        assert!(main.starts_with("package main\n"));
        assert!(main.contains("results := Solve(ReadInput(*inputFilename))"));
        assert_eq!(main.len(), 810);
    }

    #[test]
    fn test_open_and_read_matches_read_bytes() {
        let fs = EmbeddedFs::bundled();
        let mut file = fs.open("/node6/solver.js").unwrap();
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, fs.read_bytes("/node6/solver.js").unwrap());
        assert_eq!(file.metadata().size, buf.len() as u64);
    }

    #[test]
    fn test_read_shares_one_decode() {
        let fs = EmbeddedFs::bundled();
        let first = fs.read_bytes("/py27/main.py").unwrap();
        let second = fs.read_bytes("/py27/main.py").unwrap();
        assert_eq!(first, second);
        assert_eq!(fs.registry().get("/py27/main.py").unwrap().decode_count(), 1);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let fs = EmbeddedFs::bundled();
        assert!(matches!(fs.read_bytes("/rust/main.rs"), Err(CjamError::NotFound(_))));
        assert!(matches!(fs.read_string("/rust/main.rs"), Err(CjamError::NotFound(_))));
        assert!(matches!(fs.stat("/rust"), Err(CjamError::NotFound(_))));
        assert!(fs.open("/rust/main.rs").is_err());
    }

    #[test]
    fn test_stat_directory() {
        let fs = EmbeddedFs::bundled();
        let meta = fs.stat("/golang/").unwrap();
        assert!(meta.is_dir);
        assert_eq!(meta.name, "golang");
        assert_eq!(meta.size, 0);

        let mut dir = fs.open("/golang").unwrap();
        let mut buf = Vec::new();
        dir.read_to_end(&mut buf).unwrap();
        assert!(buf.is_empty());
        assert!(dir.read_dir().is_empty());
    }

    #[test]
    fn test_list_includes_directories_and_files() {
        let fs = EmbeddedFs::bundled();
        let listing = fs.list();
        let paths: Vec<&str> = listing.iter().map(|m| m.path.as_str()).collect();
        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/py27"));
        assert!(paths.contains(&"/node6/README.md"));
        assert_eq!(listing.len(), fs.registry().len());
    }
}
