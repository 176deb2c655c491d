//! CLI command implementations for cjam.
//!
//! Each module corresponds to a subcommand (`cjam <command>`).

pub mod assets;
pub mod init;
pub mod languages;
pub mod show;

use std::path::Path;
use std::sync::Arc;

use cjam_core::assets::{AssetFs, AssetRegistry, EmbeddedFs, LocalFs};

/// Build the asset store for this invocation.
///
/// Embedded payloads by default; plain files under `local` when a template
/// directory is given.
pub fn open_store(local: Option<&Path>) -> Box<dyn AssetFs> {
    let registry = Arc::new(AssetRegistry::bundled());
    match local {
        Some(root) => {
            tracing::info!(root = %root.display(), "reading templates from local directory");
            Box::new(LocalFs::new(registry, root))
        }
        None => Box::new(EmbeddedFs::new(registry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_is_embedded() {
        let store = open_store(None);
        let solver = store.read_string("/golang/solver.go").unwrap();
        assert!(solver.contains("func Solve(cases []string) []string"));
    }

    #[test]
    fn test_local_store_reads_template_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("py27")).unwrap();
        std::fs::write(dir.path().join("py27/solver.py"), "def solve(cases):\n    return []\n").unwrap();

        let store = open_store(Some(dir.path()));
        assert_eq!(
            store.read_string("/py27/solver.py").unwrap(),
            "def solve(cases):\n    return []\n"
        );
        assert!(store.read_string("/py27/main.py").is_err());
    }
}
