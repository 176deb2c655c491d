use anyhow::{Context, Result};

use cjam_core::assets::{AssetFs, PrefixFs};
use cjam_core::language::Language;

/// Print a template's text to stdout.
///
/// Without a language, `path` is a virtual path; a missing leading `/` is added.
/// With a language, `path` is resolved inside that language's template directory,
/// so `cjam show -l go README.md` prints `/golang/README.md`.
pub fn run(assets: &dyn AssetFs, path: &str, language: Option<&str>) -> Result<()> {
    let content = match language {
        Some(name) => {
            let language: Language = name.parse()?;
            PrefixFs::new(assets, language.asset_dir()).read_string(path)
        }
        None => assets.read_string(&absolute(path)),
    }
    .with_context(|| format!("cannot show {path}"))?;

    print!("{content}");
    Ok(())
}

fn absolute(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
