use anyhow::Result;

use cjam_core::assets::{AssetFs, Metadata};

use crate::output;

/// List every template known to the store.
///
/// With `json`, prints the metadata array as pretty JSON and nothing else, so the
/// output can be piped.
pub fn run(assets: &dyn AssetFs, json: bool) -> Result<()> {
    let listing = assets.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    output::print_header("cjam assets");
    for meta in &listing {
        output::print_key_value(&meta.path, &describe(meta));
    }
    println!();
    println!("  {} entries", listing.len());

    Ok(())
}

fn describe(meta: &Metadata) -> String {
    if meta.is_dir {
        "directory".to_string()
    } else {
        format!("{} bytes, modified {}", meta.size, meta.mod_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let dir = Metadata {
            path: "/golang".to_string(),
            name: "golang".to_string(),
            size: 0,
            mod_time: 0,
            is_dir: true,
        };
        assert_eq!(describe(&dir), "directory");

        let file = Metadata {
            path: "/golang/solver.go".to_string(),
            name: "solver.go".to_string(),
            size: 119,
            mod_time: 1491176868,
            is_dir: false,
        };
        assert_eq!(describe(&file), "119 bytes, modified 1491176868");
    }
}
