use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::Select;

use cjam_core::assets::AssetFs;
use cjam_core::language::Language;
use cjam_core::scaffold::{self, Scaffolder};

use crate::output;

/// Initialize the current directory for a new problem set.
///
/// Writes the language's starter files into the working directory, replacing any
/// files with the same names. If no language is given, prompts interactively.
pub fn run(assets: &dyn AssetFs, language: Option<Language>) -> Result<()> {
    let language = match language {
        Some(lang) => lang,
        None => prompt_language()?,
    };

    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;
    scaffold_into(assets, language, &cwd)?;

    println!();
    println!("  Next steps:");
    println!("    edit {}", language.files().last().map_or("solver", |f| f.destination));
    println!("    {}", language.run_hint());
    println!();

    Ok(())
}

/// Scaffold `language` into `dest`, reporting each written file.
fn scaffold_into(assets: &dyn AssetFs, language: Language, dest: &Path) -> Result<Vec<PathBuf>> {
    output::print_header(&format!("cjam init: {}", language.display_name()));

    warn_overwrites(language, dest);

    let written = Scaffolder::new(assets)
        .scaffold(language, dest)
        .with_context(|| {
            format!(
                "failed to scaffold {} solution in {}",
                language.name(),
                dest.display()
            )
        })?;

    let total = written.len();
    for (i, path) in written.iter().enumerate() {
        let name = path.file_name().unwrap_or(path.as_os_str());
        output::print_step(i + 1, total, &format!("Wrote {}", name.to_string_lossy()));
    }

    output::print_success(&format!(
        "Initialized {} solution in {}",
        language.display_name(),
        dest.display()
    ));

    Ok(written)
}

fn warn_overwrites(language: Language, dir: &Path) {
    for path in scaffold::existing_files(language, dir) {
        output::print_warning(&format!("Overwriting existing {}", path.display()));
    }
}

fn prompt_language() -> Result<Language> {
    let descriptions: Vec<String> = Language::ALL
        .iter()
        .map(|lang| format!("{} ({})", lang.display_name(), lang.name()))
        .collect();

    let selection = Select::new()
        .with_prompt("Select solution language")
        .items(&descriptions)
        .default(0)
        .interact()?;

    Ok(Language::ALL[selection])
}
