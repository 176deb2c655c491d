//! cjam CLI — scaffold starter solutions for Code Jam style problem sets.
//!
//! `cjam init <language>` writes a `main` file (argument parsing plus input/output
//! handling) and a `solver` file (the part you edit) into the current directory.
//! The remaining commands inspect the templates bundled in the binary.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cjam_core::language::Language;

#[derive(Parser)]
#[command(
    name = "cjam",
    about = "Scaffold Code Jam starter solutions in Go, Python and Node.js",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read templates from this directory instead of the embedded copies
    #[arg(long, global = true, hide = true, value_name = "DIR")]
    local: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the current folder for a new problem set
    #[command(visible_alias = "i")]
    Init {
        #[command(subcommand)]
        language: Option<InitLanguage>,
    },

    /// List supported languages and the files each one writes
    Languages,

    /// List every bundled template
    Assets {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a bundled template to stdout
    Show {
        /// Virtual path, e.g. /golang/README.md
        path: String,

        /// Resolve the path inside this language's template directory
        #[arg(long, short)]
        language: Option<String>,
    },
}

#[derive(Subcommand, Clone, Copy, Debug)]
pub enum InitLanguage {
    /// Initialize for a Go solution
    #[command(visible_alias = "go")]
    Golang,

    /// Initialize for a Python 2.7 solution
    #[command(visible_aliases = ["p", "py", "py2", "py27"])]
    Python,

    /// Initialize for a Node.js solution
    #[command(visible_aliases = ["js", "nodejs", "node6"])]
    Node,
}

impl From<InitLanguage> for Language {
    fn from(choice: InitLanguage) -> Self {
        match choice {
            InitLanguage::Golang => Language::Golang,
            InitLanguage::Python => Language::Python,
            InitLanguage::Node => Language::Node,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let assets = commands::open_store(cli.local.as_deref());

    match cli.command {
        Commands::Init { language } => {
            commands::init::run(assets.as_ref(), language.map(Language::from))?;
        }
        Commands::Languages => {
            commands::languages::run();
        }
        Commands::Assets { json } => {
            commands::assets::run(assets.as_ref(), json)?;
        }
        Commands::Show { path, language } => {
            commands::show::run(assets.as_ref(), &path, language.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn init_language(args: &[&str]) -> Option<Language> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Init { language } => language.map(Language::from),
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_language_aliases() {
        assert_eq!(init_language(&["cjam", "init", "golang"]), Some(Language::Golang));
        assert_eq!(init_language(&["cjam", "i", "go"]), Some(Language::Golang));
        for alias in ["python", "p", "py", "py2", "py27"] {
            assert_eq!(init_language(&["cjam", "init", alias]), Some(Language::Python));
        }
        for alias in ["node", "js", "nodejs", "node6"] {
            assert_eq!(init_language(&["cjam", "init", alias]), Some(Language::Node));
        }
        assert_eq!(init_language(&["cjam", "init"]), None);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["cjam", "init", "rust"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["cjam", "-vv", "assets", "--json", "--local", "templates"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.local, Some(PathBuf::from("templates")));
        assert!(matches!(cli.command, Commands::Assets { json: true }));
    }
}
