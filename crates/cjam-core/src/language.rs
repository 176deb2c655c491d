//! Supported solution languages and the files each one scaffolds.

use std::fmt;
use std::str::FromStr;

use crate::error::CjamError;

/// One file written by `init`: where it goes and which asset it comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// File name relative to the destination directory.
    pub destination: &'static str,
    /// Virtual path of the source asset.
    pub source: &'static str,
}

const GOLANG_FILES: &[ScaffoldFile] = &[
    ScaffoldFile {
        destination: "main.go",
        source: "/golang/main.go",
    },
    ScaffoldFile {
        destination: "solver.go",
        source: "/golang/solver.go",
    },
];

const PYTHON_FILES: &[ScaffoldFile] = &[
    ScaffoldFile {
        destination: "main.py",
        source: "/py27/main.py",
    },
    ScaffoldFile {
        destination: "solver.py",
        source: "/py27/solver.py",
    },
];

const NODE_FILES: &[ScaffoldFile] = &[
    ScaffoldFile {
        destination: "main.js",
        source: "/node6/main.js",
    },
    ScaffoldFile {
        destination: "solver.js",
        source: "/node6/solver.js",
    },
];

/// A target language for generated solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Golang,
    Python,
    Node,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Golang, Language::Python, Language::Node];

    /// Canonical name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Golang => "golang",
            Self::Python => "python",
            Self::Node => "node",
        }
    }

    /// Alternative names accepted by [`Language::from_name`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Golang => &["go"],
            Self::Python => &["p", "py", "py2", "py27"],
            Self::Node => &["js", "nodejs", "node6"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Golang => "Go",
            Self::Python => "Python 2.7",
            Self::Node => "Node.js 6",
        }
    }

    /// Virtual directory holding this language's templates.
    pub fn asset_dir(&self) -> &'static str {
        match self {
            Self::Golang => "/golang",
            Self::Python => "/py27",
            Self::Node => "/node6",
        }
    }

    /// Files written by `init`, in write order.
    pub fn files(&self) -> &'static [ScaffoldFile] {
        match self {
            Self::Golang => GOLANG_FILES,
            Self::Python => PYTHON_FILES,
            Self::Node => NODE_FILES,
        }
    }

    /// How to run the generated solution.
    pub fn run_hint(&self) -> &'static str {
        match self {
            Self::Golang => "go build -o run && ./run -i input.txt -o output.txt",
            Self::Python => "python main.py -i input.txt -o output.txt",
            Self::Node => "node main.js -i input.txt -o output.txt",
        }
    }

    /// Look up a language by canonical name or alias.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == name || lang.aliases().contains(&name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CjamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CjamError::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{path, AssetRegistry};

    #[test]
    fn test_from_name_canonical() {
        assert_eq!(Language::from_name("golang"), Some(Language::Golang));
        assert_eq!(Language::from_name("python"), Some(Language::Python));
        assert_eq!(Language::from_name("node"), Some(Language::Node));
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Language::from_name("go"), Some(Language::Golang));
        for alias in ["p", "py", "py2", "py27"] {
            assert_eq!(Language::from_name(alias), Some(Language::Python));
        }
        for alias in ["js", "nodejs", "node6"] {
            assert_eq!(Language::from_name(alias), Some(Language::Node));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert!(Language::from_name("rust").is_none());
        assert!(Language::from_name("").is_none());
        assert!(Language::from_name("Golang").is_none());
    }

    #[test]
    fn test_parse_reports_unsupported_language() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert!(matches!(err, CjamError::UnsupportedLanguage(ref l) if l == "cobol"));
        assert_eq!(" py ".parse::<Language>().unwrap(), Language::Python);
    }

    #[test]
    fn test_every_source_is_registered_under_asset_dir() {
        let registry = AssetRegistry::bundled();
        for lang in Language::ALL {
            assert!(registry.get(lang.asset_dir()).unwrap().is_dir());
            for file in lang.files() {
                let asset = registry.get(file.source).unwrap();
                assert!(!asset.is_dir());
                assert_eq!(path::join(lang.asset_dir(), file.destination), file.source);
            }
        }
    }

    #[test]
    fn test_names_and_aliases_are_unique() {
        let mut seen = Vec::new();
        for lang in Language::ALL {
            for name in std::iter::once(lang.name()).chain(lang.aliases().iter().copied()) {
                assert!(!seen.contains(&name), "duplicate language name {name}");
                seen.push(name);
            }
        }
    }
}
