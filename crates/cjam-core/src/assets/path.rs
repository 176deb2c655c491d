//! Lexical cleaning of virtual asset paths.
//!
//! Virtual paths are POSIX-style strings that never touch the real filesystem, so
//! [`std::path::Path`] is the wrong tool here: it follows platform separators and
//! does not collapse `..`. These helpers work purely on the string.

/// Return the shortest path equivalent to `path` by purely lexical processing.
///
/// - repeated slashes collapse to one
/// - `.` elements are removed
/// - `..` removes the preceding non-`..` element; at the root it is dropped
/// - trailing slashes are removed, except for the root itself
///
/// An empty input cleans to `"."`. A relative path stays relative, so `golang/main.go`
/// does not match the registered `/golang/main.go`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Return the last element of `path`, ignoring trailing slashes.
///
/// `"/"` yields `"/"` and an empty path yields `"."`.
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Join a directory prefix and a name, then clean the result.
pub fn join(prefix: &str, name: &str) -> String {
    clean(&format!("{}/{}", prefix.trim_end_matches('/'), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_already_clean() {
        assert_eq!(clean("/golang/main.go"), "/golang/main.go");
        assert_eq!(clean("/"), "/");
    }

    #[test]
    fn test_clean_collapses_slashes_and_dots() {
        assert_eq!(clean("//golang///./main.go"), "/golang/main.go");
        assert_eq!(clean("/golang/"), "/golang");
        assert_eq!(clean("/./"), "/");
    }

    #[test]
    fn test_clean_parent_elements() {
        assert_eq!(clean("/py27/../golang/main.go"), "/golang/main.go");
        assert_eq!(clean("/../../golang"), "/golang");
        assert_eq!(clean("a/../../b"), "../b");
        assert_eq!(clean("a/.."), ".");
    }

    #[test]
    fn test_clean_relative_stays_relative() {
        assert_eq!(clean("golang/main.go"), "golang/main.go");
        assert_eq!(clean(""), ".");
    }

    #[test]
    fn test_base() {
        assert_eq!(base("/golang/main.go"), "main.go");
        assert_eq!(base("/golang/"), "golang");
        assert_eq!(base("/"), "/");
        assert_eq!(base("solver.py"), "solver.py");
        assert_eq!(base(""), ".");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/golang", "main.go"), "/golang/main.go");
        assert_eq!(join("/golang/", "/main.go"), "/golang/main.go");
        assert_eq!(join("/golang", "../py27/solver.py"), "/py27/solver.py");
    }
}
