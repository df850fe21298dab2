//! Path utilities
//!
//! Pure string helpers for POSIX-like paths. None of these touch the tree.

pub const ROOT: &str = "/";

/// Canonicalize `path`, resolving it against `cwd` when relative.
///
/// The result is either `/` or `/`-joined non-empty segments with no `.`
/// segments and no trailing slash. `..` pops the previous segment and is a
/// no-op at the root. An empty path resolves to `cwd`.
pub fn normalize(path: &str, cwd: &str) -> String {
    let joined;
    let absolute = if path.starts_with('/') {
        path
    } else {
        joined = format!("{}/{}", cwd, path);
        &joined
    };

    let mut resolved: Vec<&str> = Vec::new();
    for part in absolute.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }

    if resolved.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Parent of a normalized path. The root is its own parent.
pub fn parent_path(normalized: &str) -> &str {
    match normalized.rfind('/') {
        Some(0) | None => ROOT,
        Some(pos) => &normalized[..pos],
    }
}

/// Final segment of a normalized path; empty for the root.
pub fn file_name(normalized: &str) -> &str {
    match normalized.rfind('/') {
        Some(pos) => &normalized[pos + 1..],
        None => normalized,
    }
}

/// Join a normalized directory path with a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir == ROOT {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Segments of a normalized path, root first.
pub fn segments(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split('/').filter(|s| !s.is_empty())
}

/// True when `path` equals `ancestor` or lies beneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor == ROOT {
        return true;
    }
    path == ancestor
        || (path.starts_with(ancestor) && path.as_bytes().get(ancestor.len()) == Some(&b'/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absolute() {
        assert_eq!(normalize("/foo/bar", "/"), "/foo/bar");
        assert_eq!(normalize("/", "/home"), "/");
        assert_eq!(normalize("/foo/bar/", "/"), "/foo/bar");
        assert_eq!(normalize("//foo///bar", "/"), "/foo/bar");
    }

    #[test]
    fn test_normalize_dots() {
        assert_eq!(normalize("/foo/./bar", "/"), "/foo/bar");
        assert_eq!(normalize("/foo/bar/../baz", "/"), "/foo/baz");
        assert_eq!(normalize("/..", "/"), "/");
        assert_eq!(normalize("/foo/../../bar", "/"), "/bar");
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize("docs", "/home/guest"), "/home/guest/docs");
        assert_eq!(normalize("..", "/home/guest"), "/home");
        assert_eq!(normalize("../../..", "/home/guest"), "/");
        assert_eq!(normalize(".", "/home/guest"), "/home/guest");
        assert_eq!(normalize("", "/home/guest"), "/home/guest");
        assert_eq!(normalize("a/b/", "/"), "/a/b");
    }

    #[test]
    fn test_normalize_idempotent() {
        let cases = ["", ".", "..", "a/../b", "/x/./y/../z/", "//a//b//", "../q", "/"];
        for case in cases {
            let once = normalize(case, "/home/guest");
            assert_eq!(normalize(&once, "/home/guest"), once, "input {:?}", case);
            assert_eq!(normalize(&once, "/elsewhere"), once, "input {:?}", case);
        }
    }

    #[test]
    fn test_parent_and_name() {
        assert_eq!(parent_path("/"), "/");
        assert_eq!(parent_path("/foo"), "/");
        assert_eq!(parent_path("/foo/bar"), "/foo");
        assert_eq!(file_name("/"), "");
        assert_eq!(file_name("/foo"), "foo");
        assert_eq!(file_name("/foo/bar.txt"), "bar.txt");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", "etc"), "/etc");
        assert_eq!(join("/etc", "motd"), "/etc/motd");
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/a/b", "/a"));
        assert!(is_within("/a", "/a"));
        assert!(!is_within("/ab", "/a"));
        assert!(is_within("/anything", "/"));
    }
}
