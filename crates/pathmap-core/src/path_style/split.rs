//! Root/segment splitting shared by both path styles.

use super::PathStyle;

/// A path broken into its root prefix and its non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SplitPath<'a> {
    /// `"/"` for POSIX, `"C:\"`, `"\\server\share\"` or `"\"` for Windows; empty when relative.
    pub root: String,
    pub segments: Vec<&'a str>,
    pub trailing_separator: bool,
}

impl<'a> SplitPath<'a> {
    pub fn is_absolute(&self, style: PathStyle) -> bool {
        match style {
            PathStyle::Posix => self.root == "/",
            PathStyle::Windows => self.root.ends_with('\\') && self.root.len() > 1,
        }
    }
}

pub(super) fn split(style: PathStyle, path: &str) -> SplitPath<'_> {
    let (root, rest) = match style {
        PathStyle::Posix => split_posix_root(path),
        PathStyle::Windows => split_windows_root(path),
    };
    let segments = rest
        .split(|c: char| style.is_separator(c))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    let trailing_separator = rest.chars().last().is_some_and(|c| style.is_separator(c));
    SplitPath {
        root,
        segments,
        trailing_separator,
    }
}

fn split_posix_root(path: &str) -> (String, &str) {
    match path.strip_prefix('/') {
        Some(rest) => ("/".to_string(), rest),
        None => (String::new(), path),
    }
}

fn split_windows_root(path: &str) -> (String, &str) {
    let bytes = path.as_bytes();
    let is_sep = |b: u8| b == b'\\' || b == b'/';

    // \\server\share\
    if bytes.len() >= 2 && is_sep(bytes[0]) && is_sep(bytes[1]) {
        let rest = &path[2..];
        let mut parts = rest.splitn(3, |c: char| c == '\\' || c == '/');
        let server = parts.next().unwrap_or_default();
        let share = parts.next().unwrap_or_default();
        if !server.is_empty() && !share.is_empty() {
            let consumed = 2 + server.len() + 1 + share.len();
            let remainder = path.get(consumed..).unwrap_or_default();
            return (format!("\\\\{server}\\{share}\\"), remainder);
        }
    }

    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let drive = &path[..2];
        if bytes.len() >= 3 && is_sep(bytes[2]) {
            return (format!("{drive}\\"), &path[3..]);
        }
        return (drive.to_string(), &path[2..]);
    }

    if !bytes.is_empty() && is_sep(bytes[0]) {
        return ("\\".to_string(), &path[1..]);
    }

    (String::new(), path)
}

/// Collapses `.` and `..` segments. `..` above an absolute root is dropped; above a
/// relative root it is kept.
pub(super) fn collapse<'a>(segments: &[&'a str], absolute: bool) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = Vec::with_capacity(segments.len());
    for seg in segments {
        match *seg {
            "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                _ if absolute => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
