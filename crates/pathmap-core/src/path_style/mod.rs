//! OS-aware path algebra over plain strings.
//!
//! The mapper never touches the real filesystem and must handle paths from an
//! operating system other than the one it runs on, so `std::path` (which is tied to
//! the host OS) is not used here. Both styles are implemented over `&str`:
//!
//! - [`PathStyle::Posix`]: `/` separator, case-sensitive, root `/`.
//! - [`PathStyle::Windows`]: `\` or `/` accepted as separators, `\` emitted,
//!   case-insensitive comparison, roots `C:\` and `\\server\share\`.
//!
//! Paths are expected to be absolute. A relative POSIX path is treated as if it
//! were rooted at `/`.

mod split;

use split::{collapse, split, SplitPath};

/// Which operating system's path rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    Posix,
    Windows,
}

impl PathStyle {
    /// Sniffs a native path: `C:\...`, `C:/...` and UNC `\\server\...` are Windows,
    /// everything else is POSIX.
    pub fn detect(path: &str) -> Self {
        if has_drive_root(path) || path.starts_with("\\\\") {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    /// Separator emitted when joining.
    pub fn separator(self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }

    pub fn is_absolute(self, path: &str) -> bool {
        split(self, path).is_absolute(self)
    }

    /// Collapses `.` and `..`, repeated separators and (on Windows) forward slashes.
    /// A trailing separator is kept; an empty relative result becomes `.`.
    pub fn normalize(self, path: &str) -> String {
        let parts = split(self, path);
        let segments = collapse(&parts.segments, !parts.root.is_empty());
        let mut out = self.join_root(&parts.root, &segments);
        if out.is_empty() {
            return ".".to_string();
        }
        if parts.trailing_separator && !segments.is_empty() {
            out.push(self.separator());
        }
        out
    }

    /// Resolves `relative` against the absolute `base`. An absolute `relative` wins
    /// outright. The result carries no trailing separator unless it is a root.
    pub fn resolve(self, base: &str, relative: &str) -> String {
        let rel = split(self, relative);
        if rel.is_absolute(self) {
            let segments = collapse(&rel.segments, true);
            return self.join_root(&rel.root, &segments);
        }

        let base = self.absolutize(split(self, base));
        let (root, mut segments) = match rel.root.as_str() {
            "" => (base.root.clone(), base.segments.clone()),
            "\\" => (drive_root_of(&base.root), Vec::new()),
            // drive-relative `C:foo`
            drive => (format!("{drive}\\"), Vec::new()),
        };
        segments.extend(rel.segments.iter().copied());
        let segments = collapse(&segments, true);
        let out = self.join_root(&root, &segments);
        if out.is_empty() {
            ".".to_string()
        } else {
            out
        }
    }

    /// Relative path from `from` to `to`. Empty when both name the same location.
    /// When the two paths live under different roots (another drive or share) the
    /// normalized `to` is returned unchanged, which is absolute.
    pub fn relative(self, from: &str, to: &str) -> String {
        let from = self.absolutize(split(self, from));
        let to = self.absolutize(split(self, to));
        let from_segments = collapse(&from.segments, true);
        let to_segments = collapse(&to.segments, true);

        if !self.same_segment(&from.root, &to.root) {
            return self.join_root(&to.root, &to_segments);
        }

        let common = from_segments
            .iter()
            .zip(to_segments.iter())
            .take_while(|(a, b)| self.same_segment(a, b))
            .count();

        let parts = std::iter::repeat("..")
            .take(from_segments.len() - common)
            .chain(to_segments[common..].iter().copied())
            .collect::<Vec<_>>();
        parts.join(&self.separator().to_string())
    }

    /// Returns the path of `path` relative to `root` when `path` is `root` itself or
    /// lies below it, `None` otherwise.
    pub fn strip_root(self, root: &str, path: &str) -> Option<String> {
        let rel = self.relative(root, path);
        if self.is_absolute(&rel) || split(self, &rel).segments.first() == Some(&"..") {
            return None;
        }
        Some(rel)
    }

    /// Rewrites the separators of a relative path produced under `self` into the
    /// separators of `target`.
    pub fn convert_separators(self, relative: &str, target: PathStyle) -> String {
        match (self, target) {
            (PathStyle::Windows, PathStyle::Posix) => relative.replace('\\', "/"),
            (PathStyle::Posix, PathStyle::Windows) => relative.replace('/', "\\"),
            _ => relative.to_string(),
        }
    }

    fn absolutize<'a>(self, mut parts: SplitPath<'a>) -> SplitPath<'a> {
        if self == PathStyle::Posix && parts.root.is_empty() {
            parts.root = "/".to_string();
        }
        parts
    }

    fn join_root(self, root: &str, segments: &[&str]) -> String {
        let mut out = root.to_string();
        out.push_str(&segments.join(&self.separator().to_string()));
        out
    }

    fn same_segment(self, a: &str, b: &str) -> bool {
        match self {
            PathStyle::Posix => a == b,
            PathStyle::Windows => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// `C:\` or `C:/` at the start of `path`.
pub fn has_drive_root(path: &str) -> bool {
    let b = path.as_bytes();
    b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && (b[2] == b'\\' || b[2] == b'/')
}

fn drive_root_of(root: &str) -> String {
    let b = root.as_bytes();
    if b.len() >= 2 && b[1] == b':' {
        format!("{}\\", &root[..2])
    } else {
        root.to_string()
    }
}
