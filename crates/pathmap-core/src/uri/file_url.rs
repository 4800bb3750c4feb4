//! `file://` URI construction from native paths, without consulting the filesystem.

use std::borrow::Cow;

use url::Url;

use crate::error::PathMapError;

/// Builds a `file://` URI from a native path taken as already absolute.
///
/// Backslashes become `/`, a leading `/` is added when missing (so `c:\x` becomes
/// `file:///c:/x`), a UNC server becomes the URI host (`\\srv\share\x` becomes
/// `file://srv/share/x`), and characters that would otherwise start a query, a fragment or
/// an escape (`?`, `#`, `%`) are escaped. The remaining percent-encoding is done by
/// the URL parser. The working directory is never used.
pub fn to_file_url(path: &str) -> Result<Url, PathMapError> {
    let mut slashed = path.replace('\\', "/");
    let is_unc = path.starts_with("\\\\");
    if !slashed.starts_with('/') {
        slashed.insert(0, '/');
    }
    let escaped = slashed
        .replace('%', "%25")
        .replace('?', "%3F")
        .replace('#', "%23");

    // `//srv/share/x` already carries the authority
    let uri = if is_unc {
        format!("file:{escaped}")
    } else {
        format!("file://{escaped}")
    };
    Url::parse(&uri).map_err(|_| PathMapError::InvalidFilePath {
        path: path.to_string(),
    })
}

/// Same as [`to_file_url`] with a `/` appended when missing, so the URI names a
/// directory for relativization.
pub fn to_directory_url(path: &str) -> Result<Url, PathMapError> {
    let mut url = to_file_url(path)?;
    if !url.path().ends_with('/') {
        let with_slash = format!("{}/", url.path());
        url.set_path(&with_slash);
    }
    Ok(url)
}

/// Lowercases the drive letter of `C:\...`, `C:/...` or `/C:/...`; other paths are
/// returned untouched.
pub fn lowercase_drive_letter(path: &str) -> Cow<'_, str> {
    let offset = usize::from(path.starts_with('/'));
    let b = path.as_bytes();
    let is_drive = b.len() >= offset + 3
        && b[offset].is_ascii_uppercase()
        && b[offset + 1] == b':'
        && (b[offset + 2] == b'\\' || b[offset + 2] == b'/');
    if !is_drive {
        return Cow::Borrowed(path);
    }
    let mut owned = path.to_string();
    owned[offset..offset + 1].make_ascii_lowercase();
    Cow::Owned(owned)
}
