//! Relative references between absolute URIs.

use url::Url;

use crate::error::RelativizeError;

/// Knobs for [`relativize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeUrlOptions {
    /// Only ever emit a path-relative reference (`../x`), never a root-relative one
    /// (`/x`) even when that would be shorter.
    pub path_relative_only: bool,
    /// Treat a base ending in `/` as if the slash were absent.
    pub remove_root_trailing_slash: bool,
    /// Consider `http://h:80/` and `http://h/` the same origin.
    pub remove_default_ports: bool,
}

/// The options every mapping conversion uses.
pub const RELATIVE_URL_OPTIONS: RelativeUrlOptions = RelativeUrlOptions {
    path_relative_only: true,
    remove_root_trailing_slash: false,
    remove_default_ports: false,
};

/// Relative reference that, resolved against `base`, yields `target`. Uses
/// [`RELATIVE_URL_OPTIONS`].
pub fn relativize(base: &str, target: &str) -> Result<String, RelativizeError> {
    relativize_with(base, target, &RELATIVE_URL_OPTIONS)
}

/// Relative reference that, resolved against `base`, yields `target`.
///
/// When the two URIs do not share scheme and authority no relative form exists and
/// `target` is returned in absolute form.
pub fn relativize_with(
    base: &str,
    target: &str,
    options: &RelativeUrlOptions,
) -> Result<String, RelativizeError> {
    let base_url = parse(base)?;
    let target_url = parse(target)?;
    if base_url.cannot_be_a_base() {
        return Err(RelativizeError::CannotBeABase {
            uri: base.to_string(),
        });
    }

    if !same_origin(base, &base_url, target, &target_url, options) || target_url.cannot_be_a_base() {
        return Ok(target_url.to_string());
    }

    let mut base_path = base_url.path();
    if options.remove_root_trailing_slash && base_path.len() > 1 {
        base_path = base_path.trim_end_matches('/');
    }
    let target_path = target_url.path();

    let base_segments = path_segments(base_path);
    let target_segments = path_segments(target_path);
    let base_dir = &base_segments[..base_segments.len().saturating_sub(1)];
    let (file, target_dir) = match target_segments.split_last() {
        Some((file, dir)) => (*file, dir),
        None => ("", &[][..]),
    };

    let common = base_dir
        .iter()
        .zip(target_dir.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    parts.extend(std::iter::repeat("..").take(base_dir.len() - common));
    parts.extend(target_dir[common..].iter().copied());
    parts.push(file);
    let mut reference = parts.join("/");

    let same_document = base_path == target_path;
    if reference.is_empty() {
        if !same_document {
            reference.push_str("./");
        } else if base_url.query().is_some() && target_url.query().is_none() {
            // an empty reference would inherit the base query
            reference.push_str(if file.is_empty() { "./" } else { file });
        }
    }

    // `c:/x` would otherwise read as a URI with scheme `c`
    let first = reference.split('/').next().unwrap_or_default();
    if first.contains(':') {
        reference.insert_str(0, "./");
    }

    if !options.path_relative_only && target_path.len() < reference.len() {
        reference = target_path.to_string();
    }

    if let Some(query) = target_url.query() {
        if !(same_document && reference.is_empty() && base_url.query() == Some(query)) {
            reference.push('?');
            reference.push_str(query);
        }
    }
    if let Some(fragment) = target_url.fragment() {
        reference.push('#');
        reference.push_str(fragment);
    }

    Ok(reference)
}

fn parse(uri: &str) -> Result<Url, RelativizeError> {
    Url::parse(uri).map_err(|source| RelativizeError::InvalidUri {
        uri: uri.to_string(),
        source,
    })
}

/// Segments after the leading `/`; a trailing `/` yields a final empty segment.
fn path_segments(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

fn same_origin(
    base: &str,
    base_url: &Url,
    target: &str,
    target_url: &Url,
    options: &RelativeUrlOptions,
) -> bool {
    if base_url.scheme() != target_url.scheme() {
        return false;
    }
    if options.remove_default_ports {
        return base_url.host_str() == target_url.host_str()
            && base_url.port_or_known_default() == target_url.port_or_known_default()
            && base_url.username() == target_url.username()
            && base_url.password() == target_url.password();
    }
    // The parser drops default ports, so compare the authority as written.
    match (raw_authority(base), raw_authority(target)) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        (None, None) => true,
        _ => false,
    }
}

/// The `user@host:port` part of `scheme://user@host:port/path`, as written.
fn raw_authority(uri: &str) -> Option<&str> {
    let (_, rest) = uri.split_once(':')?;
    let rest = rest.strip_prefix("//")?;
    let end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
    Some(&rest[..end])
}
