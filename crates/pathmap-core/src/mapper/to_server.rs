//! Client path -> server file URI.

use crate::error::PathMapError;
use crate::mapping::PathMapping;
use crate::path_style::PathStyle;
use crate::uri::{lowercase_drive_letter, relativize, to_directory_url, to_file_url};

/// Converts a client path into the file URI the debugger knows it by.
///
/// The path is matched against the client roots of `path_mapping` in order. For the
/// first root containing it, the path's URI relative to the client root's URI is
/// resolved against the server root's URI. Unmapped paths become a plain `file://`
/// URI. Windows drive letters are always lowercased in the result, since debuggers
/// report them that way.
///
/// `local_path` must be absolute (`/...`, `C:\...` or `\\server\share\...`);
/// anything else is rejected with [`PathMapError::InvalidFilePath`].
pub fn convert_client_path_to_debugger(
    local_path: &str,
    path_mapping: Option<&PathMapping>,
) -> Result<String, PathMapError> {
    let client_style = PathStyle::detect(local_path);
    if !client_style.is_absolute(local_path) {
        return Err(PathMapError::InvalidFilePath {
            path: local_path.to_string(),
        });
    }
    let local_file_url = to_file_url(&lowercase_drive_letter(local_path))?;

    let matched = path_mapping
        .into_iter()
        .flat_map(|mapping| mapping.iter())
        .find_map(|(server_root, client_root)| {
            let rel = client_style.strip_root(client_root, local_path);
            if rel.is_none() {
                tracing::trace!(client_root, local_path, "client root does not contain path");
            }
            rel.map(|rel| (server_root, client_root, rel))
        });

    let (server_root, client_root, rel) = match matched {
        Some(found) => found,
        None => return Ok(local_file_url.into()),
    };

    let client_root_url = to_directory_url(&lowercase_drive_letter(client_root))?;
    let server_root_url = to_directory_url(&lowercase_drive_letter(server_root))?;

    let server_url = if rel.is_empty() {
        server_root_url
    } else {
        // Respell the path with the root's casing so a case-insensitive match on a
        // Windows client still relativizes below the root.
        let mut rooted = client_style.resolve(client_root, &rel);
        if local_path.ends_with(&['/', '\\'][..]) {
            rooted.push(client_style.separator());
        }
        let file_url = to_file_url(&lowercase_drive_letter(&rooted))?;
        let reference = relativize(client_root_url.as_str(), file_url.as_str())?;
        server_root_url
            .join(&reference)
            .map_err(|source| PathMapError::InvalidUri {
                uri: reference,
                source,
            })?
    };

    tracing::debug!(
        server_root,
        client_root,
        local_path,
        uri = %server_url,
        "mapped client path to debugger"
    );
    Ok(server_url.into())
}
