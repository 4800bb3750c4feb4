//! Server file URI -> client path.

use url::Url;

use crate::error::PathMapError;
use crate::mapping::PathMapping;
use crate::path_style::{has_drive_root, PathStyle};
use crate::uri::decode_uri_path;

/// Converts a file URI reported by the debugger into a path on the client.
///
/// See [`convert_debugger_url_to_client`]; this variant parses `file_uri` first.
pub fn convert_debugger_path_to_client(
    file_uri: &str,
    path_mapping: Option<&PathMapping>,
) -> Result<String, PathMapError> {
    let url = Url::parse(file_uri).map_err(|source| PathMapError::InvalidUri {
        uri: file_uri.to_string(),
        source,
    })?;
    convert_debugger_url_to_client(&url, path_mapping)
}

/// Converts an already parsed debugger file URI into a client path.
///
/// The decoded URI path is matched against the server roots of `path_mapping` in
/// order; the first root containing it is replaced by its client root. A path
/// like `/C:/x` marks a Windows server and switches matching to Windows rules.
/// Without a matching root the decoded path is only normalized.
pub fn convert_debugger_url_to_client(
    file_uri: &Url,
    path_mapping: Option<&PathMapping>,
) -> Result<String, PathMapError> {
    if file_uri.scheme() != "file" {
        return Err(PathMapError::NotAFileUri {
            uri: file_uri.to_string(),
        });
    }

    let mut server_path = decode_uri_path(file_uri.path());
    let server_is_windows = is_windows_server_path(&server_path);
    if server_is_windows {
        server_path.remove(0);
    }
    let server_style = if server_is_windows {
        PathStyle::Windows
    } else {
        PathStyle::Posix
    };

    let matched = path_mapping
        .into_iter()
        .flat_map(|mapping| mapping.iter())
        .find_map(|(server_root, client_root)| {
            let server_root = if server_is_windows {
                strip_drive_slash(server_root)
            } else {
                server_root
            };
            let rel = server_style.strip_root(server_root, &server_path);
            if rel.is_none() {
                tracing::trace!(server_root, server_path = %server_path, "server root does not contain path");
            }
            rel.map(|rel| (server_root, client_root, rel))
        });

    let client_path = match matched {
        Some((server_root, client_root, rel)) => {
            let client_style = PathStyle::detect(client_root);
            let rel = server_style.convert_separators(&rel, client_style);
            let client_path = client_style.resolve(client_root, &rel);
            tracing::debug!(
                server_root,
                client_root,
                uri = %file_uri,
                client_path = %client_path,
                "mapped debugger path to client"
            );
            client_path
        }
        None => server_style.normalize(&server_path),
    };

    Ok(client_path)
}

/// `/X:/...`: the URI path of a file on a Windows drive.
fn is_windows_server_path(path: &str) -> bool {
    path.strip_prefix('/').is_some_and(has_drive_root) && path.as_bytes()[3] == b'/'
}

/// Mapping keys are often written the way the URI spells them (`/C:/inetpub`).
fn strip_drive_slash(root: &str) -> &str {
    match root.strip_prefix('/') {
        Some(rest) if has_drive_root(rest) => rest,
        _ => root,
    }
}
