//! Client/debugger URI equality.

/// Whether `uri` starts with `file:///X:/`, i.e. names a file on a Windows drive.
pub fn is_windows_file_uri(uri: &str) -> bool {
    match uri.strip_prefix("file:///") {
        Some(rest) => {
            let b = rest.as_bytes();
            b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && b[2] == b'/'
        }
        None => false,
    }
}

/// Compares a URI known to the client with one reported by the debugger.
///
/// Windows file systems ignore case and debuggers are free to change the case of
/// drive letters and segments, so when either side looks like a Windows file URI the
/// comparison ignores case. Anything else must match exactly.
pub fn is_same_uri(client_uri: &str, debugger_uri: &str) -> bool {
    if is_windows_file_uri(client_uri) || is_windows_file_uri(debugger_uri) {
        client_uri.to_lowercase() == debugger_uri.to_lowercase()
    } else {
        client_uri == debugger_uri
    }
}
