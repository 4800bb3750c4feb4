//! Percent-decoding of URI paths.

/// Characters whose escapes are left encoded, so that e.g. `%2F` inside a segment
/// does not turn into a separator.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Decodes `%XX` escapes in a URI path the way a browser's `decodeURI` does:
/// escapes of reserved characters are kept verbatim, malformed escapes are passed
/// through, and invalid UTF-8 is replaced.
pub fn decode_uri_path(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                let decoded = high << 4 | low;
                if RESERVED.contains(&decoded) {
                    out.extend_from_slice(&bytes[i..i + 3]);
                } else {
                    out.push(decoded);
                }
                i += 3;
                continue;
            }
        }
        out.push(b);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
