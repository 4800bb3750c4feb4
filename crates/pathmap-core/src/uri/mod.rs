//! URI helpers used by the mapper: file URI construction, path decoding,
//! relativization and equality.

mod decode;
mod equals;
mod file_url;
mod relative;

pub use decode::decode_uri_path;
pub use equals::{is_same_uri, is_windows_file_uri};
pub use file_url::{lowercase_drive_letter, to_directory_url, to_file_url};
pub use relative::{relativize, relativize_with, RelativeUrlOptions, RELATIVE_URL_OPTIONS};
