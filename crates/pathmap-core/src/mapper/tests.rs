//! Tests for both conversion directions and URI equality.

use url::Url;

use super::*;
use crate::error::PathMapError;
use crate::mapping::PathMapping;

fn mapping(pairs: &[(&str, &str)]) -> PathMapping {
    pairs.iter().copied().collect()
}

fn to_client(uri: &str, map: Option<&PathMapping>) -> String {
    convert_debugger_path_to_client(uri, map).unwrap()
}

fn to_server(path: &str, map: Option<&PathMapping>) -> String {
    convert_client_path_to_debugger(path, map).unwrap()
}

// --- debugger -> client ---

#[test]
fn to_client_without_mapping_is_normalized_path() {
    assert_eq!(to_client("file:///var/www/src/a.php", None), "/var/www/src/a.php");
    assert_eq!(to_client("file:///var/www/./src/../a.php", None), "/var/www/a.php");
    assert_eq!(to_client("file:///var/www/my%20site/a.php", None), "/var/www/my site/a.php");
}

#[test]
fn to_client_empty_mapping_behaves_like_none() {
    let empty = PathMapping::new();
    assert_eq!(
        to_client("file:///var/www/src/a.php", Some(&empty)),
        to_client("file:///var/www/src/a.php", None)
    );
}

#[test]
fn to_client_windows_without_mapping() {
    assert_eq!(
        to_client("file:///C:/inetpub/site/index.php", None),
        "C:\\inetpub\\site\\index.php"
    );
}

#[test]
fn to_client_posix_root() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    assert_eq!(
        to_client("file:///var/www/src/a.php", Some(&map)),
        "/home/user/project/src/a.php"
    );
}

#[test]
fn to_client_windows_server_windows_client() {
    let map = mapping(&[("/C:/inetpub", "C:\\wamp\\www")]);
    assert_eq!(
        to_client("file:///C:/inetpub/site/index.php", Some(&map)),
        "C:\\wamp\\www\\site\\index.php"
    );
}

#[test]
fn to_client_windows_drive_letters_ignore_case() {
    let map = mapping(&[("c:\\Inetpub", "C:\\wamp\\www")]);
    assert_eq!(
        to_client("file:///C:/inetpub/site/index.php", Some(&map)),
        "C:\\wamp\\www\\site\\index.php"
    );
}

#[test]
fn to_client_windows_server_posix_client() {
    let map = mapping(&[("C:\\inetpub", "/home/me/site")]);
    assert_eq!(
        to_client("file:///c:/inetpub/sub/index.php", Some(&map)),
        "/home/me/site/sub/index.php"
    );
}

#[test]
fn to_client_posix_server_windows_client() {
    let map = mapping(&[("/var/www", "C:\\Users\\me\\site")]);
    assert_eq!(
        to_client("file:///var/www/src/a.php", Some(&map)),
        "C:\\Users\\me\\site\\src\\a.php"
    );
}

#[test]
fn to_client_first_match_wins() {
    let map = mapping(&[("/var/www/sub", "/specific"), ("/var/www", "/general")]);
    assert_eq!(to_client("file:///var/www/sub/x.php", Some(&map)), "/specific/x.php");
    assert_eq!(to_client("file:///var/www/other/x.php", Some(&map)), "/general/other/x.php");

    // order is the caller's: a broader root listed first shadows the narrower one
    let reversed = mapping(&[("/var/www", "/general"), ("/var/www/sub", "/specific")]);
    assert_eq!(to_client("file:///var/www/sub/x.php", Some(&reversed)), "/general/sub/x.php");
}

#[test]
fn to_client_exact_root_maps_to_client_root() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    assert_eq!(to_client("file:///var/www", Some(&map)), "/home/user/project");
    assert_eq!(to_client("file:///var/www/", Some(&map)), "/home/user/project");
}

#[test]
fn to_client_sibling_prefix_does_not_match() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    assert_eq!(to_client("file:///var/wwwroot/a.php", Some(&map)), "/var/wwwroot/a.php");
}

#[test]
fn to_client_parsed_url() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    let url = Url::parse("file:///var/www/a.php").unwrap();
    assert_eq!(
        convert_debugger_url_to_client(&url, Some(&map)).unwrap(),
        "/home/user/project/a.php"
    );
}

#[test]
fn to_client_rejects_malformed_input() {
    assert!(matches!(
        convert_debugger_path_to_client("not a uri", None),
        Err(PathMapError::InvalidUri { .. })
    ));
    assert!(matches!(
        convert_debugger_path_to_client("http://example.com/a.php", None),
        Err(PathMapError::NotAFileUri { .. })
    ));
}

// --- client -> debugger ---

#[test]
fn to_server_without_mapping_is_file_uri() {
    assert_eq!(to_server("/home/user/a.php", None), "file:///home/user/a.php");
    assert_eq!(to_server("/home/user/my site/a.php", None), "file:///home/user/my%20site/a.php");
}

#[test]
fn to_server_lowercases_drive_letter() {
    assert_eq!(
        to_server("C:\\Users\\me\\index.php", None),
        "file:///c:/Users/me/index.php"
    );
}

#[test]
fn to_server_posix_root() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    assert_eq!(
        to_server("/home/user/project/src/a.php", Some(&map)),
        "file:///var/www/src/a.php"
    );
}

#[test]
fn to_server_windows_client_windows_server() {
    let map = mapping(&[("/C:/inetpub", "C:\\wamp\\www")]);
    assert_eq!(
        to_server("C:\\wamp\\www\\site\\index.php", Some(&map)),
        "file:///c:/inetpub/site/index.php"
    );
    let map = mapping(&[("C:\\inetpub", "C:\\wamp\\www")]);
    assert_eq!(
        to_server("C:\\wamp\\www\\site\\index.php", Some(&map)),
        "file:///c:/inetpub/site/index.php"
    );
}

#[test]
fn to_server_windows_client_matches_root_case_insensitively() {
    let map = mapping(&[("/var/www", "C:\\Wamp\\WWW")]);
    assert_eq!(
        to_server("c:\\wamp\\www\\site\\index.php", Some(&map)),
        "file:///var/www/site/index.php"
    );
}

#[test]
fn to_server_windows_client_posix_server() {
    let map = mapping(&[("/var/www", "C:\\Users\\me\\site")]);
    assert_eq!(
        to_server("C:\\Users\\me\\site\\src\\a.php", Some(&map)),
        "file:///var/www/src/a.php"
    );
}

#[test]
fn to_server_first_match_wins() {
    let map = mapping(&[("/srv/vendor", "/home/me/site/vendor"), ("/var/www", "/home/me/site")]);
    assert_eq!(
        to_server("/home/me/site/vendor/lib.php", Some(&map)),
        "file:///srv/vendor/lib.php"
    );
    assert_eq!(to_server("/home/me/site/index.php", Some(&map)), "file:///var/www/index.php");
}

#[test]
fn to_server_exact_root_maps_to_server_root() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    assert_eq!(to_server("/home/user/project", Some(&map)), "file:///var/www/");
    assert_eq!(to_server("/home/user/project/", Some(&map)), "file:///var/www/");
}

#[test]
fn to_server_unmapped_path_is_plain_uri() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    assert_eq!(
        to_server("/home/user/projects/a.php", Some(&map)),
        "file:///home/user/projects/a.php"
    );
}

#[test]
fn to_server_encodes_special_characters() {
    let map = mapping(&[("/var/www", "/home/user/my project")]);
    assert_eq!(
        to_server("/home/user/my project/a b#1.php", Some(&map)),
        "file:///var/www/a%20b%231.php"
    );
}

#[test]
fn to_server_rejects_relative_path() {
    for path in ["src/a.php", "./a.php", "C:a.php"] {
        assert!(
            matches!(
                convert_client_path_to_debugger(path, None),
                Err(PathMapError::InvalidFilePath { .. })
            ),
            "{path}"
        );
    }
    let map = mapping(&[("/var/www", "/src")]);
    assert!(matches!(
        convert_client_path_to_debugger("src/a.php", Some(&map)),
        Err(PathMapError::InvalidFilePath { .. })
    ));
}

#[test]
fn to_server_unc_path_keeps_server_as_host() {
    assert_eq!(
        to_server("\\\\srv\\share\\www\\a.php", None),
        "file://srv/share/www/a.php"
    );
}

#[test]
fn to_server_unc_root_mapping() {
    let map = mapping(&[("/var/www", "\\\\srv\\share\\www")]);
    assert_eq!(
        to_server("\\\\srv\\share\\www\\site\\a.php", Some(&map)),
        "file:///var/www/site/a.php"
    );
}

// --- round trips ---

#[test]
fn client_server_client_round_trip() {
    let map = mapping(&[("/var/www", "/home/user/project")]);
    let local = "/home/user/project/src/deep/a.php";
    let uri = to_server(local, Some(&map));
    assert_eq!(to_client(&uri, Some(&map)), local);
}

#[test]
fn windows_round_trip_modulo_drive_case() {
    let map = mapping(&[("/C:/inetpub", "C:\\wamp\\www")]);
    let local = "C:\\wamp\\www\\site\\my page.php";
    let uri = to_server(local, Some(&map));
    assert_eq!(uri, "file:///c:/inetpub/site/my%20page.php");
    assert_eq!(to_client(&uri, Some(&map)), local);
}

// --- equality ---

#[test]
fn same_uri_rules() {
    assert!(is_same_uri("file:///C:/Foo/Bar.php", "file:///c:/foo/bar.php"));
    assert!(!is_same_uri("file:///home/Foo.php", "file:///home/foo.php"));
}
