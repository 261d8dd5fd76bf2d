use mercury_core::utils::filename::{
    base_name_and_extension, generate_unique_file_name, is_valid_file_name,
};
use mercury_core::utils::path::{join_paths, parent_path, split_path, strip_path};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_base_name_and_extension() {
    assert_eq!(base_name_and_extension("file.ext"), ("file", ".ext"));
    assert_eq!(base_name_and_extension("archive.tar.gz"), ("archive.tar", ".gz"));
    assert_eq!(base_name_and_extension("noext"), ("noext", ""));
    // A leading dot is not an extension separator
    assert_eq!(base_name_and_extension(".bashrc"), (".bashrc", ""));
    assert_eq!(base_name_and_extension(""), ("", ""));
}

#[test]
fn test_generate_unique_file_name_unused_passes_through() {
    let used = names(&["other.ext"]);
    assert_eq!(generate_unique_file_name("file.ext", &used), "file.ext");
    assert_eq!(generate_unique_file_name("file.ext", &[]), "file.ext");
}

#[test]
fn test_generate_unique_file_name_appends_counter() {
    let used = names(&["file.ext"]);
    assert_eq!(generate_unique_file_name("file.ext", &used), "file (1).ext");
}

#[test]
fn test_generate_unique_file_name_skips_taken_counters() {
    let used = names(&["file.ext", "file (1).ext", "file (2).ext"]);
    assert_eq!(generate_unique_file_name("file.ext", &used), "file (3).ext");
}

#[test]
fn test_generate_unique_file_name_without_extension() {
    let used = names(&["folder", "folder (1)"]);
    assert_eq!(generate_unique_file_name("folder", &used), "folder (2)");
}

#[test]
fn test_is_valid_file_name() {
    assert!(is_valid_file_name("report.csv"));
    assert!(is_valid_file_name(" padded "));

    assert!(!is_valid_file_name(""));
    assert!(!is_valid_file_name("   "));
    assert!(!is_valid_file_name("."));
    assert!(!is_valid_file_name(".."));
    assert!(!is_valid_file_name("a/b"));
    assert!(!is_valid_file_name("a\\b"));
}

#[test]
fn test_strip_path() {
    assert_eq!(strip_path("/a/b/"), "a/b");
    assert_eq!(strip_path("a/b"), "a/b");
    assert_eq!(strip_path("/"), "");
}

#[test]
fn test_split_path() {
    assert_eq!(split_path("/a//b/"), vec!["a", "b"]);
    assert_eq!(split_path("a/b/c"), vec!["a", "b", "c"]);
    assert!(split_path("/").is_empty());
}

#[test]
fn test_join_paths() {
    assert_eq!(join_paths(&["a", "b"]), "a/b");
    // A lone separator collapses so the result keeps a single leading slash
    assert_eq!(join_paths(&["/", "a"]), "/a");
}

#[test]
fn test_parent_path() {
    assert_eq!(parent_path("/coll/dir/file.txt"), "/coll/dir");
    assert_eq!(parent_path("/coll/dir/"), "/coll");
    assert_eq!(parent_path("/coll"), "");
    assert_eq!(parent_path("plain"), "");
}
