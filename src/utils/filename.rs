//! Filename utility functions
//!
//! Collision-free destination naming and the validity rules the storage
//! service enforces on path segments.

const NON_SAFE_FILE_NAME_CHARACTERS: [char; 2] = ['/', '\\'];
const NON_SAFE_FILE_NAMES: [&str; 2] = [".", ".."];

/// Split a filename at the last dot.
///
/// The extension includes the dot when present and is empty otherwise; a
/// leading dot (dotfile) does not count as an extension separator. That
/// keeps `"archive.tar" + " (1)" + ".gz"`-style reassembly trivial.
pub fn base_name_and_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => (&file_name[..pos], &file_name[pos..]),
        _ => (file_name, ""),
    }
}

/// Whether a single path segment is acceptable as a file or folder name.
pub fn is_valid_file_name(file_name: &str) -> bool {
    let name = file_name.trim();
    !name.is_empty()
        && !NON_SAFE_FILE_NAMES.contains(&name)
        && !name.contains(&NON_SAFE_FILE_NAME_CHARACTERS[..])
}

/// Pick a destination name that does not collide with any of `used_names`.
///
/// An unused name passes through unchanged; otherwise `" (n)"` is appended
/// before the extension with the smallest `n >= 1` that is free.
pub fn generate_unique_file_name(file_name: &str, used_names: &[String]) -> String {
    if !used_names.iter().any(|n| n == file_name) {
        return file_name.to_string();
    }

    let (base_name, extension) = base_name_and_extension(file_name);
    let mut counter = 1;
    let mut new_name = format!("{base_name} ({counter}){extension}");

    while used_names.iter().any(|n| n == &new_name) {
        counter += 1;
        new_name = format!("{base_name} ({counter}){extension}");
    }

    new_name
}
