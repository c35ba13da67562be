//! Output path naming for image operations.

use std::path::{Path, PathBuf};

/// Longest slice of the watermark text carried into the file name.
const MAX_SUFFIX_CONTENT: usize = 20;

/// Characters that cannot appear in a file name on common filesystems.
fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Derive the output path for a watermarked image: the watermark text,
/// stripped of invalid characters and truncated, is inserted between the
/// file stem and extension as `-wm_{text}_`.
pub fn watermark_path(path: &Path, text: &str) -> PathBuf {
    let safe: String = text
        .chars()
        .filter(|c| !is_invalid_file_name_char(*c))
        .take(MAX_SUFFIX_CONTENT)
        .collect();

    insert_suffix(path, &format!("-wm_{safe}_"))
}

/// Insert `suffix` between a path's file stem and extension.
pub fn insert_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    path.with_file_name(name)
}
