use crate::error::{PdfConnectorError, Result};
use std::path::{Path, PathBuf};

/// Expand each pattern with `glob`, keeping pattern order.
///
/// A pattern that names an existing path is used as is. A pattern without
/// wildcards that names nothing expands to itself, so the caller can still
/// report it as missing.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        resolved_paths.extend(collect_paths_for_pattern(pattern.as_ref())?);
    }

    Ok(resolved_paths)
}

fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    // Existing files are taken literally, whatever characters they contain.
    if Path::new(pattern).exists() {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let entries =
        glob::glob(pattern).map_err(|err| PdfConnectorError::pattern(pattern, err.to_string()))?;

    let mut resolved_paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| PdfConnectorError::pattern(pattern, err.to_string()))?;
        resolved_paths.push(path);
    }

    if resolved_paths.is_empty() && !has_wildcards(pattern) {
        resolved_paths.push(PathBuf::from(pattern));
    }

    Ok(resolved_paths)
}

fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
