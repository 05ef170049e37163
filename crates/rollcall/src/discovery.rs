use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Closed-caption transcript exports.
pub const DEFAULT_PATTERN: &str = "**/*.cc.txt";

/// Directories holding suspected duplicate transcripts.
pub const EXCLUDED_MARKER: &str = "maybedupes";

/// Transcript files under `root` matching `pattern`, sorted by path.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("not a directory: {}", root.display());
    }

    let base = glob::Pattern::escape(&root.to_string_lossy());
    let full = format!("{base}/{pattern}");
    let entries = glob::glob(&full).with_context(|| format!("invalid pattern: {pattern}"))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_file() && !is_excluded(root, &path) {
                    files.push(path);
                }
            }
            Err(e) => tracing::warn!(error = %e, "unreadable directory entry"),
        }
    }
    files.sort();

    tracing::debug!(root = %root.display(), pattern, files = files.len(), "transcripts discovered");
    Ok(files)
}

/// True when a directory between `root` and `path` carries the duplicates marker.
/// Directories above `root` are not considered.
fn is_excluded(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .any(|c| c.as_os_str().to_string_lossy().contains(EXCLUDED_MARKER))
}

/// Keep only the first `n` files when sampling.
pub fn sample(mut files: Vec<PathBuf>, n: Option<usize>) -> Vec<PathBuf> {
    if let Some(n) = n {
        files.truncate(n);
    }
    files
}
