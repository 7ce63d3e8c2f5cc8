use std::path::Path;

/// Read-only existence queries against some filesystem.
///
/// The resolver only ever asks "does this path currently exist?", so tests can
/// substitute an implementation answering from an in-memory set instead of
/// touching disk.
pub trait FileExistence {
    /// Whether `path` currently names any filesystem entry (file, directory,
    /// socket, ...). Existence only: no type check, no readability check.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileExistence`] backed by the real filesystem.
///
/// Built on [`Path::exists`], so an error during the probe (for example a
/// permission failure on a parent directory) is reported as non-existence.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct DiskProbe;

impl FileExistence for DiskProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Whether `value` is a POSIX absolute path, i.e. starts with `/`.
///
/// Values come verbatim from environment variables; nothing beyond the leading
/// separator is inspected, and no normalization is performed.
pub fn is_absolute(value: &str) -> bool {
    value.starts_with('/')
}
