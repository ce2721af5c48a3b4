use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{Error, models::BundleDescriptor};

/// Resolves the bundle's `entry_file` against `base_dir`, leaving absolute paths untouched.
///
/// Returns `None` when the bundle has no entry file. Whether the file exists is not checked.
pub fn resolve_entry_file(descriptor: &BundleDescriptor, base_dir: &Path) -> Option<PathBuf> {
    let entry_file = Path::new(descriptor.entry_file()?);

    if entry_file.is_absolute() {
        Some(entry_file.to_path_buf())
    } else {
        Some(base_dir.join(entry_file))
    }
}

/// The absolute directory containing `ini_path`. Only the path is inspected, never the file.
///
/// A bare file name such as `bundles.ini` lives in the current directory. A path with no parent at all
/// (`""` or a root like `/`) does not name a file and is an [`Error::Io`] of kind `InvalidInput`.
pub fn base_dir(ini_path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let ini_path = ini_path.as_ref();

    let dir = match ini_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => std::env::current_dir(),
        Some(parent) => std::path::absolute(parent),
        None => Err(io::Error::new(io::ErrorKind::InvalidInput, "path has no parent directory")),
    };

    dir.map_err(|source| Error::Io { path: ini_path.to_path_buf(), source })
}
