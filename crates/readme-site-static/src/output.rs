//! Output file writing.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write `contents` to `path`, replacing any existing file.
///
/// The data lands in a uniquely named temporary file in the same directory
/// and is renamed into place, so readers never observe a half-written file.
/// The temporary file is removed if anything fails. Missing parent
/// directories are created.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".readme-site-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Published pages should stay world-readable (subject to umask)
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
