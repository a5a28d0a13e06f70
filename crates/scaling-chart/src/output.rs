// File: crates/scaling-chart/src/output.rs
// Summary: All-or-nothing file output (temp sibling + rename).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::error::{RenderError, Result};

/// Write `bytes` to `path` so that `path` either holds the full contents or
/// is left untouched. Missing parent directories are created.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| RenderError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = temp_sibling(path);
    let written = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(source) = written {
        if tmp.exists() {
            if let Err(err) = fs::remove_file(&tmp) {
                warn!("could not remove temporary file {}: {err}", tmp.display());
            }
        }
        return Err(io_err(source));
    }
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Distinguishes temp files of concurrent writes within one process.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// `dir/.name.<pid>.<seq>.tmp`, in the same directory so the rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| "chart".to_owned());
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
}
