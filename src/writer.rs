//! Start-list CSV output
//!
//! Writes the rendered records through the csv crate. Unlike a plain
//! string join, a field containing a comma gets quoted instead of
//! corrupting the row; comma-free fields are written byte-identical to
//! a join.

use crate::error::WriteError;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the rendered rows to `path`, returning the path actually
/// written (after any `.csv` fixup).
///
/// A missing `.csv` extension is appended, and missing parent
/// directories are created (the documented default output path points
/// into `./files/`).
///
/// # Errors
/// Fails if the parent directory cannot be created or the file cannot
/// be written or flushed.
pub fn write_start_list(path: &Path, rows: &[Vec<String>]) -> Result<PathBuf, WriteError> {
    let path = ensure_csv_extension(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| WriteError::Create {
                path: path.clone(),
                source,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(&path).map_err(|source| WriteError::Csv {
        path: path.clone(),
        source,
    })?;

    for row in rows {
        writer.write_record(row).map_err(|source| WriteError::Csv {
            path: path.clone(),
            source,
        })?;
    }

    writer.flush().map_err(|source| WriteError::Flush {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Append `.csv` unless the path already ends in it.
pub fn ensure_csv_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => path.to_path_buf(),
        _ => {
            let mut os = path.as_os_str().to_os_string();
            os.push(".csv");
            PathBuf::from(os)
        }
    }
}
