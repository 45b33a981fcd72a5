//! CSV export for [`Mat`] buffers.
//!
//! One line per row, values comma separated and printed with one decimal
//! place:
//!
//! ```text
//! 1.0,2.0
//! 3.0,4.0
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::mat::Mat;

/// Size of the buffer that holds an output path built from name + extension,
/// including its terminator.
pub const MAX_PATH_LEN: usize = 1024;

/// Errors that can occur when exporting a matrix.
///
/// All of these are recoverable: nothing is written when the file cannot be
/// opened, and the caller decides whether to continue.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("output path is {len} bytes, limit is {limit} bytes", limit = MAX_PATH_LEN - 1)]
    PathTooLong { len: usize },

    #[error("unable to open '{path}' for writing: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `mat` as CSV to `path`, truncating any existing file.
pub fn export_csv(path: &Path, mat: &Mat) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, mat)
        .and_then(|()| writer.flush())
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Wrote {}x{} matrix to {}",
        mat.width(),
        mat.height(),
        path.display()
    );
    Ok(())
}

/// Write `mat` to the file named `name` immediately followed by `ext`.
///
/// `ext` is appended verbatim, so it normally carries its own dot
/// (`".csv"`). The combined path must be shorter than [`MAX_PATH_LEN`] bytes.
///
/// # Returns
/// The path that was written.
pub fn export_csv_named(name: &str, ext: &str, mat: &Mat) -> Result<PathBuf, ExportError> {
    let path = output_path(name, ext)?;
    export_csv(&path, mat)?;
    Ok(path)
}

/// Build `name + ext`, enforcing the path length limit.
pub fn output_path(name: &str, ext: &str) -> Result<PathBuf, ExportError> {
    let len = name.len() + ext.len();
    if len >= MAX_PATH_LEN {
        return Err(ExportError::PathTooLong { len });
    }
    Ok(PathBuf::from(format!("{name}{ext}")))
}

/// Format `mat` as CSV into any writer.
pub fn write_csv<W: Write>(writer: &mut W, mat: &Mat) -> io::Result<()> {
    for row in mat.rows() {
        // rows are never empty: width >= 1
        if let Some((last, head)) = row.split_last() {
            for v in head {
                write!(writer, "{v:.1},")?;
            }
            writeln!(writer, "{last:.1}")?;
        }
    }
    Ok(())
}
