// Selection export
// CSV file and clipboard text for the selected dates

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::selection::Selection;
use crate::utils::date::to_iso;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no dates selected")]
    EmptySelection,
    #[error("could not save {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Text placed on the clipboard: comma-joined ISO dates, or `None` when
/// nothing is selected.
pub fn clipboard_text(selection: &Selection) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let dates: Vec<String> = selection.dates().into_iter().map(to_iso).collect();
    Some(dates.join(","))
}

/// Write one ISO date per row, each followed by `\n`. Returns the row count.
pub fn write_csv_rows<W: Write>(writer: &mut W, dates: &[NaiveDate]) -> io::Result<usize> {
    for date in dates {
        writeln!(writer, "{}", to_iso(*date))?;
    }
    writer.flush()?;
    Ok(dates.len())
}

/// Export the selected dates to a UTF-8 CSV file at `path`.
///
/// The file is written in place; a failure part-way can leave it truncated.
pub fn export_csv(selection: &Selection, path: &Path) -> Result<usize, ExportError> {
    let dates = selection.dates();
    if dates.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let io_error = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let rows = write_csv_rows(&mut writer, &dates).map_err(io_error)?;
    log::info!("Exported {} selected dates to {:?}", rows, path);
    Ok(rows)
}
