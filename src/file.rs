// src/file.rs
// Spreadsheet in, spreadsheet out.

use std::{
    fs,
    path::{Path, PathBuf},
};

use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use chrono::NaiveTime;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::{
    config::consts::{INPUT_EXTENSIONS, RESULTS_SHEET},
    core::sanitize::{has_extension, non_empty_trimmed},
    error::{Error, FormatError},
    record::{Field, ResultBatch},
};

/// Only `.xls` / `.xlsx` are accepted as input.
pub fn check_extension(path: &Path) -> Result<(), FormatError> {
    if has_extension(path, INPUT_EXTENSIONS) {
        Ok(())
    } else {
        Err(FormatError::UnsupportedExtension(path.to_path_buf()))
    }
}

/// Column A of the first sheet, top to bottom; blank cells skipped, values trimmed.
/// May return an empty list; the caller decides whether that's an error.
pub fn read_identifiers(path: &Path) -> Result<Vec<String>, FormatError> {
    check_extension(path)?;

    let workbook_err = |source| FormatError::Workbook { path: path.to_path_buf(), source };

    let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FormatError::NoSheet(path.to_path_buf()))?
        .map_err(workbook_err)?;

    let Some((last_row, _)) = range.end() else {
        return Ok(Vec::new());
    };

    let mut ids = Vec::new();
    for row in 0..=last_row {
        let Some(cell) = range.get_value((row, 0)) else {
            continue;
        };
        if let Some(id) = non_empty_trimmed(&cell_text(cell)) {
            ids.push(id);
        }
    }

    logf!("Import: {} identifier(s) from {}", ids.len(), path.display());
    Ok(ids)
}

/// Display text of a cell. Whole floats print without a fraction (`1.0` → `"1"`),
/// dates as `YYYY-MM-DD`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => s!(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => date_text(dt),
        Data::Error(e) => e.to_string(),
    }
}

fn date_text(dt: &ExcelDateTime) -> String {
    // Durations have no calendar form
    let parsed = if dt.is_duration() { None } else { dt.as_datetime() };
    match parsed {
        Some(t) if t.time() == NaiveTime::MIN => t.format("%Y-%m-%d").to_string(),
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

/// Header row, then one row per record in column order. Absent fields are blank cells,
/// so every record owns a row even when nothing was found.
/// Overwrites `path`. Returns the path written to.
pub fn write_results(batch: &ResultBatch, path: &Path) -> Result<PathBuf, Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    build_workbook(batch)
        .and_then(|mut wb| wb.save(path))
        .map_err(|source| Error::Write { path: path.to_path_buf(), source })?;

    logf!("Export: {} row(s) → {}", batch.len(), path.display());
    Ok(path.to_path_buf())
}

fn build_workbook(batch: &ResultBatch) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(RESULTS_SHEET)?;

    for (col, header) in Field::headers().iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    // Unformatted blanks are dropped by the writer; a text format keeps the cell
    let blank = Format::new().set_num_format("@");

    for (i, record) in batch.iter().enumerate() {
        let row = (i + 1) as u32;
        for field in Field::ALL {
            let col = field.index() as u16;
            match record.get(field) {
                Some(value) if !value.is_empty() => {
                    sheet.write_string(row, col, value)?;
                }
                _ => {
                    sheet.write_blank(row, col, &blank)?;
                }
            }
        }
    }

    Ok(workbook)
}

/// Header + rows as tab-separated text (clipboard export). Tabs/newlines in values become spaces.
pub fn to_tsv(batch: &ResultBatch) -> String {
    fn clean(v: &str) -> String {
        v.chars().map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c }).collect()
    }

    let mut out = Field::headers().join("\t");
    out.push('\n');
    for row in batch.rows() {
        let cells: Vec<String> = row.iter().map(|v| clean(v)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
