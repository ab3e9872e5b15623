// tests/tabular_io.rs
//
// Spreadsheet import/export against temp files.

use std::{fs::File, io::Read, path::Path};

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

use mst_scan::error::FormatError;
use mst_scan::file::{cell_text, read_identifiers, write_results};
use mst_scan::record::{Field, ResultBatch, ResultRecord};
use mst_scan::runner::load_identifiers;

/// Column A gets `cells`; `None` leaves the cell unwritten.
fn write_input(path: &Path, cells: &[Option<&str>]) {
    let mut wb = Workbook::new();
    let sheet = wb.add_worksheet();
    for (row, cell) in cells.iter().enumerate() {
        if let Some(text) = cell {
            sheet.write_string(row as u32, 0, *text).unwrap();
        }
    }
    // Noise in column B must be ignored
    sheet.write_string(0, 1, "ignored").unwrap();
    wb.save(path).unwrap();
}

/// Raw worksheet XML; calamine skips cells without a value, so blank rows need this.
fn sheet_xml(path: &Path) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

fn read_back(path: &Path) -> Vec<Vec<String>> {
    let mut wb = open_workbook_auto(path).unwrap();
    let range = wb.worksheet_range_at(0).unwrap().unwrap();
    range
        .rows()
        .map(|r| r.iter().map(cell_text).collect())
        .collect()
}

#[test]
fn reads_column_a_trimmed_skipping_blanks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ids.xlsx");
    write_input(&path, &[
        Some(" 0101234567 "),
        None,
        Some("   "),
        Some("079201001234"),
        Some("0101234567"),
    ]);

    let ids = read_identifiers(&path).unwrap();
    assert_eq!(ids, vec!["0101234567", "079201001234", "0101234567"]);
}

#[test]
fn numeric_ids_are_read_as_display_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbers.xlsx");
    let mut wb = Workbook::new();
    let sheet = wb.add_worksheet();
    sheet.write_number(0, 0, 101234567.0).unwrap();
    wb.save(&path).unwrap();

    assert_eq!(read_identifiers(&path).unwrap(), vec!["101234567"]);
}

#[test]
fn date_ids_are_read_as_dates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dates.xlsx");
    let mut wb = Workbook::new();
    let sheet = wb.add_worksheet();
    let day = rust_xlsxwriter::ExcelDateTime::from_ymd(2024, 1, 1).unwrap();
    let format = rust_xlsxwriter::Format::new().set_num_format("yyyy-mm-dd");
    sheet.write_datetime_with_format(0, 0, &day, &format).unwrap();
    wb.save(&path).unwrap();

    assert_eq!(read_identifiers(&path).unwrap(), vec!["2024-01-01"]);
}

#[test]
fn empty_column_a_is_a_not_found_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");
    write_input(&path, &[None, Some("  ")]);

    assert!(read_identifiers(&path).unwrap().is_empty());
    assert!(matches!(load_identifiers(&path), Err(FormatError::NoIdentifiers(_))));
}

#[test]
fn wrong_extension_and_garbage_files_are_format_errors() {
    let dir = tempdir().unwrap();

    let csv = dir.path().join("ids.csv");
    std::fs::write(&csv, "0101234567\n").unwrap();
    assert!(matches!(read_identifiers(&csv), Err(FormatError::UnsupportedExtension(_))));

    let fake = dir.path().join("fake.xlsx");
    std::fs::write(&fake, "this is not a zip").unwrap();
    assert!(matches!(read_identifiers(&fake), Err(FormatError::Workbook { .. })));
}

#[test]
fn writes_header_and_one_row_per_record() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("output.xlsx");

    let batch = ResultBatch::from(vec![
        ResultRecord::new()
            .with(Field::CompanyName, "ACME CO")
            .with(Field::Address, "123 Main St")
            .with(Field::Status, "Active")
            .with(Field::DateUpdate, "2024-01-01"),
        ResultRecord::new(),
        ResultRecord::new().with(Field::TaxCode, "0101234567"),
    ]);

    let written = write_results(&batch, &out).unwrap();
    assert_eq!(written, out);

    let rows = read_back(&out);
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0],
        ["CompanyName", "TaxCode", "Address", "Owner", "OperatingDay", "ManagedBy", "Status", "DateUpdate"]
    );
    assert_eq!(rows[1], ["ACME CO", "", "123 Main St", "", "", "", "Active", "2024-01-01"]);
    assert!(rows[2].iter().all(String::is_empty));
    assert_eq!(rows[3][1], "0101234567");
}

#[test]
fn trailing_blank_records_keep_their_rows() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("output.xlsx");

    let batch = ResultBatch::from(vec![
        ResultRecord::new().with(Field::CompanyName, "ACME CO"),
        ResultRecord::new(),
        ResultRecord::new().with(Field::Owner, ""),
    ]);
    write_results(&batch, &out).unwrap();

    let xml = sheet_xml(&out);
    assert!(xml.contains(r#"<dimension ref="A1:H4"/>"#), "{xml}");
    assert_eq!(xml.matches("<row ").count(), 4);
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("output.xlsx");
    std::fs::write(&out, "stale").unwrap();

    let batch = ResultBatch::from(vec![ResultRecord::new().with(Field::Status, "Active")]);
    write_results(&batch, &out).unwrap();

    let rows = read_back(&out);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][6], "Active");
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempdir().unwrap();
    // A directory where the file should go
    let out = dir.path().join("taken.xlsx");
    std::fs::create_dir(&out).unwrap();

    let err = write_results(&ResultBatch::default(), &out).unwrap_err();
    assert!(matches!(err, mst_scan::Error::Write { .. }));
    assert!(err.to_string().contains("taken.xlsx"));
}

#[test]
fn blank_cells_read_back_as_empty() {
    assert_eq!(cell_text(&Data::Empty), "");
}
