// src/specs/taxinfo.rs
//! Field layout of the tax-info search result page.
//!
//! Where the data lives:
//! - **Company name**: `th > span.copy…` (first match).
//! - **Detail table**: `table.table-taxinfo tr`, two `td` per row, label then value.
//!   The value prefers a nested copy-span over the raw cell text.
//! - **Last update**: first `td > em` anywhere on the page.
//!
//! Every selector miss just leaves the field out. Nothing here touches the network.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::HIDDEN_INFO_MARKER;
use crate::core::html::{child_elements, copy_text_or_self, inner_text, selector};
use crate::core::sanitize::strip_marker;
use crate::record::{Field, ResultRecord};

type PostProcess = fn(&str) -> String;

/// Detail-table labels as the site prints them. Exact, case-sensitive match.
pub static LABELS: &[(&str, Field, Option<PostProcess>)] = &[
    ("Mã số thuế cá nhân", Field::TaxCode,      None),
    ("Địa chỉ",            Field::Address,      None),
    ("Người đại diện",     Field::Owner,        Some(strip_hidden_info)),
    ("Ngày hoạt động",     Field::OperatingDay, None),
    ("Quản lý bởi",        Field::ManagedBy,    None),
    ("Tình trạng",         Field::Status,       None),
];

struct Selectors {
    company: Selector,
    detail_rows: Selector,
    updated: Selector,
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    company: selector(r#"th > span[class*="copy"]"#),
    detail_rows: selector("table.table-taxinfo tr"),
    updated: selector("td > em"),
});

/// The "hide info" link text the site appends to the representative's name.
pub fn strip_hidden_info(value: &str) -> String {
    strip_marker(value, HIDDEN_INFO_MARKER)
}

/// Map a detail-table label to its field and optional post-processor.
pub fn field_for_label(label: &str) -> Option<(Field, Option<PostProcess>)> {
    LABELS
        .iter()
        .find(|(l, _, _)| *l == label)
        .map(|&(_, field, post)| (field, post))
}

/// Parse one result page. Pure: same text in, same record out.
pub fn extract(document: &str) -> ResultRecord {
    let doc = Html::parse_document(document);
    let mut record = ResultRecord::new();

    if let Some(span) = doc.select(&SEL.company).next() {
        record.set(Field::CompanyName, inner_text(span));
    }

    for row in doc.select(&SEL.detail_rows) {
        let cells: Vec<_> = child_elements(row, "td").collect();
        let [label_cell, value_cell] = cells.as_slice() else {
            continue;
        };

        let label = inner_text(*label_cell);
        let Some((field, post)) = field_for_label(&label) else {
            logd!("taxinfo: ignoring label {label:?}");
            continue;
        };

        let value = copy_text_or_self(*value_cell);
        let value = match post {
            Some(f) => f(&value),
            None => value,
        };
        // Later rows overwrite earlier ones with the same label
        record.set(field, value);
    }

    if let Some(em) = doc.select(&SEL.updated).next() {
        record.set(Field::DateUpdate, inner_text(em));
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
    }

    #[test]
    fn every_label_maps_to_a_distinct_field() {
        let mut seen = Vec::new();
        for (label, field, _) in LABELS {
            assert_eq!(field_for_label(label).map(|(f, _)| f), Some(*field));
            assert!(!seen.contains(field));
            seen.push(*field);
        }
        assert_eq!(field_for_label("địa chỉ"), None); // case-sensitive
        assert_eq!(field_for_label("Địa chỉ "), None);
    }

    #[test]
    fn rows_without_exactly_two_cells_are_skipped() {
        let html = page(
            r#"<table class="table-taxinfo">
                 <tr><td>Tình trạng</td></tr>
                 <tr><td>Tình trạng</td><td>Active</td><td>extra</td></tr>
                 <tr><td>Địa chỉ</td><td>123 Main St</td></tr>
               </table>"#,
        );
        let rec = extract(&html);
        assert_eq!(rec.get(Field::Status), None);
        assert_eq!(rec.get(Field::Address), Some("123 Main St"));
    }

    #[test]
    fn header_cells_do_not_count_as_detail_cells() {
        let html = page(
            r#"<table class="table-taxinfo">
                 <thead><tr><th colspan="2"><span class="copy">ACME CO</span></th></tr></thead>
                 <tr><th>Tình trạng</th><td>Active</td></tr>
               </table>"#,
        );
        let rec = extract(&html);
        assert_eq!(rec.get(Field::CompanyName), Some("ACME CO"));
        assert_eq!(rec.get(Field::Status), None);
    }

    #[test]
    fn rows_outside_the_detail_table_are_ignored() {
        let html = page(
            r#"<table class="other"><tr><td>Tình trạng</td><td>Wrong</td></tr></table>
               <table class="table table-taxinfo"><tr><td>Quản lý bởi</td><td>Chi cục Thuế</td></tr></table>"#,
        );
        let rec = extract(&html);
        assert_eq!(rec.get(Field::Status), None);
        assert_eq!(rec.get(Field::ManagedBy), Some("Chi cục Thuế"));
    }

    #[test]
    fn repeated_label_keeps_last_value() {
        let html = page(
            r#"<table class="table-taxinfo">
                 <tr><td>Tình trạng</td><td>Old</td></tr>
                 <tr><td>Tình trạng</td><td>New</td></tr>
               </table>"#,
        );
        assert_eq!(extract(&html).get(Field::Status), Some("New"));
    }

    #[test]
    fn empty_document_yields_empty_record() {
        assert!(extract("").is_empty());
        assert!(extract("<html><body><p>Không tìm thấy</p></body></html>").is_empty());
    }
}
