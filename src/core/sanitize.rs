// src/core/sanitize.rs

/// Remove every occurrence of `marker` from `s`. Unchanged when absent.
pub fn strip_marker(s: &str, marker: &str) -> String {
    if marker.is_empty() || !s.contains(marker) {
        return s!(s);
    }
    s.replace(marker, "")
}

/// Trimmed cell text, or `None` when nothing is left.
pub fn non_empty_trimmed(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// Case-insensitive extension check against an allow-list (no leading dot).
pub fn has_extension(path: &std::path::Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| allowed.iter().any(|a| e.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn marker_removed_only_when_present() {
        assert_eq!(strip_marker("Nguyễn Văn A Ẩn thông tin", " Ẩn thông tin"), "Nguyễn Văn A");
        assert_eq!(strip_marker("Nguyễn Văn A", " Ẩn thông tin"), "Nguyễn Văn A");
    }

    #[test]
    fn blank_cells_are_dropped() {
        assert_eq!(non_empty_trimmed("  0101234567 "), Some(s!("0101234567")));
        assert_eq!(non_empty_trimmed(" \t "), None);
    }

    #[test]
    fn extension_matching() {
        let allowed = ["xls", "xlsx"];
        assert!(has_extension(Path::new("ids.xlsx"), &allowed));
        assert!(has_extension(Path::new("IDS.XLS"), &allowed));
        assert!(!has_extension(Path::new("ids.csv"), &allowed));
        assert!(!has_extension(Path::new("xlsx"), &allowed));
    }
}
