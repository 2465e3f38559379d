//! Line format used by the options dialog: one row per line, `value` or `value | label`.

use quill_forms::OptionRow;

const SEPARATOR: char = '|';

pub fn format_rows(rows: &[OptionRow], language: &str) -> String {
    rows.iter()
        .map(|row| match row.label.get(language).filter(|l| !l.is_empty()) {
            Some(label) => format!("{} {} {}", row.value, SEPARATOR, label),
            None => row.value.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses edited lines back into rows.
///
/// A line whose value matches a previous row reuses that row, keeping its id and its labels in
/// other languages. Blank lines are skipped.
pub fn parse_rows(text: &str, previous: &[OptionRow], language: &str) -> Vec<OptionRow> {
    let mut unused: Vec<&OptionRow> = previous.iter().collect();
    let mut rows = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (value, label) = match line.split_once(SEPARATOR) {
            Some((value, label)) => (value.trim(), Some(label.trim())),
            None => (line, None),
        };

        let mut row = match unused.iter().position(|r| r.value == value) {
            Some(index) => unused.remove(index).clone(),
            None => OptionRow::new(value),
        };
        if let Some(label) = label {
            row.label.insert(language.to_string(), label.to_string());
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_labels_for_one_language() {
        let rows = vec![
            OptionRow::new("y").with_label("en", "Yes").with_label("fr", "Oui"),
            OptionRow::new("n"),
        ];
        assert_eq!(format_rows(&rows, "fr"), "y | Oui\nn");
    }

    #[test]
    fn parse_keeps_ids_of_known_values() {
        let previous = vec![
            OptionRow::new("y").with_label("fr", "Oui"),
            OptionRow::new("n"),
        ];
        let rows = parse_rows("n\n\n  y | Yes \nmaybe", &previous, "en");

        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["n", "y", "maybe"]);
        assert_eq!(rows[0].id, previous[1].id);
        assert_eq!(rows[1].id, previous[0].id);
        assert_eq!(rows[1].label.get("en").map(String::as_str), Some("Yes"));
        assert_eq!(rows[1].label.get("fr").map(String::as_str), Some("Oui"));
    }

    #[test]
    fn duplicate_values_claim_rows_in_order() {
        let previous = vec![OptionRow::new("a"), OptionRow::new("a")];
        let rows = parse_rows("a\na\na", &previous, "_");
        assert_eq!(rows[0].id, previous[0].id);
        assert_eq!(rows[1].id, previous[1].id);
        assert_ne!(rows[2].id, previous[0].id);
        assert_ne!(rows[2].id, previous[1].id);
    }
}
