//! Table-row extraction — rendered rows in, normalized field map out.

use crate::extract::keys;
use crate::records::FieldMap;
use serde::Deserialize;

/// One rendered table row: the visible text of each cell in document order,
/// plus whether the row wraps a nested sub-table.
///
/// Deserializes directly from the in-page row script's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub cells: Vec<String>,
    #[serde(default)]
    pub nested_table: bool,
}

impl RawRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            nested_table: false,
        }
    }

}

/// Extract a field map from one section's rows.
///
/// The cell-count branching mirrors the source site's current markup and is
/// deliberately not a general table-parsing algorithm:
///
/// - a row wrapping a nested sub-table is skipped, not recursed into
/// - 1 cell: a section header with no paired value, skipped
/// - 3 cells: cell 0 is an auxiliary element (e.g. a checkbox); label and
///   value sit in cells 1 and 2
/// - any other count (usually 2): label and value sit in cells 0 and 1
///
/// Labels that don't normalize are dropped. A key recurring within one
/// section overwrites the earlier value. Cell text is inserted verbatim,
/// whitespace included; only the label is lowercased, and only for lookup.
pub fn extract_fields(raw_rows: &[RawRow]) -> FieldMap {
    let mut fields = FieldMap::new();

    for row in raw_rows {
        if row.nested_table {
            continue;
        }
        let (label, value) = match row.cells.as_slice() {
            [] | [_] => continue,
            [_aux, label, value] => (label, value),
            [label, value, ..] => (label, value),
        };
        let Some(key) = keys::normalize_label(label) else {
            continue;
        };
        fields.insert(key.to_string(), value.clone());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_cell_rows_use_first_as_label() {
        let rows = [
            RawRow::new(["First Name", "Jane"]),
            RawRow::new(["Last Name", "Doe"]),
            RawRow::new(["Weight (Pounds)", "130"]),
        ];
        let fields = extract_fields(&rows);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields["firstName"], "Jane");
        assert_eq!(fields["lastName"], "Doe");
        assert_eq!(fields["weight"], "130");
    }

    #[test]
    fn three_cell_rows_skip_the_auxiliary_cell() {
        let rows = [RawRow::new(["", "Address 1", "123 Main St"])];
        let fields = extract_fields(&rows);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["address1"], "123 Main St");
    }

    #[test]
    fn single_cell_rows_are_headers() {
        let rows = [
            RawRow::new(["Case Information"]),
            RawRow::new(["First Name", "Jane"]),
        ];
        let fields = extract_fields(&rows);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["firstName"], "Jane");
    }

    #[test]
    fn nested_table_rows_are_skipped() {
        let mut nested = RawRow::new(["First Name", "Should Not Appear"]);
        nested.nested_table = true;
        let fields = extract_fields(&[nested]);

        assert!(fields.is_empty());
    }

    #[test]
    fn empty_rows_add_nothing() {
        let fields = extract_fields(&[RawRow::new(Vec::<String>::new())]);
        assert!(fields.is_empty());
    }

    #[test]
    fn unknown_labels_are_dropped() {
        let rows = [RawRow::new(["Unknown Field", "whatever"])];
        let fields = extract_fields(&rows);

        assert!(fields.is_empty());
    }

    #[test]
    fn label_matching_is_case_insensitive() {
        let upper = extract_fields(&[RawRow::new(["First Name", "Jane"])]);
        let lower = extract_fields(&[RawRow::new(["first name", "Jane"])]);

        assert_eq!(upper, lower);
        assert_eq!(upper["firstName"], "Jane");
    }

    #[test]
    fn recurring_keys_overwrite() {
        let rows = [
            RawRow::new(["Hair Color", "Brown"]),
            RawRow::new(["Hair Color", "Gray"]),
        ];
        let fields = extract_fields(&rows);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["hairColor"], "Gray");
    }

    #[test]
    fn values_are_kept_verbatim() {
        let rows = [
            RawRow::new(["First Name", "  "]),
            RawRow::new(["Last Name", ""]),
        ];
        let fields = extract_fields(&rows);

        assert_eq!(fields["firstName"], "  ");
        assert_eq!(fields["lastName"], "");
    }

    #[test]
    fn multiline_label_extracts_in_two_cell_row() {
        let rows = [RawRow::new([
            "Other Distinctive\nPhysical Characteristics",
            "Tattoo on left arm",
        ])];
        let fields = extract_fields(&rows);

        assert_eq!(fields["otherCharacteristics"], "Tattoo on left arm");
    }

    #[test]
    fn four_cell_rows_fall_back_to_leading_pair() {
        let rows = [RawRow::new(["First Name", "Jane", "extra", "extra"])];
        let fields = extract_fields(&rows);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["firstName"], "Jane");
    }
}
