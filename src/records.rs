//! Harvested record shapes and output naming rules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized field name → extracted text.
///
/// For the photos section the keys are zero-based positions as decimal
/// strings and the values are image URLs. Key order carries no meaning;
/// consumers must not depend on it.
pub type FieldMap = HashMap<String, String>;

/// Every section harvested from one case detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub case_info: FieldMap,
    pub circumstances: FieldMap,
    pub characteristics: FieldMap,
    pub photos: FieldMap,
    pub investigating_agency: FieldMap,
    pub case_manager: FieldMap,
    pub regional_administrator: FieldMap,
}

/// All case records gathered for one state in one run.
///
/// Created fresh per state, populated case-by-case, persisted once, then
/// discarded.
#[derive(Debug, Clone, Default)]
pub struct StateResults {
    /// Human-readable state name as the site displays it.
    pub state_name: String,
    /// Case identifier → record.
    pub cases: HashMap<String, CaseRecord>,
}

impl StateResults {
    pub fn new(state_name: impl Into<String>) -> Self {
        Self {
            state_name: state_name.into(),
            cases: HashMap::new(),
        }
    }

    /// Output file name for this state: the display name lowercased with
    /// spaces replaced by hyphens, suffixed `-output.json`.
    pub fn file_name(&self) -> String {
        format!(
            "{}-output.json",
            self.state_name.to_lowercase().replace(' ', "-")
        )
    }
}

/// Parse the case identifier from a detail-page title: the suffix after the
/// last `#`, trimmed. Returns `None` when the title has no `#` or nothing
/// follows it.
pub fn case_id_from_title(title: &str) -> Option<&str> {
    let (_, id) = title.rsplit_once('#')?;
    let id = id.trim();
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_id_parses_title_suffix() {
        assert_eq!(
            case_id_from_title("Missing Persons: Jane Doe # 1234"),
            Some("1234")
        );
        assert_eq!(case_id_from_title("Case #42"), Some("42"));
    }

    #[test]
    fn case_id_uses_last_delimiter() {
        assert_eq!(case_id_from_title("#1 of many #9876"), Some("9876"));
    }

    #[test]
    fn case_id_missing_or_empty() {
        assert_eq!(case_id_from_title("no delimiter here"), None);
        assert_eq!(case_id_from_title("trailing #   "), None);
    }

    #[test]
    fn state_file_name_slugs_display_name() {
        let results = StateResults::new("North Carolina");
        assert_eq!(results.file_name(), "north-carolina-output.json");

        let one_word = StateResults::new("Ohio");
        assert_eq!(one_word.file_name(), "ohio-output.json");
    }

    #[test]
    fn case_record_serializes_camel_case_sections() {
        let mut record = CaseRecord::default();
        record
            .case_info
            .insert("firstName".into(), "Jane".into());

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for expected in [
            "caseInfo",
            "circumstances",
            "characteristics",
            "photos",
            "investigatingAgency",
            "caseManager",
            "regionalAdministrator",
        ] {
            assert!(keys.contains(&expected), "missing section {expected}");
        }
        assert_eq!(value["caseInfo"]["firstName"], "Jane");
    }
}
