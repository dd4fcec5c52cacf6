//! The label normalization table.
//!
//! A closed enumeration of the source site's field labels mapped to JSON
//! keys, built once at process start. This is deliberately not a general
//! slugification algorithm: the site's labels carry irregular punctuation,
//! parenthetical units, and multi-word phrases that do not slugify
//! predictably, so only exact (lowercased) matches normalize. Two labels
//! embed a newline exactly as the site renders them.
//!
//! The table is effectively a versioned contract with the site's markup: a
//! site-side label rename silently drops the field instead of failing
//! loudly. Known weakness, preserved as observed.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LABEL_KEYS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Identity and case administration
        ("first name", "firstName"),
        ("middle name", "middleName"),
        ("last name", "lastName"),
        ("nickname/alias", "nickname"),
        ("age now", "ageNow"),
        ("age last seen", "ageLastSeen"),
        ("date last seen", "lastSeen"),
        ("date entered", "dateEntered"),
        ("date reported", "dateReported"),
        ("height (inches)", "height"),
        ("weight (pounds)", "weight"),
        ("case number", "caseNumber"),
        ("zip code", "zip"),
        ("address 1", "address1"),
        ("address 2", "address2"),
        // Physical characteristics
        ("left eye color", "leftEyeColor"),
        ("right eye color", "rightEyeColor"),
        ("eye description", "eyeDescription"),
        ("hair color", "hairColor"),
        ("head hair", "headHair"),
        ("body hair", "bodyHair"),
        ("facial hair", "facialHair"),
        ("scars and marks", "scarsAndMarks"),
        ("finger and toe nails", "fingersAndToeNails"),
        ("foreign objects", "foreignObjects"),
        ("skeletal information", "skeletalInformation"),
        // These two render with an embedded line break on the site; the
        // newline must be present for the match to succeed.
        (
            "other distinctive\nphysical characteristics",
            "otherCharacteristics",
        ),
        ("artificial body parts\nand aids", "prosthetics"),
    ])
});

/// Normalize a rendered label to its JSON key.
///
/// Matching is case-insensitive (the label is lowercased before lookup).
/// Returns `None` for any label outside the table; the extractor drops
/// those rows.
pub fn normalize_label(label: &str) -> Option<&'static str> {
    LABEL_KEYS.get(label.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_normalize() {
        assert_eq!(normalize_label("first name"), Some("firstName"));
        assert_eq!(normalize_label("weight (pounds)"), Some("weight"));
        assert_eq!(normalize_label("nickname/alias"), Some("nickname"));
        assert_eq!(normalize_label("zip code"), Some("zip"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(normalize_label("First Name"), Some("firstName"));
        assert_eq!(normalize_label("FIRST NAME"), Some("firstName"));
        assert_eq!(normalize_label("Date Last Seen"), Some("lastSeen"));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(normalize_label("Unknown Field"), None);
        assert_eq!(normalize_label(""), None);
        // Near-misses must not fuzzy-match.
        assert_eq!(normalize_label("first  name"), None);
        assert_eq!(normalize_label("zip"), None);
    }

    #[test]
    fn multiline_labels_match_with_embedded_newline() {
        assert_eq!(
            normalize_label("Other Distinctive\nPhysical Characteristics"),
            Some("otherCharacteristics")
        );
        assert_eq!(
            normalize_label("Artificial Body Parts\nand Aids"),
            Some("prosthetics")
        );
        // Without the newline the label is a different string and drops.
        assert_eq!(
            normalize_label("Other Distinctive Physical Characteristics"),
            None
        );
    }

    #[test]
    fn address_variants_keep_their_digit() {
        assert_eq!(normalize_label("Address 1"), Some("address1"));
        assert_eq!(normalize_label("Address 2"), Some("address2"));
    }
}
