//! Inspection record and search query domain models.
//!
//! This module defines the core types for equipment lookups: the
//! [`InspectionRecord`] returned by the remote service, the [`SearchMethod`]
//! selecting which endpoint a lookup hits, and the [`SearchQuery`] created on
//! submission. Records are immutable once fetched and live for exactly one
//! search result; the next search replaces them wholesale, never merges.

use serde::{Deserialize, Serialize};

/// The latest inspection record for a piece of lifting equipment.
///
/// Decoded from the remote service's JSON response (camelCase wire names).
/// Dates arrive as strings and are carried through untouched; formatting them
/// for display is a presentation concern outside this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    /// Certificate number issued for the inspection.
    pub cert_number: String,

    /// Serial number of the inspected equipment.
    pub serial_no: String,

    /// Tag number attached to the equipment.
    pub tag_number: String,

    /// Description of the equipment under test.
    pub equip_description: String,

    /// Date the inspection was performed.
    pub test_date: String,

    /// Date the inspection certificate remains valid until.
    pub valid_date: String,

    /// Outcome status recorded by the inspector.
    pub status: String,

    /// Working load limit of the equipment.
    pub wwl: String,

    /// Height or length measurement, as recorded.
    pub height_length: String,

    /// Free-text comments from the inspection.
    pub comments: String,

    /// Client organisation the equipment belongs to.
    pub client: String,

    /// Site where the equipment is located.
    pub site: String,

    /// Section within the site.
    pub section: String,

    /// Person responsible for the equipment.
    pub responsible: String,

    /// Backend identifier of the test.
    pub test_id: i64,

    /// Kind of test performed.
    pub test_type: String,

    /// Inspection type, when the backend records one.
    pub inspect_type: Option<String>,
}

/// How a lookup value should be interpreted.
///
/// Selects which inspection endpoint the API client hits. A tag value read
/// from NFC hardware is consumed identically to a manually typed one; the
/// core does not distinguish the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMethod {
    /// Look up by equipment serial number.
    Serial,
    /// Look up by attached tag number.
    Tag,
}

impl SearchMethod {
    /// The lookup method to suggest when this one found nothing.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Serial => Self::Tag,
            Self::Tag => Self::Serial,
        }
    }

    /// Human-readable label for result context lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Serial => "serial number",
            Self::Tag => "tag number",
        }
    }
}

/// A submitted equipment lookup.
///
/// Created when the user submits a value, retained only to render the
/// "searched for X" context alongside the result and to support a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Whether the value is a serial or tag number.
    pub method: SearchMethod,

    /// The lookup value, trimmed of surrounding whitespace.
    pub value: String,
}

impl SearchQuery {
    /// Builds a query from raw input, trimming surrounding whitespace.
    ///
    /// Returns `None` when the trimmed value is empty: blank submissions are
    /// a no-op at the flow layer, not an error.
    #[must_use]
    pub fn from_input(method: SearchMethod, value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            method,
            value: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_surrounding_whitespace() {
        let query = SearchQuery::from_input(SearchMethod::Serial, "  99638  ")
            .expect("non-empty value should produce a query");
        assert_eq!(query.value, "99638");
        assert_eq!(query.method, SearchMethod::Serial);
    }

    #[test]
    fn blank_input_produces_no_query() {
        assert!(SearchQuery::from_input(SearchMethod::Serial, "").is_none());
        assert!(SearchQuery::from_input(SearchMethod::Tag, "   \t ").is_none());
    }

    #[test]
    fn other_method_flips_both_ways() {
        assert_eq!(SearchMethod::Serial.other(), SearchMethod::Tag);
        assert_eq!(SearchMethod::Tag.other(), SearchMethod::Serial);
    }

    #[test]
    fn record_decodes_from_wire_shape() {
        let body = r#"{
            "certNumber": "C-2024-0042",
            "serialNo": "99638",
            "tagNumber": "T-1187",
            "equipDescription": "Chain sling, 2-leg",
            "testDate": "2024-03-11",
            "validDate": "2025-03-11",
            "status": "Passed",
            "wwl": "3.2t",
            "heightLength": "4m",
            "comments": "",
            "client": "FB Cranes",
            "site": "Melbourne Yard",
            "section": "Rigging",
            "responsible": "J. Mercer",
            "testId": 8841,
            "testType": "Periodic"
        }"#;

        let record: InspectionRecord =
            serde_json::from_str(body).expect("wire shape should decode");
        assert_eq!(record.serial_no, "99638");
        assert_eq!(record.inspect_type, None);
    }
}
