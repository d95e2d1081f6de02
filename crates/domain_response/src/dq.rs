//! Directions questionnaire draft
//!
//! Claims issued under the directions-questionnaire feature ask both parties
//! about hearing needs alongside the response journey: expert evidence,
//! giving evidence themselves, and support required at the hearing. Stored
//! as its own draft document, one per claim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::YesNo;

use crate::validation::ValidationResult;

/// An expert report the party already holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertReportRow {
    pub expert_name: String,
    pub report_date: NaiveDate,
}

/// Support the party needs to take part in a hearing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequired {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_interpreter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_language_interpreter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_support: Option<String>,
}

impl SupportRequired {
    /// Selected support options must name what is needed
    pub fn validate_form(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if matches!(&self.language_interpreter, Some(language) if language.trim().is_empty()) {
            result.add_error("languageInterpreter", "Enter the language that needs interpreting");
        }
        if matches!(&self.sign_language_interpreter, Some(language) if language.trim().is_empty())
        {
            result.add_error(
                "signLanguageInterpreter",
                "Enter the sign language you need",
            );
        }
        if matches!(&self.other_support, Some(other) if other.trim().is_empty()) {
            result.add_error("otherSupport", "Enter the other support you need");
        }
        result
    }
}

/// The directions questionnaire wizard draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectionsQuestionnaireDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_required: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert_reports: Option<Vec<ExpertReportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_witness: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_required: Option<SupportRequired>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_deserializes() {
        let draft: DirectionsQuestionnaireDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, DirectionsQuestionnaireDraft::default());
    }

    #[test]
    fn test_selected_support_must_be_named() {
        let support = SupportRequired {
            language_interpreter: Some("  ".to_string()),
            ..Default::default()
        };
        let result = support.validate_form();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].field, "languageInterpreter");
    }

    #[test]
    fn test_named_support_is_valid() {
        let support = SupportRequired {
            language_interpreter: Some("Welsh".to_string()),
            other_support: None,
            sign_language_interpreter: None,
        };
        assert!(support.validate_form().is_valid());
    }
}
