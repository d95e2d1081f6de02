//! Page models
//!
//! The service renders JSON page models; the citizen-facing frontend turns
//! them into GOV.UK pages. A failed form submission is not an error: the
//! same page model comes back with the field errors filled in, status 200.

use serde::Serialize;

use core_kernel::ExternalId;
use domain_response::{FieldError, ValidationResult};

/// A field-level validation message as rendered on a page
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorDto {
    fn from(err: FieldError) -> Self {
        Self {
            field: err.field,
            message: err.message,
        }
    }
}

/// A wizard page with its current form values and any validation errors
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageModel<T: Serialize> {
    pub page: &'static str,
    pub external_id: ExternalId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorDto>,
}

impl<T: Serialize> PageModel<T> {
    pub fn new(page: &'static str, external_id: ExternalId, form: Option<T>) -> Self {
        Self {
            page,
            external_id,
            form,
            errors: Vec::new(),
        }
    }

    /// Re-renders the page with the submitted values and the failed checks
    pub fn with_errors(
        page: &'static str,
        external_id: ExternalId,
        form: Option<T>,
        result: ValidationResult,
    ) -> Self {
        Self {
            page,
            external_id,
            form,
            errors: result.into_errors().into_iter().map(Into::into).collect(),
        }
    }
}

/// The check-and-send task list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListModel {
    pub external_id: ExternalId,
    pub outstanding_tasks: Vec<&'static str>,
    pub ready_to_submit: bool,
}

/// Submission confirmation page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationModel {
    pub external_id: ExternalId,
    pub submitter_name: String,
}

/// Features a claim would be issued under today
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFeaturesModel {
    pub external_id: ExternalId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_page_omits_errors() {
        let model = PageModel::new("settle-admitted", ExternalId::new(), Some("form"));
        let json = serde_json::to_value(&model).unwrap();
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_failed_page_lists_errors() {
        let mut result = ValidationResult::ok();
        result.add_error("amount", "Enter the amount paid");
        let model =
            PageModel::with_errors("paid-amount", ExternalId::new(), Some("form"), result);
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["errors"][0]["field"], "amount");
    }
}
