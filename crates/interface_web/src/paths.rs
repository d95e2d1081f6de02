//! Wizard page paths
//!
//! Every wizard URI carries the claim's external ID. The constants are the
//! axum route templates; [`evaluate`] fills the placeholder when building a
//! redirect target.

use core_kernel::ExternalId;

/// Claimant-response wizard pages
pub mod claimant_response {
    pub const SETTLE_ADMITTED: &str = "/case/:external_id/claimant-response/settle-admitted";
    pub const PAID_AMOUNT: &str = "/case/:external_id/claimant-response/paid-amount";
    pub const FREE_MEDIATION: &str = "/case/:external_id/claimant-response/free-mediation";
    pub const REJECTION_REASON: &str = "/case/:external_id/claimant-response/rejection-reason";
    pub const PAYMENT_OPTION: &str = "/case/:external_id/claimant-response/payment-option";
    pub const PAYMENT_DATE: &str = "/case/:external_id/claimant-response/payment-date";
    pub const REPAYMENT_PLAN: &str = "/case/:external_id/claimant-response/repayment-plan";
    pub const FORMALISE_REPAYMENT_PLAN: &str =
        "/case/:external_id/claimant-response/formalise-repayment-plan";
    pub const CHECK_AND_SEND: &str = "/case/:external_id/claimant-response/check-and-send";
    pub const CONFIRMATION: &str = "/case/:external_id/claimant-response/confirmation";
}

/// Directions-questionnaire pages
pub mod directions_questionnaire {
    pub const EXPERT: &str = "/case/:external_id/directions-questionnaire/expert";
    pub const EXPERT_REPORTS: &str = "/case/:external_id/directions-questionnaire/expert-reports";
    pub const SELF_WITNESS: &str = "/case/:external_id/directions-questionnaire/self-witness";
    pub const SUPPORT_REQUIRED: &str =
        "/case/:external_id/directions-questionnaire/support-required";
}

pub const CLAIM_FEATURES: &str = "/case/:external_id/features";
pub const HEALTH: &str = "/health";

/// Fills the external-ID placeholder in a route template
pub fn evaluate(template: &str, external_id: ExternalId) -> String {
    template.replace(":external_id", &external_id.to_string())
}
