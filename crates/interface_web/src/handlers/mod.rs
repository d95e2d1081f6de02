//! Request handlers

pub mod claim;
pub mod claimant_response;
pub mod directions_questionnaire;
pub mod health;
