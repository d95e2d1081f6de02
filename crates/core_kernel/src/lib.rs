//! Core Kernel - Foundational types for the claimant response service
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Strongly-typed identifiers for claims, drafts, and users
//! - Monetary helpers with precise decimal arithmetic
//! - The shared yes/no option used by wizard forms and claim data
//! - Port infrastructure for external collaborators

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod yes_no;

pub use identifiers::{DraftId, ExternalId, UserId};
pub use money::{format_pounds, parse_amount, round_pence, MoneyError};
pub use ports::PortError;
pub use yes_no::YesNo;
