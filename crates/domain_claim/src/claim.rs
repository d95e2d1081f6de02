//! Claim read model
//!
//! Claims are owned by the external claim store; this service only reads
//! them. Field names mirror the store's JSON so documents deserialize
//! without a mapping layer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ExternalId, UserId, YesNo};

/// Kind of party named on a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartyType {
    Individual,
    SoleTrader,
    Company,
    Organisation,
}

/// A party named on the claim (claimant or defendant)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(rename = "type")]
    pub party_type: PartyType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Party {
    pub fn new(party_type: PartyType, name: impl Into<String>) -> Self {
        Self {
            party_type,
            name: name.into(),
            email: None,
        }
    }

    /// Companies and organisations count as businesses; sole traders do not
    pub fn is_business(&self) -> bool {
        matches!(self.party_type, PartyType::Company | PartyType::Organisation)
    }
}

/// One row of the claim amount breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountRow {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// Whether the claimant claims interest on the principal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub option: YesNo,
}

/// Claim facts as entered by the claimant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimData {
    pub claimant: Party,
    pub defendant: Party,
    #[serde(default)]
    pub amount_rows: Vec<AmountRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
}

/// Marker that the defendant has responded, with the response kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefendantResponse {
    pub response_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
}

/// A money claim as held by the claim store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub external_id: ExternalId,
    pub claimant_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defendant_id: Option<UserId>,
    pub claim_data: ClaimData,
    /// Present once the defendant has submitted a response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<DefendantResponse>,
    /// Comma-joined feature labels the claim was issued under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

impl Claim {
    /// Total of the amount breakdown, interest excluded
    pub fn total_principal(&self) -> Decimal {
        self.claim_data
            .amount_rows
            .iter()
            .filter_map(|row| row.amount)
            .sum()
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// True when the claim was issued under the given feature label
    pub fn has_feature(&self, label: &str) -> bool {
        self.features
            .as_deref()
            .map(|features| features.split(',').any(|entry| entry.trim() == label))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn claim_with_rows(rows: Vec<AmountRow>) -> Claim {
        Claim {
            external_id: ExternalId::new(),
            claimant_id: UserId::new("1"),
            defendant_id: Some(UserId::new("2")),
            claim_data: ClaimData {
                claimant: Party::new(PartyType::Individual, "Jan Clark"),
                defendant: Party::new(PartyType::Individual, "Mary Richards"),
                amount_rows: rows,
                interest: None,
            },
            response: None,
            features: None,
            issued_on: None,
        }
    }

    #[test]
    fn test_total_principal_sums_rows() {
        let claim = claim_with_rows(vec![
            AmountRow {
                reason: "Unpaid invoice".to_string(),
                amount: Some(dec!(200)),
            },
            AmountRow {
                reason: "Late fee".to_string(),
                amount: Some(dec!(50.50)),
            },
        ]);
        assert_eq!(claim.total_principal(), dec!(250.50));
    }

    #[test]
    fn test_total_principal_skips_empty_rows() {
        let claim = claim_with_rows(vec![
            AmountRow {
                reason: "Unpaid invoice".to_string(),
                amount: Some(dec!(100)),
            },
            AmountRow {
                reason: "Draft row".to_string(),
                amount: None,
            },
        ]);
        assert_eq!(claim.total_principal(), dec!(100));
    }

    #[test]
    fn test_is_business() {
        assert!(Party::new(PartyType::Company, "Acme Ltd").is_business());
        assert!(Party::new(PartyType::Organisation, "Charity").is_business());
        assert!(!Party::new(PartyType::SoleTrader, "J Smith").is_business());
        assert!(!Party::new(PartyType::Individual, "J Smith").is_business());
    }

    #[test]
    fn test_has_feature_splits_labels() {
        let mut claim = claim_with_rows(vec![]);
        claim.features = Some("admissions, directionsQuestionnaire".to_string());
        assert!(claim.has_feature("admissions"));
        assert!(claim.has_feature("directionsQuestionnaire"));
        assert!(!claim.has_feature("mediationPilot"));

        claim.features = None;
        assert!(!claim.has_feature("admissions"));
    }

    #[test]
    fn test_claim_store_json_shape() {
        let claim = claim_with_rows(vec![]);
        let json = serde_json::to_value(&claim).unwrap();
        assert!(json.get("externalId").is_some());
        assert!(json.get("claimData").is_some());
        assert_eq!(json["claimData"]["defendant"]["type"], "individual");
    }
}
