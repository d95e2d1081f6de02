//! Feature eligibility
//!
//! New claims are issued under a set of feature labels (admissions journey,
//! directions questionnaire pilot, mediation pilot). Each label is controlled
//! by a remote toggle, and the pilot features additionally require the claim
//! principal to stay under the pilot amount limit.
//!
//! The toggle service sits behind [`FeatureTogglesPort`]; the reqwest adapter
//! lives in `infra_clients`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use core_kernel::PortError;

/// Features a claim can be issued under, in label order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Admissions,
    DirectionsQuestionnaire,
    MediationPilot,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::Admissions,
        Feature::DirectionsQuestionnaire,
        Feature::MediationPilot,
    ];

    /// Name of the remote toggle controlling this feature
    pub fn toggle_name(self) -> &'static str {
        match self {
            Feature::Admissions => "cmc_admissions",
            Feature::DirectionsQuestionnaire => "cmc_directions_questionnaire",
            Feature::MediationPilot => "cmc_mediation_pilot",
        }
    }

    /// Label recorded on the claim when the feature is enabled
    pub fn label(self) -> &'static str {
        match self {
            Feature::Admissions => "admissions",
            Feature::DirectionsQuestionnaire => "directionsQuestionnaire",
            Feature::MediationPilot => "mediationPilot",
        }
    }

    /// Pilot features only apply under the pilot amount limit
    fn amount_capped(self) -> bool {
        matches!(
            self,
            Feature::DirectionsQuestionnaire | Feature::MediationPilot
        )
    }
}

/// Port over the remote feature-toggle service
#[async_trait]
pub trait FeatureTogglesPort: Send + Sync {
    /// Checks whether the named toggle is enabled
    async fn is_enabled(&self, name: &str) -> Result<bool, PortError>;
}

/// Composes the feature list a claim is issued under
#[derive(Debug, Clone)]
pub struct FeaturesBuilder {
    pilot_limit: Decimal,
}

impl FeaturesBuilder {
    pub fn new(pilot_limit: Decimal) -> Self {
        Self { pilot_limit }
    }

    /// Returns the comma-joined labels of enabled features, or `None` when
    /// no feature applies.
    ///
    /// `principal` is the claim amount excluding interest; pilot features are
    /// skipped without querying their toggle when it exceeds the limit.
    pub async fn features(
        &self,
        principal: Decimal,
        toggles: &dyn FeatureTogglesPort,
    ) -> Result<Option<String>, PortError> {
        let mut labels: Vec<&str> = Vec::new();

        for feature in Feature::ALL {
            if feature.amount_capped() && principal > self.pilot_limit {
                continue;
            }
            if toggles.is_enabled(feature.toggle_name()).await? {
                labels.push(feature.label());
            }
        }

        if labels.is_empty() {
            tracing::debug!(%principal, "no features apply to claim");
            Ok(None)
        } else {
            Ok(Some(labels.join(", ")))
        }
    }
}
