//! Compliance report assembled from the individual service operations

use chrono::{DateTime, Utc};
use estate_types::{LegalUpdate, ValidationResult};
use serde::{Deserialize, Serialize};

/// Jurisdiction context shown at the top of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionInfo {
    pub name: String,
    /// When the service loaded its rules table
    pub rules_updated_at: DateTime<Utc>,
    pub specific_rules: Vec<String>,
}

/// Recognition of blockchain-recorded wills and digital asset law
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainCompliance {
    pub supported: bool,
    pub smart_contract_recognition: String,
    pub digital_asset_laws: bool,
}

impl BlockchainCompliance {
    pub fn for_digital_asset_laws(digital_asset_laws: bool) -> Self {
        Self {
            supported: true,
            smart_contract_recognition: "experimental".to_string(),
            digital_asset_laws,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub validation: ValidationResult,
    /// Jurisdiction guidance; the validation's own recommendations stay in `validation`
    pub recommendations: Vec<String>,
    pub legal_updates: Vec<LegalUpdate>,
    pub jurisdiction_info: JurisdictionInfo,
    pub blockchain_compliance: BlockchainCompliance,
    pub generated_at: DateTime<Utc>,
}

impl ComplianceReport {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }
}
