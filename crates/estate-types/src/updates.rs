//! Legal update notices shown alongside compliance results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How strongly an update affects existing estate plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateImpact {
    Low,
    Moderate,
    High,
}

/// A single legal update notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalUpdate {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub update_type: String,
    pub description: String,
    pub impact: UpdateImpact,
}

impl LegalUpdate {
    pub fn new(
        date: NaiveDate,
        update_type: &str,
        description: &str,
        impact: UpdateImpact,
    ) -> Self {
        Self {
            date,
            update_type: update_type.to_string(),
            description: description.to_string(),
            impact,
        }
    }
}
