//! Jurisdiction knowledge base
//!
//! Static per-state estate-law requirements, loaded once and shared
//! read-only. The reference table ships embedded in the crate
//! (`data/us_states.json`); callers may substitute any table that satisfies
//! the same completeness rules.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ComplianceError, KnowledgeBaseError};
use crate::jurisdiction::{SpouseShare, State};

/// Embedded reference data for all 50 states
const US_STATES_JSON: &str = include_str!("../data/us_states.json");

/// Will-execution formalities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WillRequirements {
    pub minimum_age: u32,
    pub witnesses_required: u32,
    pub notarization_required: bool,
    pub self_proving: bool,
    pub holographic_wills: bool,
    pub digital_assets_recognized: bool,
}

/// Inheritance and tax rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InheritanceRules {
    pub spouse_share: SpouseShare,
    /// 0 means no state-level estate tax
    pub estate_tax_threshold: u64,
    pub probate_required: bool,
    /// Estates below this value qualify for summary probate
    pub probate_threshold: u64,
}

/// Complete legal-requirements record for one jurisdiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JurisdictionRecord {
    pub code: State,
    pub name: String,
    pub full_name: String,
    pub will_requirements: WillRequirements,
    pub inheritance: InheritanceRules,
    pub specific_rules: Vec<String>,
}

/// Listing entry for jurisdiction pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionSummary {
    pub code: State,
    pub name: String,
    pub full_name: String,
}

impl From<&JurisdictionRecord> for JurisdictionSummary {
    fn from(record: &JurisdictionRecord) -> Self {
        Self {
            code: record.code,
            name: record.name.clone(),
            full_name: record.full_name.clone(),
        }
    }
}

/// Immutable mapping from state code to its requirements record
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<JurisdictionRecord>,
    index: HashMap<State, usize>,
}

impl KnowledgeBase {
    /// Load the embedded 50-state reference table
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::from_json(US_STATES_JSON)
    }

    /// Load a table from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, KnowledgeBaseError> {
        let records: Vec<JurisdictionRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a table from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build a table from records, keeping their order for listings
    pub fn from_records(records: Vec<JurisdictionRecord>) -> Result<Self, KnowledgeBaseError> {
        if records.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.name != record.code.name() {
                return Err(KnowledgeBaseError::NameMismatch {
                    code: record.code,
                    expected: record.code.name(),
                    found: record.name.clone(),
                });
            }
            if index.insert(record.code, position).is_some() {
                return Err(KnowledgeBaseError::DuplicateCode(record.code));
            }
        }

        Ok(Self { records, index })
    }

    /// Resolve a state code (case-insensitive) to its record
    pub fn lookup(&self, code: &str) -> Result<&JurisdictionRecord, ComplianceError> {
        State::parse_code(code)
            .and_then(|state| self.get(state))
            .ok_or_else(|| ComplianceError::not_found(code))
    }

    pub fn get(&self, state: State) -> Option<&JurisdictionRecord> {
        self.index.get(&state).map(|&i| &self.records[i])
    }

    /// Every jurisdiction in source order
    pub fn list_all(&self) -> Vec<JurisdictionSummary> {
        self.records.iter().map(JurisdictionSummary::from).collect()
    }

    pub fn records(&self) -> &[JurisdictionRecord] {
        &self.records
    }

    pub fn codes(&self) -> Vec<State> {
        self.records.iter().map(|r| r.code).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
