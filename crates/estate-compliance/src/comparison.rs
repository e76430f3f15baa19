//! Side-by-side comparison of jurisdictions

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ComplianceError;
use crate::jurisdiction::State;
use crate::knowledge_base::{JurisdictionRecord, KnowledgeBase};

/// Flat projection of a record for comparison tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub name: String,
    pub minimum_age: u32,
    pub witnesses: u32,
    pub notarization: bool,
    pub holographic: bool,
    pub estate_tax: u64,
    pub probate_threshold: u64,
}

impl From<&JurisdictionRecord> for ComparisonSummary {
    fn from(record: &JurisdictionRecord) -> Self {
        Self {
            name: record.full_name.clone(),
            minimum_age: record.will_requirements.minimum_age,
            witnesses: record.will_requirements.witnesses_required,
            notarization: record.will_requirements.notarization_required,
            holographic: record.will_requirements.holographic_wills,
            estate_tax: record.inheritance.estate_tax_threshold,
            probate_threshold: record.inheritance.probate_threshold,
        }
    }
}

/// Code -> summary, in order of first appearance.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JurisdictionComparison {
    entries: Vec<(State, ComparisonSummary)>,
}

impl JurisdictionComparison {
    /// Insert unless the code is already present
    fn insert(&mut self, state: State, summary: ComparisonSummary) {
        if self.get(state).is_none() {
            self.entries.push((state, summary));
        }
    }

    pub fn get(&self, state: State) -> Option<&ComparisonSummary> {
        self.entries
            .iter()
            .find(|(code, _)| *code == state)
            .map(|(_, summary)| summary)
    }

    pub fn codes(&self) -> Vec<State> {
        self.entries.iter().map(|(code, _)| *code).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (State, &ComparisonSummary)> {
        self.entries.iter().map(|(code, summary)| (*code, summary))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for JurisdictionComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, summary) in &self.entries {
            map.serialize_entry(code, summary)?;
        }
        map.end()
    }
}

/// Compare jurisdictions. Any unknown code aborts the whole comparison.
pub fn compare_jurisdictions<S: AsRef<str>>(
    knowledge_base: &KnowledgeBase,
    codes: &[S],
) -> Result<JurisdictionComparison, ComplianceError> {
    let mut comparison = JurisdictionComparison::default();

    for code in codes {
        let record = knowledge_base.lookup(code.as_ref())?;
        comparison.insert(record.code, ComparisonSummary::from(record));
    }

    Ok(comparison)
}
