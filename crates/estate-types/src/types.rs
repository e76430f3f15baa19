#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Witness {
    pub name: String,
    #[serde(default)]
    pub relationship: Option<String>,
}

impl Witness {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationship: None,
        }
    }
}

/// Will details supplied by the caller for a single validation request.
///
/// Every field has a default so that an incomplete will still validates:
/// missing data turns into findings, not deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WillData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub witnesses: Vec<Witness>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notarized: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub self_proving: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_holographic: bool,
    #[serde(default)]
    pub estate_value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marital_status: MaritalStatus,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl WillData {
    pub fn witness_count(&self) -> usize {
        self.witnesses.len()
    }

    /// Estate value when one was supplied and is non-zero
    pub fn declared_estate_value(&self) -> Option<f64> {
        self.estate_value.filter(|v| *v != 0.0)
    }
}

/// Pass/fail of each formal requirement, recorded even when it passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceChecks {
    pub minimum_age: bool,
    pub witness_requirement: bool,
    pub notarization: bool,
    pub holographic_allowed: bool,
}

impl ComplianceChecks {
    pub fn all_passed(&self) -> bool {
        self.minimum_age && self.witness_requirement && self.notarization && self.holographic_allowed
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub jurisdiction: String,      // Display name, e.g. "California"
    pub jurisdiction_code: String, // e.g. "CA"
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub compliance: ComplianceChecks,
}

impl ValidationResult {
    /// Flatten the three message lists into classified findings,
    /// errors first, then warnings, then recommendations.
    pub fn findings(&self) -> Vec<Finding> {
        let errors = self
            .errors
            .iter()
            .map(|m| Finding::new(FindingKind::Error, m));
        let warnings = self
            .warnings
            .iter()
            .map(|m| Finding::new(FindingKind::Warning, m));
        let recommendations = self
            .recommendations
            .iter()
            .map(|m| Finding::new(FindingKind::Recommendation, m));

        errors.chain(warnings).chain(recommendations).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Error,
    Warning,
    Recommendation,
}

impl FindingKind {
    /// Only errors make a will invalid
    pub fn affects_validity(&self) -> bool {
        matches!(self, FindingKind::Error)
    }
}
