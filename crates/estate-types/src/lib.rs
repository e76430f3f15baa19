pub mod types;
pub mod updates;

pub use types::{
    ComplianceChecks, Finding, FindingKind, MaritalStatus, ValidationResult, WillData, Witness,
};
pub use updates::{LegalUpdate, UpdateImpact};
