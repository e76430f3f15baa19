//! Estate-planning compliance engine
//!
//! A static knowledge base of per-state will formalities and inheritance
//! rules, plus a stateless service that validates wills against it,
//! produces jurisdiction guidance, compares states, and assembles reports.

pub mod comparison;
pub mod error;
pub mod jurisdiction;
pub mod knowledge_base;
pub mod normalize;
pub mod recommendations;
pub mod report;
pub mod service;
pub mod updates;
pub mod validation;

pub use comparison::{ComparisonSummary, JurisdictionComparison};
pub use error::{ComplianceError, KnowledgeBaseError};
pub use jurisdiction::{SpouseShare, State};
pub use knowledge_base::{
    InheritanceRules, JurisdictionRecord, JurisdictionSummary, KnowledgeBase, WillRequirements,
};
pub use normalize::normalize_jurisdiction;
pub use report::{BlockchainCompliance, ComplianceReport, JurisdictionInfo};
pub use service::ComplianceService;
pub use updates::{LegalUpdateSource, StaticLegalUpdates};

pub use estate_types::{
    ComplianceChecks, Finding, FindingKind, LegalUpdate, MaritalStatus, UpdateImpact,
    ValidationResult, WillData, Witness,
};
