//! Compliance service over a jurisdiction knowledge base
//!
//! Every operation is synchronous and read-only. The service is cheap to
//! clone and safe to share between threads.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use estate_types::{LegalUpdate, ValidationResult, WillData};
use tracing::debug;

use crate::comparison::{compare_jurisdictions, JurisdictionComparison};
use crate::error::{ComplianceError, KnowledgeBaseError};
use crate::knowledge_base::{JurisdictionRecord, JurisdictionSummary, KnowledgeBase};
use crate::recommendations::jurisdiction_recommendations;
use crate::report::{BlockchainCompliance, ComplianceReport, JurisdictionInfo};
use crate::updates::{LegalUpdateSource, StaticLegalUpdates};
use crate::validation::validate_will;

#[derive(Clone)]
pub struct ComplianceService {
    knowledge_base: Arc<KnowledgeBase>,
    updates: Arc<dyn LegalUpdateSource>,
    rules_updated_at: DateTime<Utc>,
}

impl ComplianceService {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self {
            knowledge_base: Arc::new(knowledge_base),
            updates: Arc::new(StaticLegalUpdates),
            rules_updated_at: Utc::now(),
        }
    }

    /// Service over the embedded 50-state table
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Ok(Self::new(KnowledgeBase::builtin()?))
    }

    /// Replace the legal update source
    pub fn with_update_source(mut self, source: impl LegalUpdateSource + 'static) -> Self {
        self.updates = Arc::new(source);
        self
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn rules_updated_at(&self) -> DateTime<Utc> {
        self.rules_updated_at
    }

    pub fn get_jurisdiction_rules(&self, code: &str) -> Result<&JurisdictionRecord, ComplianceError> {
        let result = self.knowledge_base.lookup(code);
        if result.is_err() {
            debug!("Unknown jurisdiction code: {}", code);
        }
        result
    }

    pub fn list_all_jurisdictions(&self) -> Vec<JurisdictionSummary> {
        self.knowledge_base.list_all()
    }

    pub fn validate_will(
        &self,
        will: &WillData,
        code: &str,
    ) -> Result<ValidationResult, ComplianceError> {
        let record = self.get_jurisdiction_rules(code)?;
        let result = validate_will(record, will);

        debug!(
            "Validated will for {}: valid={}, errors={}, warnings={}, recommendations={}",
            record.code,
            result.is_valid,
            result.errors.len(),
            result.warnings.len(),
            result.recommendations.len()
        );

        Ok(result)
    }

    pub fn get_recommendations(
        &self,
        code: &str,
        will: &WillData,
    ) -> Result<Vec<String>, ComplianceError> {
        let record = self.get_jurisdiction_rules(code)?;
        Ok(jurisdiction_recommendations(record, will))
    }

    pub fn compare_jurisdictions<S: AsRef<str>>(
        &self,
        codes: &[S],
    ) -> Result<JurisdictionComparison, ComplianceError> {
        let comparison = compare_jurisdictions(&self.knowledge_base, codes)?;
        debug!("Compared {} jurisdictions", comparison.len());
        Ok(comparison)
    }

    pub fn get_legal_updates(&self, code: &str) -> Result<Vec<LegalUpdate>, ComplianceError> {
        let record = self.get_jurisdiction_rules(code)?;
        Ok(self.updates.updates_for(record.code))
    }

    /// Merge validation, recommendations, and legal updates into one report
    pub fn generate_compliance_report(
        &self,
        will: &WillData,
        code: &str,
    ) -> Result<ComplianceReport, ComplianceError> {
        let validation = self.validate_will(will, code)?;
        let recommendations = self.get_recommendations(code, will)?;
        let legal_updates = self.get_legal_updates(code)?;
        let record = self.get_jurisdiction_rules(code)?;

        Ok(ComplianceReport {
            validation,
            recommendations,
            legal_updates,
            jurisdiction_info: JurisdictionInfo {
                name: record.full_name.clone(),
                rules_updated_at: self.rules_updated_at,
                specific_rules: record.specific_rules.clone(),
            },
            blockchain_compliance: BlockchainCompliance::for_digital_asset_laws(
                record.will_requirements.digital_assets_recognized,
            ),
            generated_at: Utc::now(),
        })
    }
}

impl std::fmt::Debug for ComplianceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceService")
            .field("jurisdictions", &self.knowledge_base.len())
            .field("rules_updated_at", &self.rules_updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::State;
    use estate_types::{UpdateImpact, Witness};

    struct FixedUpdates;

    impl LegalUpdateSource for FixedUpdates {
        fn updates_for(&self, state: State) -> Vec<LegalUpdate> {
            vec![LegalUpdate::new(
                chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                "Test",
                &format!("Update for {}", state),
                UpdateImpact::Low,
            )]
        }
    }

    fn service() -> ComplianceService {
        ComplianceService::builtin().unwrap()
    }

    fn will() -> WillData {
        WillData {
            age: 40,
            witnesses: vec![Witness::new("A"), Witness::new("B")],
            self_proving: false,
            estate_value: Some(100_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_listed_code_resolves() {
        let service = service();
        for summary in service.list_all_jurisdictions() {
            let record = service.get_jurisdiction_rules(summary.code.code()).unwrap();
            assert_eq!(record.code, summary.code);
        }
    }

    #[test]
    fn test_unknown_code_fails_every_operation() {
        let service = service();
        for code in ["ZZ", "zz", "Zz"] {
            let expected = ComplianceError::not_found(code);
            assert_eq!(service.get_jurisdiction_rules(code).unwrap_err(), expected);
            assert_eq!(service.validate_will(&will(), code).unwrap_err(), expected);
            assert_eq!(service.get_recommendations(code, &will()).unwrap_err(), expected);
            assert_eq!(service.get_legal_updates(code).unwrap_err(), expected);
            assert_eq!(
                service.generate_compliance_report(&will(), code).unwrap_err(),
                expected
            );
        }
    }

    #[test]
    fn test_injected_update_source() {
        let service = service().with_update_source(FixedUpdates);
        let updates = service.get_legal_updates("tx").unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].description, "Update for TX");
    }

    #[test]
    fn test_report_composes_sub_operations() {
        let service = service();
        let report = service.generate_compliance_report(&will(), "CA").unwrap();

        assert_eq!(report.validation, service.validate_will(&will(), "CA").unwrap());
        assert_eq!(
            report.recommendations,
            service.get_recommendations("CA", &will()).unwrap()
        );
        assert_eq!(report.legal_updates, service.get_legal_updates("CA").unwrap());
        assert_eq!(report.jurisdiction_info.name, "California");
        assert_eq!(report.jurisdiction_info.rules_updated_at, service.rules_updated_at());
        assert!(report.blockchain_compliance.digital_asset_laws);
        assert_eq!(report.blockchain_compliance.smart_contract_recognition, "experimental");
        assert!(report.generated_at >= service.rules_updated_at());
        // The self-proving recommendation from validation is kept
        assert_eq!(report.validation.recommendations.len(), 1);
    }

    #[test]
    fn test_clones_share_the_table() {
        let service = service();
        let clone = service.clone();
        assert!(std::ptr::eq(service.knowledge_base(), clone.knowledge_base()));
    }
}
