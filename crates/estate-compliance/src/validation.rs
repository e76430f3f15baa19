//! Will validation against one jurisdiction's formalities
//!
//! Checks run in a fixed order because the messages are shown to the user
//! in that sequence:
//! 1. Minimum testator age (inclusive)
//! 2. Witness count
//! 3. Notarization
//! 4. Self-proving affidavit (recommendation only)
//! 5. Holographic will recognition
//! 6. State estate tax exposure (warning only)
//! 7. Community property (warning only)

use estate_types::{ComplianceChecks, MaritalStatus, ValidationResult, WillData};

use crate::knowledge_base::JurisdictionRecord;

/// Validate a will against a jurisdiction's requirements
pub fn validate_will(record: &JurisdictionRecord, will: &WillData) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    let name = &record.full_name;
    let requirements = &record.will_requirements;
    let inheritance = &record.inheritance;

    let compliance = check_formalities(record, will);

    if !compliance.minimum_age {
        errors.push(format!(
            "Minimum age for creating a will in {} is {}",
            name, requirements.minimum_age
        ));
    }

    if !compliance.witness_requirement {
        errors.push(format!(
            "{} requires {} witnesses",
            name, requirements.witnesses_required
        ));
    }

    if !compliance.notarization {
        errors.push(format!("{} requires notarization of wills", name));
    }

    if requirements.self_proving && !will.self_proving {
        recommendations.push(format!(
            "Consider adding a self-proving affidavit in {} to simplify probate",
            name
        ));
    }

    if !compliance.holographic_allowed {
        errors.push(format!(
            "{} does not recognize holographic (handwritten) wills",
            name
        ));
    }

    if exceeds_estate_tax_threshold(inheritance.estate_tax_threshold, will) {
        warnings.push(format!(
            "Estate may be subject to {} state estate tax (threshold: ${})",
            name,
            format_amount(inheritance.estate_tax_threshold)
        ));
    }

    if inheritance.spouse_share.is_community_property()
        && will.marital_status == MaritalStatus::Married
    {
        warnings.push(format!(
            "{} is a community property state - special rules apply to married couples",
            name
        ));
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        jurisdiction: name.clone(),
        jurisdiction_code: record.code.to_string(),
        errors,
        warnings,
        recommendations,
        compliance,
    }
}

/// Evaluate each formal requirement independently of the messages it produces
pub fn check_formalities(record: &JurisdictionRecord, will: &WillData) -> ComplianceChecks {
    let requirements = &record.will_requirements;

    ComplianceChecks {
        minimum_age: will.age >= requirements.minimum_age,
        witness_requirement: will.witness_count() >= requirements.witnesses_required as usize,
        notarization: !requirements.notarization_required || will.notarized,
        holographic_allowed: !will.is_holographic || requirements.holographic_wills,
    }
}

fn exceeds_estate_tax_threshold(threshold: u64, will: &WillData) -> bool {
    threshold > 0
        && will
            .estate_value
            .is_some_and(|value| value > threshold as f64)
}

/// Format a dollar amount with thousands separators, e.g. 6940000 -> "6,940,000"
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
