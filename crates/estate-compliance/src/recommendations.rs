//! Jurisdiction-specific guidance, independent of validation

use estate_types::WillData;

use crate::knowledge_base::JurisdictionRecord;
use crate::validation::format_amount;

/// Build the recommendation list for a jurisdiction:
/// its specific rules, then summary probate eligibility, then digital assets.
pub fn jurisdiction_recommendations(record: &JurisdictionRecord, will: &WillData) -> Vec<String> {
    let name = &record.full_name;

    let mut recommendations: Vec<String> = record
        .specific_rules
        .iter()
        .map(|rule| format!("{}: {}", name, rule))
        .collect();

    let probate_threshold = record.inheritance.probate_threshold;
    if will
        .declared_estate_value()
        .is_some_and(|value| value < probate_threshold as f64)
    {
        recommendations.push(format!(
            "Your estate may qualify for simplified probate in {} (threshold: ${})",
            name,
            format_amount(probate_threshold)
        ));
    }

    if record.will_requirements.digital_assets_recognized {
        recommendations.push(format!(
            "{} recognizes digital assets - consider including cryptocurrency, NFTs, and digital accounts in your will",
            name
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::State;
    use crate::knowledge_base::KnowledgeBase;

    fn record(state: State) -> JurisdictionRecord {
        KnowledgeBase::builtin().unwrap().get(state).unwrap().clone()
    }

    #[test]
    fn test_rules_are_prefixed_with_name() {
        let ca = record(State::CA);
        let recs = jurisdiction_recommendations(&ca, &WillData::default());
        assert_eq!(recs[0], "California: Community property state");
        assert_eq!(recs.len(), ca.specific_rules.len() + 1);
        assert!(recs
            .last()
            .unwrap()
            .starts_with("California recognizes digital assets"));
    }

    #[test]
    fn test_small_estate_gets_probate_note() {
        let ca = record(State::CA);
        let will = WillData {
            estate_value: Some(50_000.0),
            ..Default::default()
        };
        let recs = jurisdiction_recommendations(&ca, &will);
        assert!(recs.contains(
            &"Your estate may qualify for simplified probate in California (threshold: $184,500)"
                .to_string()
        ));
    }

    #[test]
    fn test_no_probate_note_without_estate_value() {
        let ca = record(State::CA);
        for estate_value in [None, Some(0.0), Some(184_500.0), Some(1_000_000.0)] {
            let will = WillData {
                estate_value,
                ..Default::default()
            };
            let recs = jurisdiction_recommendations(&ca, &will);
            assert!(
                recs.iter().all(|r| !r.contains("simplified probate")),
                "unexpected probate note for {:?}",
                estate_value
            );
        }
    }

    #[test]
    fn test_negative_estate_value_gets_probate_note() {
        let ca = record(State::CA);
        let will = WillData {
            estate_value: Some(-100.0),
            ..Default::default()
        };
        let recs = jurisdiction_recommendations(&ca, &will);
        assert!(recs.iter().any(|r| r.contains("simplified probate")));
    }

    #[test]
    fn test_order_is_rules_then_probate_then_digital() {
        let wy = record(State::WY);
        let will = WillData {
            estate_value: Some(10_000.0),
            ..Default::default()
        };
        let recs = jurisdiction_recommendations(&wy, &will);
        let n = wy.specific_rules.len();
        assert_eq!(recs.len(), n + 2);
        assert!(recs[n].contains("simplified probate"));
        assert!(recs[n + 1].contains("digital assets"));
    }
}
