//! Legal update feed seam
//!
//! No live feed exists yet. [`StaticLegalUpdates`] serves a fixed set of
//! illustrative notices; a real feed can implement [`LegalUpdateSource`] and
//! be injected into the service without touching validation logic.

use chrono::NaiveDate;
use estate_types::{LegalUpdate, UpdateImpact};

use crate::jurisdiction::State;

/// Source of legal update notices for a jurisdiction
pub trait LegalUpdateSource: Send + Sync {
    fn updates_for(&self, state: State) -> Vec<LegalUpdate>;
}

/// Fixed placeholder notices, identical for every jurisdiction
#[derive(Debug, Clone, Default)]
pub struct StaticLegalUpdates;

impl LegalUpdateSource for StaticLegalUpdates {
    fn updates_for(&self, _state: State) -> Vec<LegalUpdate> {
        [
            (
                (2025, 1, 1),
                "Estate Tax",
                "State estate tax thresholds updated for 2025",
                UpdateImpact::Moderate,
            ),
            (
                (2024, 12, 15),
                "Digital Assets",
                "New regulations for cryptocurrency inheritance",
                UpdateImpact::High,
            ),
            (
                (2024, 11, 1),
                "Probate Rules",
                "Simplified probate procedures for small estates",
                UpdateImpact::Low,
            ),
        ]
        .into_iter()
        .filter_map(|((y, m, d), update_type, description, impact)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| LegalUpdate::new(date, update_type, description, impact))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_updates_shape() {
        let updates = StaticLegalUpdates.updates_for(State::CA);
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(updates[0].update_type, "Estate Tax");
        assert_eq!(updates[1].impact, UpdateImpact::High);
        assert_eq!(updates[2].impact, UpdateImpact::Low);
    }

    #[test]
    fn test_static_updates_are_newest_first() {
        let updates = StaticLegalUpdates.updates_for(State::NY);
        assert!(updates.windows(2).all(|w| w[0].date > w[1].date));
    }
}
