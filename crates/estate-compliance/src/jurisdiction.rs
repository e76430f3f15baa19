//! Jurisdiction codes and inheritance-regime classification
//!
//! The set of jurisdictions is fixed at build time. Each code is the key into
//! the [`KnowledgeBase`](crate::knowledge_base::KnowledgeBase); adding a
//! jurisdiction means adding a variant here and an entry in the data table.

use serde::{Deserialize, Serialize};

/// US state codes for estate-planning compliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

impl State {
    /// Every known jurisdiction, in the order of the reference data
    pub const ALL: [State; 50] = [
        State::AL,
        State::AK,
        State::AZ,
        State::AR,
        State::CA,
        State::CO,
        State::CT,
        State::DE,
        State::FL,
        State::GA,
        State::HI,
        State::ID,
        State::IL,
        State::IN,
        State::IA,
        State::KS,
        State::KY,
        State::LA,
        State::ME,
        State::MD,
        State::MA,
        State::MI,
        State::MN,
        State::MS,
        State::MO,
        State::MT,
        State::NE,
        State::NV,
        State::NH,
        State::NJ,
        State::NM,
        State::NY,
        State::NC,
        State::ND,
        State::OH,
        State::OK,
        State::OR,
        State::PA,
        State::RI,
        State::SC,
        State::SD,
        State::TN,
        State::TX,
        State::UT,
        State::VT,
        State::VA,
        State::WA,
        State::WV,
        State::WI,
        State::WY,
    ];

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            State::AL => "Alabama",
            State::AK => "Alaska",
            State::AZ => "Arizona",
            State::AR => "Arkansas",
            State::CA => "California",
            State::CO => "Colorado",
            State::CT => "Connecticut",
            State::DE => "Delaware",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::ME => "Maine",
            State::MD => "Maryland",
            State::MA => "Massachusetts",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MS => "Mississippi",
            State::MO => "Missouri",
            State::MT => "Montana",
            State::NE => "Nebraska",
            State::NV => "Nevada",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NM => "New Mexico",
            State::NY => "New York",
            State::NC => "North Carolina",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::OK => "Oklahoma",
            State::OR => "Oregon",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::SC => "South Carolina",
            State::SD => "South Dakota",
            State::TN => "Tennessee",
            State::TX => "Texas",
            State::UT => "Utah",
            State::VT => "Vermont",
            State::VA => "Virginia",
            State::WA => "Washington",
            State::WV => "West Virginia",
            State::WI => "Wisconsin",
            State::WY => "Wyoming",
        }
    }

    /// Two-letter code, e.g. "CA"
    pub fn code(&self) -> &'static str {
        match self {
            State::AL => "AL",
            State::AK => "AK",
            State::AZ => "AZ",
            State::AR => "AR",
            State::CA => "CA",
            State::CO => "CO",
            State::CT => "CT",
            State::DE => "DE",
            State::FL => "FL",
            State::GA => "GA",
            State::HI => "HI",
            State::ID => "ID",
            State::IL => "IL",
            State::IN => "IN",
            State::IA => "IA",
            State::KS => "KS",
            State::KY => "KY",
            State::LA => "LA",
            State::ME => "ME",
            State::MD => "MD",
            State::MA => "MA",
            State::MI => "MI",
            State::MN => "MN",
            State::MS => "MS",
            State::MO => "MO",
            State::MT => "MT",
            State::NE => "NE",
            State::NV => "NV",
            State::NH => "NH",
            State::NJ => "NJ",
            State::NM => "NM",
            State::NY => "NY",
            State::NC => "NC",
            State::ND => "ND",
            State::OH => "OH",
            State::OK => "OK",
            State::OR => "OR",
            State::PA => "PA",
            State::RI => "RI",
            State::SC => "SC",
            State::SD => "SD",
            State::TN => "TN",
            State::TX => "TX",
            State::UT => "UT",
            State::VT => "VT",
            State::VA => "VA",
            State::WA => "WA",
            State::WV => "WV",
            State::WI => "WI",
            State::WY => "WY",
        }
    }

    /// Parse from a two-letter state code (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        State::ALL.iter().copied().find(|state| state.code() == upper)
    }

    /// Parse from the full state name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim();
        State::ALL
            .iter()
            .copied()
            .find(|state| state.name().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Surviving-spouse entitlement regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpouseShare {
    /// Property acquired during marriage is jointly owned
    CommunityProperty,
    /// Spouse may claim a statutory minimum regardless of the will
    ElectiveShare,
    /// Common-law dower and curtesy rights
    DowerCurtesy,
    /// Uniform Marital Property Act regime (Wisconsin)
    MaritalProperty,
    /// Tenancy by the entirety protections
    Entirety,
    /// Intestacy share applies by default
    IntestacyShare,
}

impl SpouseShare {
    pub fn is_community_property(&self) -> bool {
        matches!(self, SpouseShare::CommunityProperty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parsing() {
        assert_eq!(State::parse_code("CA"), Some(State::CA));
        assert_eq!(State::parse_code("ca"), Some(State::CA));
        assert_eq!(State::parse_code(" ny "), Some(State::NY));
        assert_eq!(State::parse_code("ZZ"), None);
        assert_eq!(State::parse_code(""), None);
    }

    #[test]
    fn test_codes_are_not_names() {
        // Only codes are accepted here; names go through `from_name`
        assert_eq!(State::parse_code("california"), None);
        assert_eq!(State::from_name("california"), Some(State::CA));
        assert_eq!(State::from_name("New Hampshire"), Some(State::NH));
        assert_eq!(State::from_name("Ontario"), None);
    }

    #[test]
    fn test_all_codes_round_trip() {
        for state in State::ALL {
            assert_eq!(State::parse_code(state.code()), Some(state));
            assert_eq!(state.to_string(), state.code());
            assert_eq!(format!("{:?}", state), state.code());
        }
    }

    #[test]
    fn test_all_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for state in State::ALL {
            assert!(seen.insert(state), "{} listed twice", state);
        }
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn test_spouse_share_serde() {
        let share: SpouseShare = serde_json::from_str("\"community_property\"").unwrap();
        assert!(share.is_community_property());
        let share: SpouseShare = serde_json::from_str("\"dower_curtesy\"").unwrap();
        assert_eq!(share, SpouseShare::DowerCurtesy);
        assert!(serde_json::from_str::<SpouseShare>("\"tenancy\"").is_err());
    }
}
