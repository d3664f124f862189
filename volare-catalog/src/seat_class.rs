use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fare tiers; every flight carries one independent seat pool per tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatClass {
    Economy,
    Business,
    FirstClass,
}

impl SeatClass {
    /// Every class, in the order pools are persisted.
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Business, SeatClass::FirstClass];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::FirstClass => "FirstClass",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatClass {
    type Err = SeatClassError;

    /// Case-insensitive. "First Class" may carry one space, underscore or
    /// hyphen between its two words; no other separators are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw.to_lowercase().as_str() {
            "economy" => Ok(SeatClass::Economy),
            "business" => Ok(SeatClass::Business),
            "firstclass" | "first class" | "first_class" | "first-class" => Ok(SeatClass::FirstClass),
            _ => Err(SeatClassError::Unknown(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatClassError {
    #[error("Unknown seat class: {0} (expected Economy, Business or FirstClass)")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("economy".parse::<SeatClass>().unwrap(), SeatClass::Economy);
        assert_eq!("BUSINESS".parse::<SeatClass>().unwrap(), SeatClass::Business);
        assert_eq!("FirstClass".parse::<SeatClass>().unwrap(), SeatClass::FirstClass);
        assert_eq!(" first class ".parse::<SeatClass>().unwrap(), SeatClass::FirstClass);
        assert_eq!("first_class".parse::<SeatClass>().unwrap(), SeatClass::FirstClass);
        assert_eq!("First-Class".parse::<SeatClass>().unwrap(), SeatClass::FirstClass);
    }

    #[test]
    fn test_unknown_class_is_rejected() {
        let err = "premium".parse::<SeatClass>().unwrap_err();
        assert_eq!(err, SeatClassError::Unknown("premium".to_string()));
        assert!("".parse::<SeatClass>().is_err());
    }

    #[test]
    fn test_separators_only_inside_first_class() {
        for raw in ["eco nomy", "busi-ness", "first  class", "first_-class", "_economy"] {
            assert_eq!(
                raw.parse::<SeatClass>().unwrap_err(),
                SeatClassError::Unknown(raw.to_string()),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&SeatClass::FirstClass).unwrap();
        assert_eq!(json, "\"FIRST_CLASS\"");
        let class: SeatClass = serde_json::from_str("\"ECONOMY\"").unwrap();
        assert_eq!(class, SeatClass::Economy);
    }
}
