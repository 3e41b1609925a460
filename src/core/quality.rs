//! JPEG quality level.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::ValidationError;

/// JPEG quality in `0..=100`.
///
/// The selector offers steps of 5, but any integer in range is accepted.
/// A batch reads its quality once when it starts and keeps it for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    /// Quality used when nothing has been persisted yet
    pub const DEFAULT: Quality = Quality(60);

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::QualityOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quality {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl FromStr for Quality {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::QualityNotNumeric(trimmed.to_string()))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_range_including_bounds() {
        assert_eq!(Quality::new(0).unwrap().value(), 0);
        assert_eq!(Quality::new(37).unwrap().value(), 37);
        assert_eq!(Quality::new(100).unwrap().value(), 100);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Quality::new(-1), Err(ValidationError::QualityOutOfRange(-1)));
        assert_eq!(Quality::new(101), Err(ValidationError::QualityOutOfRange(101)));
    }

    #[test]
    fn default_is_sixty() {
        assert_eq!(Quality::default().value(), 60);
    }

    #[test]
    fn parses_from_text() {
        assert_eq!(" 85 ".parse::<Quality>().unwrap().value(), 85);
        assert!(matches!(
            "high".parse::<Quality>(),
            Err(ValidationError::QualityNotNumeric(_))
        ));
        assert!(matches!(
            "250".parse::<Quality>(),
            Err(ValidationError::QualityOutOfRange(250))
        ));
    }

    #[test]
    fn serde_goes_through_range_check() {
        let q: Quality = serde_json::from_str("45").unwrap();
        assert_eq!(q.value(), 45);
        assert_eq!(serde_json::to_string(&q).unwrap(), "45");
        assert!(serde_json::from_str::<Quality>("101").is_err());
    }
}
