// SPDX-License-Identifier: MIT

//!
//! The tier (rank) type
//!

use crate::ConfigurationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// The tiers used when none are configured, lowest first
pub const DEFAULT_TIERS: [&str; 5] = ["ash", "bronze", "silver", "gold", "iridescent"];

/// A named rank.  The value can be any string apart from one which when
/// trimmed of trailing and leading whitespace is empty.
///
/// A tier's place in the plan comes from its position in the tier list it
/// belongs to, not from the tier itself.
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(String);

impl Tier {
    /// Create and initialise a new tier if it will be valid
    pub fn from<S: ToString>(name: S) -> Result<Self, ConfigurationError> {
        let name = name.to_string();
        if name.trim().is_empty() {
            Err(ConfigurationError::EmptyTierName)
        } else {
            Ok(Tier(name.trim().to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Tier::from(string).map_err(serde::de::Error::custom)
    }
}

/// Build an ordered tier list from names, rejecting empty lists, empty names
/// and duplicates
pub fn tiers_from_names<I, S>(names: I) -> Result<Vec<Tier>, ConfigurationError>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let tiers = names
        .into_iter()
        .map(Tier::from)
        .collect::<Result<Vec<Tier>, ConfigurationError>>()?;
    ensure_valid_tier_list(&tiers)?;
    Ok(tiers)
}

/// The [`DEFAULT_TIERS`] as a tier list
pub fn default_tiers() -> Vec<Tier> {
    DEFAULT_TIERS.iter().map(|name| Tier(name.to_string())).collect()
}

/// Check that the list is non-empty and holds no duplicates
pub fn ensure_valid_tier_list(tiers: &[Tier]) -> Result<(), ConfigurationError> {
    if tiers.is_empty() {
        return Err(ConfigurationError::NoTiers);
    }
    let mut seen = BTreeSet::new();
    for tier in tiers {
        if !seen.insert(tier) {
            return Err(ConfigurationError::DuplicateTier(tier.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from() {
        assert!(Tier::from("").is_err());
        assert!(Tier::from("  ").is_err());
        let ok_1 = Tier::from("gold").unwrap();
        let ok_2 = Tier::from(" gold ").unwrap();
        assert_eq!(ok_1, ok_2);
        assert_eq!(ok_1.as_str(), "gold");
    }

    #[test]
    fn from_names() {
        let tiers = tiers_from_names(["ash", "bronze"]).unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[1].as_str(), "bronze");

        assert_eq!(
            tiers_from_names(Vec::<String>::new()),
            Err(ConfigurationError::NoTiers)
        );
        assert_eq!(
            tiers_from_names(["ash", "bronze", " ash"]),
            Err(ConfigurationError::DuplicateTier("ash".to_string()))
        );
        assert_eq!(
            tiers_from_names(["ash", ""]),
            Err(ConfigurationError::EmptyTierName)
        );
    }

    #[test]
    fn defaults() {
        let tiers = default_tiers();
        assert_eq!(tiers.len(), DEFAULT_TIERS.len());
        assert!(ensure_valid_tier_list(&tiers).is_ok());
    }

    #[test]
    fn deserialize() {
        let tiers: Vec<Tier> = serde_json::from_str(r#"["ash", " gold "]"#).unwrap();
        assert_eq!(tiers[1].as_str(), "gold");
        assert!(serde_json::from_str::<Vec<Tier>>(r#"["ash", " "]"#).is_err());
    }
}
