//! Definition types loaded from TOML files.
//!
//! Two files make up a definitions directory:
//!
//! - `patterns.toml` with a `[patterns]` table listing the regex sources of
//!   each tier
//! - `regions.toml` with a `[regions]` table mapping region names to their
//!   area codes

use crate::error::{PatternError, Result};
use milk_core::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of `patterns.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternsFile {
    /// Tier pattern lists
    #[serde(default)]
    pub patterns: PatternDefinitions,
}

/// Contents of `regions.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionsFile {
    /// Region name to area code table
    #[serde(default)]
    pub regions: RegionDefinitions,
}

/// Uncompiled regex sources for each tier, in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternDefinitions {
    /// VIP tier patterns
    pub vip: Vec<String>,
    /// Platinum tier patterns
    pub platinum: Vec<String>,
    /// Notable tier patterns
    pub notable: Vec<String>,
}

impl PatternDefinitions {
    /// Get the pattern sources for a tier.
    #[must_use]
    pub fn for_tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Vip => &self.vip,
            Tier::Platinum => &self.platinum,
            Tier::Notable => &self.notable,
        }
    }

    /// Validate that no pattern source is blank.
    ///
    /// Empty lists are allowed: a tier without patterns never matches.
    pub fn validate(&self) -> Result<()> {
        for tier in Tier::ALL {
            if let Some(index) = self
                .for_tier(tier)
                .iter()
                .position(|pattern| pattern.trim().is_empty())
            {
                return Err(PatternError::ValidationError {
                    reason: format!("{tier} pattern #{} is empty", index + 1),
                });
            }
        }
        Ok(())
    }
}

/// Region name to area code table.
pub type RegionDefinitions = BTreeMap<String, Vec<String>>;

/// Validate a region table: every region lists at least one non-empty code.
pub fn validate_regions(regions: &RegionDefinitions) -> Result<()> {
    for (name, codes) in regions {
        if name.trim().is_empty() {
            return Err(PatternError::ValidationError {
                reason: "region name cannot be empty".to_string(),
            });
        }
        if codes.is_empty() {
            return Err(PatternError::ValidationError {
                reason: format!("region '{name}' lists no area codes"),
            });
        }
        if codes.iter().any(|code| code.trim().is_empty()) {
            return Err(PatternError::ValidationError {
                reason: format!("region '{name}' contains an empty area code"),
            });
        }
    }
    Ok(())
}
