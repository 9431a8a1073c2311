//! Shared types used across milk.
//!
//! This module defines the newtypes and enums that flow through the
//! scan pipeline: the area codes being scanned, the candidate numbers pulled
//! out of listing pages, and the tiers those numbers are classified into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for telephone area codes.
///
/// Area codes are opaque labels: they are substituted into the listing
/// service URL and shown in the progress line, but no digit or length
/// constraint is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaCode(String);

impl AreaCode {
    /// Create a new `AreaCode` from any string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AreaCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for AreaCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// A candidate phone number taken from a listing page.
///
/// Holds exactly ten characters. The content is not validated as numeric;
/// ordering is by code point, which matches numeric order for digit-only
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateNumber(String);

impl CandidateNumber {
    /// Number of characters in every candidate.
    pub const LEN: usize = 10;

    /// Take the trailing ten characters of a link target.
    ///
    /// Returns `None` when the value is shorter than ten characters.
    #[must_use]
    pub fn from_link_target(target: &str) -> Option<Self> {
        target
            .char_indices()
            .rev()
            .nth(Self::LEN - 1)
            .map(|(start, _)| Self(target[start..].to_string()))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Desirability tiers a candidate number can be classified into.
///
/// Tiers are independent: a number may belong to several at once.
/// Variants are declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Most desirable numbers
    Vip,
    /// Highly desirable numbers
    Platinum,
    /// Numbers with a noticeable pattern
    Notable,
}

impl Tier {
    /// All tiers in report order.
    pub const ALL: [Tier; 3] = [Tier::Vip, Tier::Platinum, Tier::Notable];

    /// Look up a tier by its filter name (case-insensitive).
    ///
    /// Only the canonical names `vip`, `platinum` and `notable` are accepted;
    /// aliases are resolved by the scanner's tier filter.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "vip" => Some(Self::Vip),
            "platinum" => Some(Self::Platinum),
            "notable" => Some(Self::Notable),
            _ => None,
        }
    }

    /// Get a human-readable display name for the tier.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vip => "VIP",
            Self::Platinum => "Platinum",
            Self::Notable => "Notable",
        }
    }

    /// Title line printed above the tier's section of the report.
    #[must_use]
    pub fn report_title(&self) -> &'static str {
        match self {
            Self::Vip => "VIP Numbers found:",
            Self::Platinum => "Platinum Numbers found:",
            Self::Notable => "Notable pattern matches found:",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
