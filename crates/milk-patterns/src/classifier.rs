//! Tier classification with a backtracking regex engine.
//!
//! Several tier patterns rely on backreferences (`(\d{5})\1`) and negative
//! lookahead (`(?!\1)`), which a finite-automaton engine cannot express, so
//! every pattern is compiled with `fancy_regex`.

use crate::{
    definition::PatternDefinitions,
    error::{PatternError, Result},
};
use fancy_regex::Regex;
use milk_core::Tier;
use tracing::debug;

/// Compiled patterns for a single tier, in match order.
#[derive(Debug, Clone)]
pub struct PatternSet {
    tier: Tier,
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile every pattern source for `tier`.
    ///
    /// The first source that fails to compile aborts with
    /// [`PatternError::InvalidPattern`] naming the tier and the source.
    pub fn compile(tier: Tier, sources: &[String]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                Regex::new(source).map_err(|e| PatternError::InvalidPattern {
                    tier,
                    pattern: source.clone(),
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(%tier, count = patterns.len(), "compiled tier patterns");

        Ok(Self { tier, patterns })
    }

    /// Whether `candidate` matches any pattern of the set.
    ///
    /// Evaluation stops at the first match. A pattern that fails at match
    /// time (backtrack limit exceeded) is treated as not matching.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| match pattern.is_match(candidate) {
                Ok(matched) => matched,
                Err(e) => {
                    debug!(
                        tier = %self.tier,
                        pattern = pattern.as_str(),
                        candidate,
                        error = %e,
                        "pattern evaluation failed"
                    );
                    false
                }
            })
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no patterns. An empty set never matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compiled pattern sets for all three tiers.
#[derive(Debug, Clone)]
pub struct TierPatterns {
    vip: PatternSet,
    platinum: PatternSet,
    notable: PatternSet,
}

impl TierPatterns {
    /// Compile the pattern sources of every tier.
    pub fn compile(definitions: &PatternDefinitions) -> Result<Self> {
        Ok(Self {
            vip: PatternSet::compile(Tier::Vip, &definitions.vip)?,
            platinum: PatternSet::compile(Tier::Platinum, &definitions.platinum)?,
            notable: PatternSet::compile(Tier::Notable, &definitions.notable)?,
        })
    }

    /// The compiled set for a tier.
    #[must_use]
    pub fn set(&self, tier: Tier) -> &PatternSet {
        match tier {
            Tier::Vip => &self.vip,
            Tier::Platinum => &self.platinum,
            Tier::Notable => &self.notable,
        }
    }

    /// Whether `candidate` belongs to `tier`.
    #[must_use]
    pub fn classify(&self, candidate: &str, tier: Tier) -> bool {
        self.set(tier).matches(candidate)
    }

    /// Every tier `candidate` belongs to, in report order.
    ///
    /// Each tier is tested on its own; a candidate can land in several.
    #[must_use]
    pub fn matching_tiers(&self, candidate: &str) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|&tier| self.classify(candidate, tier))
            .collect()
    }
}
