use milk_core::{AllAlias, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Filter name that resolves according to [`AllAlias`].
pub const ALL_ALIAS: &str = "all";

/// Which tiers a scan reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierFilter {
    /// Route every match to each tier it matched.
    #[default]
    Unfiltered,
    /// Route matches only into the listed tiers.
    Only(BTreeSet<Tier>),
}

impl TierFilter {
    /// Build a filter from tier names given on the command line.
    ///
    /// Names are case-insensitive. An empty list yields
    /// [`TierFilter::Unfiltered`]; unknown names are skipped.
    pub fn parse<S: AsRef<str>>(names: &[S], all_alias: AllAlias) -> Self {
        if names.is_empty() {
            return Self::Unfiltered;
        }

        let mut tiers = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            if name.eq_ignore_ascii_case(ALL_ALIAS) {
                match all_alias {
                    AllAlias::NotableOnly => {
                        tiers.insert(Tier::Notable);
                    }
                    AllAlias::EveryTier => tiers.extend(Tier::ALL),
                }
                continue;
            }

            match Tier::from_name(name) {
                Some(tier) => {
                    tiers.insert(tier);
                }
                None => warn!(name, "ignoring unknown tier name"),
            }
        }

        Self::Only(tiers)
    }

    pub fn routes(&self, tier: Tier) -> bool {
        match self {
            Self::Unfiltered => true,
            Self::Only(tiers) => tiers.contains(&tier),
        }
    }
}
