//! In-memory region table with lookup support.

use crate::{definition::RegionDefinitions, error::Result, loader::DefinitionLoader};
use milk_core::AreaCode;
use std::collections::BTreeMap;
use tracing::debug;

/// Name of the region scanned when nothing else is requested.
pub const DEFAULT_REGION: &str = "default";

/// Region name to area code lookup.
///
/// Names are matched exactly; `"canada"` does not find `"Canada"`.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: BTreeMap<String, Vec<AreaCode>>,
}

impl RegionRegistry {
    /// Build a registry from a region table.
    #[must_use]
    pub fn new(definitions: RegionDefinitions) -> Self {
        let regions = definitions
            .into_iter()
            .map(|(name, codes)| (name, codes.into_iter().map(AreaCode::from).collect()))
            .collect();
        Self { regions }
    }

    /// Create a registry from the loader's region table.
    pub fn load_from(loader: &DefinitionLoader) -> Result<Self> {
        Ok(Self::new(loader.load_regions()?))
    }

    /// Area codes for a region, if the region exists.
    #[must_use]
    pub fn codes(&self, region: &str) -> Option<&[AreaCode]> {
        let codes = self.regions.get(region).map(Vec::as_slice);
        debug!(region, found = codes.is_some(), "region lookup");
        codes
    }

    /// Area codes of the `default` region.
    #[must_use]
    pub fn default_codes(&self) -> Option<&[AreaCode]> {
        self.codes(DEFAULT_REGION)
    }

    /// All region names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}
