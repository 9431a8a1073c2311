//! Milk Patterns - Tier pattern sets and region tables.
//!
//! This crate loads the tier pattern lists and the region table from TOML
//! definition files, compiles the patterns with a backtracking regex engine
//! and classifies candidate numbers into tiers.
//!
//! # Architecture
//!
//! - **Definition Types** ([`definition`]): Raw pattern sources and region lists
//! - **Loader** ([`loader`]): TOML loading with embedded defaults as fallback
//! - **Registry** ([`registry`]): Region name to area code lookup
//! - **Classifier** ([`classifier`]): Compiled per-tier pattern sets
//! - **Errors** ([`error`]): Pattern-specific error types
//!
//! # Example
//!
//! ```rust
//! use milk_core::Tier;
//! use milk_patterns::{DefinitionLoader, RegionRegistry, TierPatterns};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = DefinitionLoader::embedded();
//! let patterns = TierPatterns::compile(&loader.load_patterns()?)?;
//! let regions = RegionRegistry::load_from(&loader)?;
//!
//! assert!(patterns.classify("2125555555", Tier::Vip));
//! assert!(regions.default_codes().is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod classifier;
pub mod definition;
pub mod error;
pub mod loader;
pub mod registry;

// Re-export commonly used types
pub use classifier::{PatternSet, TierPatterns};
pub use definition::{PatternDefinitions, RegionDefinitions};
pub use error::{PatternError, Result};
pub use loader::DefinitionLoader;
pub use registry::{RegionRegistry, DEFAULT_REGION};
