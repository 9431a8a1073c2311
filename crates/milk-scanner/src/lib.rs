//! Milk Scanner - Area code scanning pipeline.
//!
//! This crate walks a list of area codes one at a time, fetches each code's
//! listing page, extracts candidate numbers from the markup, classifies them
//! into tiers and aggregates the matches into a report. A single progress
//! line on stdout shows which codes are done, in flight and still queued.
//!
//! # Features
//!
//! - Sequential fetching with a bounded per-request timeout
//! - Per-code failures recorded without stopping the scan
//! - Tier filtering with a configurable `all` alias
//! - Width-aware progress line that survives wrapping
//!
//! # Example
//!
//! ```rust,no_run
//! use milk_core::{AppConfig, AreaCode};
//! use milk_patterns::{DefinitionLoader, TierPatterns};
//! use milk_scanner::{HttpFetcher, Pacing, ProgressRenderer, ScanController, TierFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let patterns = TierPatterns::compile(&DefinitionLoader::embedded().load_patterns()?)?;
//!
//! let mut controller = ScanController::new(
//!     HttpFetcher::new(&config.scanning)?,
//!     patterns,
//!     ProgressRenderer::stdout(),
//! )
//! .with_pacing(Pacing::from_settings(&config.scanning));
//!
//! let report = controller
//!     .run(vec![AreaCode::new("212")], &TierFilter::Unfiltered)
//!     .await;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod aggregator;
#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod extractor;
pub mod fetch;
#[allow(missing_docs)]
pub mod filter;
pub mod orchestrator;
#[allow(missing_docs)]
pub mod progress;
pub mod report;
#[allow(missing_docs)]
pub mod state;
#[allow(missing_docs)]
pub mod url_builder;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use error::{Result, ScanError};
pub use extractor::extract;
pub use fetch::{Fetcher, HttpFetcher};
pub use filter::TierFilter;
pub use orchestrator::{Pacing, ScanController};
pub use progress::{
    strip_ansi, visible_width, ProgressRenderer, RedrawMode, TerminalStream, WidthSource,
};
pub use report::{format_number, Report, ReportSection};
pub use state::{CodeOutcome, CodeStatus, ScanState};
pub use url_builder::build_search_url;
