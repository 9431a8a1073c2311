//! Scan controller for the per-code fetch loop.
//!
//! This module provides the [`ScanController`], which walks the code list in
//! order, fetches each listing page, classifies the extracted numbers and
//! keeps the progress line current. A failing code is recorded and the scan
//! moves on; nothing inside the loop aborts the scan.

use crate::aggregator::Aggregator;
use crate::error::Result;
use crate::extractor::extract;
use crate::fetch::Fetcher;
use crate::filter::TierFilter;
use crate::progress::ProgressRenderer;
use crate::report::Report;
use crate::state::{CodeOutcome, ScanState};
use milk_core::{AreaCode, ScanningConfig};
use milk_patterns::TierPatterns;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pauses around each fetch so the progress line is readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    /// Pause after marking a code in flight, before the request
    pub pre_fetch: Duration,
    /// Pause after drawing the code's final status
    pub post_fetch: Duration,
}

impl Pacing {
    /// Pacing taken from the scanning settings.
    #[must_use]
    pub fn from_settings(settings: &ScanningConfig) -> Self {
        Self {
            pre_fetch: Duration::from_millis(settings.pre_fetch_delay_ms),
            post_fetch: Duration::from_millis(settings.post_fetch_delay_ms),
        }
    }

    /// No pauses at all.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// Drives one scan over a list of area codes.
pub struct ScanController<F, W: Write> {
    /// Source of listing pages
    fetcher: F,
    /// Compiled tier patterns
    patterns: TierPatterns,
    /// Progress line output
    renderer: ProgressRenderer<W>,
    /// Pauses around each fetch
    pacing: Pacing,
}

impl<F: Fetcher, W: Write> ScanController<F, W> {
    /// Create a new controller without pacing.
    #[must_use]
    pub fn new(fetcher: F, patterns: TierPatterns, renderer: ProgressRenderer<W>) -> Self {
        Self {
            fetcher,
            patterns,
            renderer,
            pacing: Pacing::none(),
        }
    }

    /// Set the pauses around each fetch.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// The progress renderer, for inspecting what was written.
    pub fn renderer(&self) -> &ProgressRenderer<W> {
        &self.renderer
    }

    /// Scan `codes` in order and build the report.
    ///
    /// Per-code failures are recorded in the report's outcomes. An empty
    /// code list yields an empty report.
    pub async fn run(&mut self, codes: Vec<AreaCode>, filter: &TierFilter) -> Report {
        info!(codes = codes.len(), ?filter, "starting scan");

        let mut state = ScanState::new(codes);
        let mut aggregator = Aggregator::new();

        Self::log_render_error(self.renderer.begin());

        while let Some(code) = state.start_next() {
            self.redraw(&state);
            pause(self.pacing.pre_fetch).await;

            let outcome = match self.scan_code(&code, filter, &mut aggregator).await {
                Ok(candidates) => {
                    debug!(%code, candidates, "code scanned");
                    CodeOutcome::success(code, candidates)
                }
                Err(e) => {
                    warn!(%code, error = %e, "code scan failed");
                    CodeOutcome::failure(code, e.to_string())
                }
            };

            state.complete(outcome);
            self.redraw(&state);
            pause(self.pacing.post_fetch).await;
        }

        Self::log_render_error(self.renderer.finish());

        let report = Report {
            sections: aggregator.finalize(),
            outcomes: state.into_outcomes(),
        };

        info!(
            succeeded = report.successes(),
            failed = report.failures(),
            sections = report.sections.len(),
            "scan complete"
        );

        report
    }

    /// Fetch, extract and classify one code. Returns the candidate count.
    async fn scan_code(
        &self,
        code: &AreaCode,
        filter: &TierFilter,
        aggregator: &mut Aggregator,
    ) -> Result<usize> {
        let body = self.fetcher.fetch(code).await?;
        let candidates = extract(&body);
        let count = candidates.len();

        for candidate in candidates {
            for tier in self.patterns.matching_tiers(candidate.as_str()) {
                if filter.routes(tier) {
                    debug!(%code, %candidate, %tier, "match");
                    aggregator.record(tier, candidate.clone());
                }
            }
        }

        Ok(count)
    }

    fn redraw(&mut self, state: &ScanState) {
        Self::log_render_error(self.renderer.render(state).map(|_| ()));
    }

    fn log_render_error(result: io::Result<()>) {
        if let Err(e) = result {
            debug!(error = %e, "failed to write progress output");
        }
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
