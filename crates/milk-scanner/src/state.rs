//! Per-invocation scan state.
//!
//! [`ScanState`] is owned by the scan controller and handed to the progress
//! renderer by reference. Codes are processed in the order given and each
//! receives exactly one [`CodeOutcome`].

use milk_core::AreaCode;
use serde::{Deserialize, Serialize};

/// Terminal status of a scanned code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStatus {
    /// Page fetched and parsed
    Success,
    /// Fetch or parse failed
    Failure,
}

/// Result of scanning a single area code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOutcome {
    /// Area code that was scanned
    pub code: AreaCode,
    /// Terminal status
    pub status: CodeStatus,
    /// Number of candidates extracted from the page
    pub candidates: usize,
    /// Error message if the scan failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CodeOutcome {
    /// Outcome for a code whose page yielded `candidates` numbers.
    #[must_use]
    pub fn success(code: AreaCode, candidates: usize) -> Self {
        Self {
            code,
            status: CodeStatus::Success,
            candidates,
            error: None,
        }
    }

    /// Outcome for a code that could not be scanned.
    #[must_use]
    pub fn failure(code: AreaCode, error: impl Into<String>) -> Self {
        Self {
            code,
            status: CodeStatus::Failure,
            candidates: 0,
            error: Some(error.into()),
        }
    }
}

/// Progress of one scan through its code list.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    codes: Vec<AreaCode>,
    in_flight: bool,
    outcomes: Vec<CodeOutcome>,
}

impl ScanState {
    #[must_use]
    pub fn new(codes: Vec<AreaCode>) -> Self {
        Self {
            codes,
            in_flight: false,
            outcomes: Vec::new(),
        }
    }

    /// Outcomes recorded so far, in input order.
    #[must_use]
    pub fn outcomes(&self) -> &[CodeOutcome] {
        &self.outcomes
    }

    /// The code currently being fetched.
    #[must_use]
    pub fn current(&self) -> Option<&AreaCode> {
        if self.in_flight {
            self.codes.get(self.outcomes.len())
        } else {
            None
        }
    }

    /// Codes not yet started.
    #[must_use]
    pub fn remaining(&self) -> &[AreaCode] {
        let started = self.outcomes.len() + usize::from(self.in_flight);
        self.codes.get(started..).unwrap_or_default()
    }

    /// Mark the next code as in flight and return it.
    ///
    /// Returns `None` once every code has an outcome. Calling this again
    /// before [`ScanState::complete`] returns the same code.
    pub fn start_next(&mut self) -> Option<AreaCode> {
        let next = self.codes.get(self.outcomes.len())?.clone();
        self.in_flight = true;
        Some(next)
    }

    /// Record the outcome of the in-flight code.
    ///
    /// Ignored when no code is in flight.
    pub fn complete(&mut self, outcome: CodeOutcome) {
        if self.in_flight {
            self.outcomes.push(outcome);
            self.in_flight = false;
        }
    }

    #[must_use]
    pub fn into_outcomes(self) -> Vec<CodeOutcome> {
        self.outcomes
    }
}
