//! Final scan report.
//!
//! The text form is what the terminal shows after the progress line; the
//! serde form backs `--format json`.

use crate::state::{CodeOutcome, CodeStatus};
use milk_core::{CandidateNumber, Tier};
use serde::Serialize;
use std::fmt;

/// Deduplicated, sorted numbers of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    /// Tier of the section
    pub tier: Tier,
    /// Unique numbers in ascending order
    pub numbers: Vec<CandidateNumber>,
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tier.report_title())?;
        for number in &self.numbers {
            writeln!(f, "{}", format_number(number))?;
        }
        Ok(())
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Non-empty tier sections in report order
    pub sections: Vec<ReportSection>,
    /// Per-code outcomes in scan order
    pub outcomes: Vec<CodeOutcome>,
}

impl Report {
    /// Whether no tier has any number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section for `tier`, if it has numbers.
    #[must_use]
    pub fn section(&self, tier: Tier) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.tier == tier)
    }

    /// Number of codes scanned successfully.
    #[must_use]
    pub fn successes(&self) -> usize {
        self.count(CodeStatus::Success)
    }

    /// Number of codes that failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.count(CodeStatus::Failure)
    }

    fn count(&self, status: CodeStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Format a number as `  +1 (AAA) PPP-LLLL ///// +1-AAA-PPP-LLLL ///// AAAPPPLLLL`.
///
/// Groups are split by character, so non-digit values are printed as they are.
#[must_use]
pub fn format_number(number: &CandidateNumber) -> String {
    let value = number.as_str();
    let chars: Vec<char> = value.chars().collect();
    let group = |range: std::ops::Range<usize>| {
        chars.get(range).unwrap_or_default().iter().collect::<String>()
    };

    let (area, prefix, line) = (group(0..3), group(3..6), group(6..CandidateNumber::LEN));
    format!("  +1 ({area}) {prefix}-{line} ///// +1-{area}-{prefix}-{line} ///// {value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use milk_core::AreaCode;

    fn candidate(value: &str) -> CandidateNumber {
        CandidateNumber::from_link_target(value).expect("ten characters")
    }

    fn section(tier: Tier, values: &[&str]) -> ReportSection {
        ReportSection {
            tier,
            numbers: values.iter().map(|v| candidate(v)).collect(),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(
            format_number(&candidate("2128675309")),
            "  +1 (212) 867-5309 ///// +1-212-867-5309 ///// 2128675309"
        );
    }

    #[test]
    fn test_format_non_digit_value() {
        assert_eq!(
            format_number(&candidate("m/about-us")),
            "  +1 (m/a) bou-t-us ///// +1-m/a-bou-t-us ///// m/about-us"
        );
    }

    #[test]
    fn test_sections_separated_by_blank_line() {
        let report = Report {
            sections: vec![
                section(Tier::Vip, &["2125555555"]),
                section(Tier::Notable, &["2128675999", "3105551000"]),
            ],
            outcomes: vec![],
        };

        let expected = "\
VIP Numbers found:
  +1 (212) 555-5555 ///// +1-212-555-5555 ///// 2125555555

Notable pattern matches found:
  +1 (212) 867-5999 ///// +1-212-867-5999 ///// 2128675999
  +1 (310) 555-1000 ///// +1-310-555-1000 ///// 3105551000
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_empty_report_prints_nothing() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_counts_and_json() {
        let report = Report {
            sections: vec![section(Tier::Platinum, &["2128677777"])],
            outcomes: vec![
                CodeOutcome::success(AreaCode::new("212"), 3),
                CodeOutcome::failure(AreaCode::new("415"), "HTTP 503"),
            ],
        };
        assert_eq!(report.successes(), 1);
        assert_eq!(report.failures(), 1);
        assert!(report.section(Tier::Vip).is_none());

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["sections"][0]["tier"], "platinum");
        assert_eq!(json["sections"][0]["numbers"][0], "2128677777");
        assert_eq!(json["outcomes"][1]["status"], "failure");
        assert!(json["outcomes"][0].get("error").is_none());
    }
}
