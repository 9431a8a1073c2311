//! `milk numbers`: scan area codes for memorable numbers.

use crate::args::{Cli, NumbersArgs, OutputFormat};
use anyhow::{Context, Result};
use milk_core::{AppConfig, AreaCode, MilkError, Tier};
use milk_patterns::{DefinitionLoader, RegionRegistry, TierPatterns};
use milk_scanner::{HttpFetcher, Pacing, ProgressRenderer, Report, ScanController, TierFilter};
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Longest positional argument still taken as an area code.
const MAX_POSITIONAL_CODE_LEN: usize = 5;

/// Everything a scan needs, resolved from settings, definitions and arguments.
#[derive(Debug)]
pub struct ScanPlan {
    pub config: AppConfig,
    pub fetcher: HttpFetcher,
    pub patterns: TierPatterns,
    pub codes: Vec<AreaCode>,
    pub filter: TierFilter,
}

/// Run the command and map the outcome to an exit code.
pub async fn handle(cli: &Cli, args: &NumbersArgs) -> i32 {
    match execute(cli, args).await {
        Ok(report) => {
            if report.is_empty() {
                info!("no matching numbers found");
            }
            debug!(
                succeeded = report.successes(),
                failed = report.failures(),
                "numbers command finished"
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}

async fn execute(cli: &Cli, args: &NumbersArgs) -> Result<Report> {
    let plan = prepare(cli, args)?;
    let pacing = Pacing::from_settings(&plan.config.scanning);

    match cli.format {
        OutputFormat::Text => {
            let mut controller =
                ScanController::new(plan.fetcher, plan.patterns, ProgressRenderer::stdout())
                    .with_pacing(pacing);
            let report = controller.run(plan.codes, &plan.filter).await;

            let mut stdout = io::stdout().lock();
            write!(stdout, "{report}")?;
            writeln!(stdout)?;
            Ok(report)
        }
        OutputFormat::Json => {
            let mut controller =
                ScanController::new(plan.fetcher, plan.patterns, ProgressRenderer::stderr())
                    .with_pacing(pacing);
            let report = controller.run(plan.codes, &plan.filter).await;

            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to serialize report")?
            );
            Ok(report)
        }
    }
}

/// Load settings and definitions and resolve what to scan.
pub fn prepare(cli: &Cli, args: &NumbersArgs) -> milk_core::Result<ScanPlan> {
    let mut config = AppConfig::load_with_env(cli.config.as_deref())?;
    if let Some(dir) = &cli.definitions {
        config.definitions.dir = Some(dir.clone());
    }
    if cli.no_delay {
        config.scanning.pre_fetch_delay_ms = 0;
        config.scanning.post_fetch_delay_ms = 0;
    }
    config.validate()?;

    let loader = match &config.definitions.dir {
        Some(dir) => DefinitionLoader::new(dir)?,
        None => DefinitionLoader::discover(AppConfig::config_dir().ok().as_deref()),
    };
    match loader.definitions_dir() {
        Some(dir) => info!(dir = %dir.display(), "using definitions directory"),
        None => info!("using built-in definitions"),
    }

    let patterns = TierPatterns::compile(&loader.load_patterns()?)?;
    for tier in Tier::ALL {
        debug!(%tier, patterns = patterns.set(tier).len(), "tier patterns ready");
    }
    let registry = RegionRegistry::load_from(&loader)?;
    let codes = resolve_codes(args, &registry)?;

    let tier_names = args.pattern.as_deref().map(split_list).unwrap_or_default();
    let filter = TierFilter::parse(&tier_names, config.filter.all_alias);

    let fetcher = HttpFetcher::new(&config.scanning)?;

    Ok(ScanPlan {
        config,
        fetcher,
        patterns,
        codes,
        filter,
    })
}

/// Decide which area codes to scan.
///
/// Codes from `-c` and short positional arguments come first. A region is
/// only consulted when no codes were given, and the `default` region is the
/// last resort.
pub fn resolve_codes(
    args: &NumbersArgs,
    registry: &RegionRegistry,
) -> milk_core::Result<Vec<AreaCode>> {
    let mut codes: Vec<AreaCode> = args
        .code
        .as_deref()
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .map(AreaCode::from)
        .collect();

    for arg in &args.extra {
        if !arg.starts_with('-') && arg.chars().count() <= MAX_POSITIONAL_CODE_LEN {
            codes.push(AreaCode::new(arg.as_str()));
        } else {
            warn!(arg = %arg, "ignoring argument that is not an area code");
        }
    }

    if !codes.is_empty() {
        if let Some(region) = args.region_name() {
            debug!(region, "explicit codes given, region ignored");
        }
        return Ok(codes);
    }

    if let Some(region) = args.region_name() {
        match registry.codes(region) {
            Some(region_codes) => return Ok(region_codes.to_vec()),
            None => {
                let known = registry.names().collect::<Vec<_>>().join(", ");
                warn!(region, known = %known, "unknown region, using default codes");
            }
        }
    }

    registry.default_codes().map(<[AreaCode]>::to_vec).ok_or_else(|| {
        MilkError::Validation("no area codes specified and default region not found".to_string())
    })
}

/// Split a comma or whitespace separated list.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
