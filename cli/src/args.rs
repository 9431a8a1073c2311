//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Swiss Army knife CLI tool
#[derive(Parser, Debug)]
#[command(
    name = "milk",
    about = "A Swiss Army knife CLI tool",
    version,
    arg_required_else_help = true,
    after_help = "Examples:\n  \
                  milk numbers -c 212 415 808 -p VIP\n  \
                  milk numbers --Canada\n  \
                  milk numbers --code 212,415 --pattern vip,platinum --format json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Settings file (defaults to ~/.config/milk/config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Directory holding patterns.toml and regions.toml"
    )]
    pub definitions: Option<PathBuf>,

    #[arg(long, global = true, help = "Skip the pauses around each fetch")]
    pub no_delay: bool,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "text",
        help = "Report format"
    )]
    pub format: OutputFormat,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Search for special phone numbers by area code and pattern",
        long_about = "Scans each area code's listing page and reports numbers matching the \
                      VIP, Platinum and Notable patterns.\n\n\
                      Examples:\n  \
                      milk numbers -c 212 415 808 -r Canada -p VIP,platinum\n  \
                      milk numbers --code 212,415,808 --region TX --pattern VIP\n  \
                      milk numbers --Canada -c 416 604"
    )]
    Numbers(NumbersArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct NumbersArgs {
    #[arg(
        short = 'c',
        long = "code",
        value_name = "CODES",
        help = "Comma or space separated list of area codes (ex. -c 212,415,808)"
    )]
    pub code: Option<String>,

    #[arg(
        short = 'r',
        long = "region",
        value_name = "NAME",
        help = "Region to scan when no codes are given (ex. -r Canada)"
    )]
    pub region: Option<String>,

    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "TIERS",
        help = "Tier(s) to report: vip, platinum, notable, all (ex. -p VIP,platinum)"
    )]
    pub pattern: Option<String>,

    #[arg(long = "Canada", help = "Shorthand for -r Canada")]
    pub canada: bool,

    #[arg(long = "CA", help = "Shorthand for -r CA")]
    pub ca: bool,

    #[arg(long = "NY", help = "Shorthand for -r NY")]
    pub ny: bool,

    #[arg(long = "NYC", help = "Shorthand for -r NYC")]
    pub nyc: bool,

    #[arg(long = "TX", help = "Shorthand for -r TX")]
    pub tx: bool,

    #[arg(value_name = "CODE", help = "Additional area codes")]
    pub extra: Vec<String>,
}

impl NumbersArgs {
    /// Region selected by `-r` or a shorthand flag.
    ///
    /// Shorthands override `-r`; when several are given the last one in
    /// `--Canada --CA --NY --NYC --TX` order wins.
    #[must_use]
    pub fn region_name(&self) -> Option<&str> {
        [
            (self.tx, "TX"),
            (self.nyc, "NYC"),
            (self.ny, "NY"),
            (self.ca, "CA"),
            (self.canada, "Canada"),
        ]
        .into_iter()
        .find_map(|(set, name)| set.then_some(name))
        .or(self.region.as_deref().filter(|region| !region.is_empty()))
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Progress line and plain-text report on stdout
    #[default]
    Text,
    /// JSON report on stdout, progress line on stderr
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(args: &[&str]) -> (Cli, NumbersArgs) {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        let Commands::Numbers(numbers) = &cli.command;
        let numbers = numbers.clone();
        (cli, numbers)
    }

    #[test]
    fn test_parse_numbers_flags() {
        let (cli, args) = numbers(&[
            "milk", "numbers", "-c", "212,415", "-r", "Canada", "-p", "VIP", "808", "--no-delay",
        ]);
        assert_eq!(args.code.as_deref(), Some("212,415"));
        assert_eq!(args.pattern.as_deref(), Some("VIP"));
        assert_eq!(args.extra, vec!["808"]);
        assert_eq!(args.region_name(), Some("Canada"));
        assert!(cli.no_delay);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_shorthand_precedence() {
        let (_, args) = numbers(&["milk", "numbers", "-r", "default", "--CA"]);
        assert_eq!(args.region_name(), Some("CA"));

        let (_, args) = numbers(&["milk", "numbers", "--TX", "--Canada", "--NYC"]);
        assert_eq!(args.region_name(), Some("TX"));

        let (_, args) = numbers(&["milk", "numbers"]);
        assert_eq!(args.region_name(), None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let (cli, _) = numbers(&["milk", "numbers", "--format", "json", "-v"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["milk", "numbers", "-v", "-q"]).is_err());
    }
}
