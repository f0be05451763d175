//! CLI tool to run the query battery over a match results file.
//!
//! Usage:
//!   fixtures-report <games.csv>
//!   fixtures-report <games.csv> --team "Hertha BSC" -o report.txt
//!
//! If no output file is specified, writes to stdout.

use clap::Parser;
use fixtures_rs::{MalformedPolicy, ReportConfig, load_path, run_report};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Load match results and report counts, groupings, averages and lookups.
#[derive(Parser)]
#[command(name = "fixtures-report")]
struct Cli {
    /// Match results file (one header row, then one row per match)
    input: PathBuf,

    /// TOML file with report settings
    #[arg(short, long, env = "FIXTURES_CONFIG")]
    config: Option<PathBuf>,

    /// Reference team
    #[arg(long, env = "FIXTURES_TEAM")]
    team: Option<String>,

    /// Competition label to count
    #[arg(long, env = "FIXTURES_TAG")]
    tag: Option<String>,

    /// Date substring selecting games to regroup
    #[arg(long)]
    year: Option<String>,

    /// Minimum goal difference for the away-win check
    #[arg(long)]
    margin: Option<i64>,

    /// Field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Warn about and skip malformed rows instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log progress and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command-line values over `config`.
    fn apply(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(team) = &self.team {
            config.team = team.clone();
        }
        if let Some(tag) = &self.tag {
            config.tag = tag.clone();
        }
        if let Some(year) = &self.year {
            config.year = year.clone();
        }
        if let Some(margin) = self.margin {
            config.away_margin = margin;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if self.skip_malformed {
            config.on_malformed = MalformedPolicy::Skip;
        }
        config
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn write_output(out_path: &Path, report: &str) -> io::Result<()> {
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, report)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => match ReportConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => ReportConfig::default(),
    };
    let config = cli.apply(file_config);

    let delimiter = match config.delimiter_byte() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let (records, stats) = match load_path(&cli.input, delimiter, config.on_malformed) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading '{}': {e}", cli.input.display());
            process::exit(1);
        }
    };

    let report = run_report(&records, &config);

    if let Some(out_path) = &cli.output {
        if let Err(e) = write_output(out_path, &report) {
            eprintln!("Error writing output file '{}': {e}", out_path.display());
            process::exit(1);
        }
    } else {
        let mut stdout = io::stdout();
        if let Err(e) = stdout
            .write_all(report.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
        {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }

    log::info!(
        "Records: {} rows, {} parsed, {} skipped",
        stats.rows,
        stats.parsed,
        stats.skipped
    );
}
