//! Customer Feedback Analyzer
//!
//! Categorizes feedback entries as Happy, Sad or Mild and saves the
//! results as CSV.
//!
//! Usage:
//! ```bash
//! feedback-analyzer feedback.txt
//! feedback-analyzer reviews.csv --csv-column comments -o results/analysis.csv
//! feedback-analyzer feedback.txt --config analyzer.toml --log-level debug
//! ```

use clap::Parser;
use colored::Colorize;
use feedback_analyzer::defaults::LOG_LEVEL;
use feedback_analyzer::{
    logging::setup_logging, report, AnalyzerError, AppConfig, Categorizer, LexiconOracle,
    Pipeline, PipelineOptions,
};
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Exit status for a command line clap rejects
const USAGE_EXIT_CODE: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "feedback-analyzer")]
#[command(version)]
#[command(about = "Customer Feedback Analyzer: categorize feedback as Happy, Sad or Mild")]
#[command(after_help = thresholds_help())]
struct Cli {
    /// Input file: plain text (one entry per line) or CSV (.csv)
    input: Option<PathBuf>,

    /// Output CSV path [default: output.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column holding feedback text in CSV input [default: feedback]
    #[arg(long)]
    csv_column: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(short, long)]
    log_level: Option<String>,
}

fn thresholds_help() -> String {
    format!("Categories:\n{}", Categorizer::describe_thresholds())
}

fn usage_banner() -> String {
    format!(
        "Customer Feedback Analyzer v{}\n\n\
         Usage: feedback-analyzer <input> [-o <output>] [--csv-column <name>] [--config <file>]\n\n\
         Arguments:\n  \
           <input>              Text file (one entry per line) or CSV file with feedback\n\n\
         Options:\n  \
           -o, --output <path>  Output CSV file (default: output.csv)\n  \
           --csv-column <name>  CSV column with feedback text (default: feedback)\n  \
           -c, --config <file>  TOML configuration file\n  \
           -l, --log-level <l>  Log level (default: info)\n\n\
         {}\n",
        feedback_analyzer::VERSION,
        thresholds_help()
    )
}

/// Settings after merging the config file with command-line flags
#[derive(Debug)]
struct Settings {
    input: PathBuf,
    output: PathBuf,
    csv_column: String,
    log_level: String,
    lexicon_words: Vec<(String, f64)>,
}

impl Settings {
    fn resolve(cli: Cli, input: PathBuf) -> Result<Self, AnalyzerError> {
        let config = match cli.config.as_deref() {
            Some(path) => AppConfig::from_file(path).map_err(|e| config_error(path, e))?,
            None => AppConfig::default(),
        };

        Ok(Self {
            input,
            output: cli.output.unwrap_or(config.output.path),
            csv_column: cli.csv_column.unwrap_or(config.input.csv_column),
            log_level: cli.log_level.unwrap_or(config.logging.level),
            lexicon_words: config.lexicon.words.into_iter().collect(),
        })
    }
}

fn config_error(path: &Path, err: anyhow::Error) -> AnalyzerError {
    match err.downcast_ref::<io::Error>().map(|e| e.kind()) {
        Some(io::ErrorKind::NotFound) => AnalyzerError::InputNotFound {
            path: path.to_path_buf(),
        },
        Some(io::ErrorKind::PermissionDenied) => AnalyzerError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => AnalyzerError::MalformedInput {
            path: path.to_path_buf(),
            message: format!("{:#}", err),
        },
    }
}

fn run(settings: &Settings) -> Result<(), AnalyzerError> {
    let oracle = LexiconOracle::new().with_words(settings.lexicon_words.iter().cloned());
    let options = PipelineOptions {
        csv_column: settings.csv_column.clone(),
        format: None,
    };
    let pipeline = Pipeline::new(&oracle, options);

    let outcome = pipeline.run(&settings.input, &settings.output)?;

    print!("{}", report::render_notices(&outcome, &settings.input));
    if !outcome.results.is_empty() {
        print!("{}", report::render_results(&outcome.results));
    }
    print!("{}", report::render_summary(&outcome.summary));

    if let Some(output) = &outcome.output {
        println!("\n{} {}", "Results saved to".green(), output.display());
    }

    info!(
        analyzed = outcome.summary.total_count(),
        skipped_blank = outcome.skipped_blank,
        skipped_failed = outcome.skipped_failed,
        "run finished"
    );
    Ok(())
}

fn fail(err: &AnalyzerError) -> ExitCode {
    error!("{}", err);
    eprintln!("{} {}", "Error:".red().bold(), err);
    ExitCode::from(err.exit_code())
}

/// Exit status for a rejected command line, `None` for help and version output
fn usage_exit_code(err: &clap::Error) -> Option<u8> {
    // Same status as malformed input; 2 already means permission denied
    err.use_stderr().then_some(USAGE_EXIT_CODE)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(&e);
            e.print().ok();
            return code.map_or(ExitCode::SUCCESS, ExitCode::from);
        }
    };

    let Some(input) = cli.input.clone() else {
        print!("{}", usage_banner());
        return ExitCode::SUCCESS;
    };

    // Installed before the config file is read so its errors are logged too
    let early_level = cli.log_level.clone().unwrap_or_else(|| LOG_LEVEL.to_string());
    let logging = setup_logging(&early_level);

    let settings = match Settings::resolve(cli, input) {
        Ok(settings) => settings,
        Err(e) => return fail(&e),
    };

    let level_applied = match &logging {
        Ok(handle) => handle.set_level(&settings.log_level),
        Err(_) => setup_logging(&settings.log_level).map(|_| ()),
    };
    if let Err(e) = level_applied {
        eprintln!("{} invalid log level '{}': {}", "Warning:".yellow(), settings.log_level, e);
    }

    match panic::catch_unwind(AssertUnwindSafe(|| run(&settings))) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => fail(&e),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            fail(&AnalyzerError::Unexpected(message))
        }
    }
}
