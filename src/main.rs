// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use m2align::alignment::MergePolicy;
use m2align::app_config::{self, Config};
use m2align::app_controller::Controller;
use m2align::conversion::Mode;
use m2align::language_utils::CorpusLanguage;

/// CLI Wrapper for CorpusLanguage to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLanguage {
    En,
    De,
}

impl From<CliLanguage> for CorpusLanguage {
    fn from(cli_language: CliLanguage) -> Self {
        match cli_language {
            CliLanguage::En => CorpusLanguage::English,
            CliLanguage::De => CorpusLanguage::German,
        }
    }
}

/// CLI Wrapper for MergePolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliMergePolicy {
    Rules,
    AllSplit,
    AllMerge,
    AllEqual,
}

impl From<CliMergePolicy> for MergePolicy {
    fn from(cli_policy: CliMergePolicy) -> Self {
        match cli_policy {
            CliMergePolicy::Rules => MergePolicy::Rules,
            CliMergePolicy::AllSplit => MergePolicy::AllSplit,
            CliMergePolicy::AllMerge => MergePolicy::AllMerge,
            CliMergePolicy::AllEqual => MergePolicy::AllEqual,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an M2 file or folder (default command)
    #[command(alias = "conv")]
    Convert(ConvertArgs),

    /// Generate shell completions for m2align
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    /// Input M2 file, or a directory of .m2 files
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Extract edits automatically from the corrected sentences
    #[arg(long, group = "mode")]
    auto: bool,

    /// Keep the gold edits, minimise and reclassify them
    #[arg(long, group = "mode")]
    gold: bool,

    /// Output file, or output directory when the input is a directory
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    out: Option<PathBuf>,

    /// Corpus language
    #[arg(long, value_enum)]
    lang: Option<CliLanguage>,

    /// Do not minimise gold edits (gold only)
    #[arg(long)]
    max_edits: bool,

    /// Keep the original error types (gold only)
    #[arg(long)]
    old_cats: bool,

    /// Align with plain Levenshtein costs
    #[arg(long)]
    lev: bool,

    /// Merging strategy for automatic alignment
    #[arg(long, value_enum)]
    merge: Option<CliMergePolicy>,

    /// Write O/C annotation lines
    #[arg(long)]
    ann: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// m2align - M2 corpus edit extraction and error typing
///
/// Realigns, minimises and classifies the edits of an M2 grammatical-error
/// corpus.
#[derive(Parser, Debug)]
#[command(name = "m2align")]
#[command(version)]
#[command(about = "Edit extraction and error typing for M2 corpora")]
#[command(long_about = "m2align rewrites the edits of an M2 corpus, either by aligning every corrected
sentence with the original (--auto) or by minimising and reclassifying the
annotators' own edits (--gold).

EXAMPLES:
    m2align --auto dev.m2 -o dev.auto.m2             # Extract and type edits automatically
    m2align --gold --lang de dev.m2 -o dev.gold.m2   # Reclassify German gold edits
    m2align --gold --old-cats dev.m2 -o out.m2       # Minimise only, keep categories
    m2align --auto --merge all-split corpus/ -o out/ # Convert a folder, one edit per token
    m2align completions bash > m2align.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. Command line flags override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(LevelFilter::Trace)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, emoji) = Self::style_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "\x1B[{}m{} {} {}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "m2align", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => run_convert(cli.convert),
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let input_path = options
        .input_path
        .clone()
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;
    if !options.auto && !options.gold {
        return Err(anyhow!("One of --auto or --gold is required"));
    }
    let output_path = options.out.clone().ok_or_else(|| anyhow!("--out is required"))?;

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }
        config
            .save(config_path)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    apply_overrides(&mut config, &options);

    config.validate().context("Configuration validation failed")?;

    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    info!(
        "m2align: {} mode, language {}, merge {}",
        config.conversion.mode, config.language, config.conversion.merge
    );

    let controller = Controller::with_config(config)?;

    if input_path.is_file() {
        controller.run(input_path, output_path, options.force_overwrite)?;
    } else if input_path.is_dir() {
        controller.run_folder(input_path, output_path, options.force_overwrite)?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}

// Command line flags win over the configuration file
fn apply_overrides(config: &mut Config, options: &ConvertArgs) {
    if options.auto {
        config.conversion.mode = Mode::Auto;
    }
    if options.gold {
        config.conversion.mode = Mode::Gold;
    }
    if let Some(lang) = &options.lang {
        config.language = lang.clone().into();
    }
    if let Some(merge) = &options.merge {
        config.conversion.merge = merge.clone().into();
    }
    config.conversion.max_edits |= options.max_edits;
    config.conversion.old_cats |= options.old_cats;
    config.conversion.levenshtein |= options.lev;
    config.conversion.annotate |= options.ann;
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}
