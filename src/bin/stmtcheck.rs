use clap::{Parser, Subcommand};
use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
};
use stmtcheck::{
    config::{self, CheckerConfig, ReportFormat},
    formatter::Formatter,
    report::{FileReport, Report},
    runner::Runner,
    CheckerError,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(
        short,
        long,
        default_value = "stmtcheck.json",
        env = "STMTCHECK_CONFIG",
        global = true
    )]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check numbered input files (1.txt, 2.txt, ...) and write a report
    Run(RunArgs),

    /// Check the given lines, or stdin when none are given, and print a report
    Check(CheckArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Directory holding the numbered input files
    #[arg(short, long, env = "STMTCHECK_INPUT_DIR")]
    dir: Option<PathBuf>,

    /// Report destination
    #[arg(short, long, env = "STMTCHECK_OUTPUT")]
    output: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Include the lexer's token log for every sentence
    #[arg(long)]
    lexemes: bool,

    /// Do not echo progress to the console
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Parser)]
struct CheckArgs {
    /// Statements to check
    lines: Vec<String>,

    /// Report format (text, json)
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Include the lexer's token log for every sentence
    #[arg(long)]
    lexemes: bool,
}

fn load_config(path: &Path) -> Result<CheckerConfig, CheckerError> {
    if path.exists() {
        let config = config::from_file(path)?;
        info!("config loaded from {}", path.display());
        Ok(config)
    } else {
        Ok(CheckerConfig::default())
    }
}

fn run_files(args: &RunArgs, mut config: CheckerConfig) -> Result<bool, CheckerError> {
    if let Some(dir) = &args.dir {
        config.input_dir = dir.clone();
    }
    if let Some(output) = &args.output {
        config.output_file = output.clone();
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
    config.report.show_lexer_output |= args.lexemes;
    config.progress &= !args.quiet;
    debug!("config: {:?}", config);

    let runner = Runner::new(config);
    let report = runner.run()?;
    let output = runner.write_report(&report)?;

    if runner.config().progress {
        println!(
            "\nPlease check {} for full details on the errors found.\n",
            output.display()
        );
    }
    Ok(true)
}

fn check_lines(args: &CheckArgs, mut config: CheckerConfig) -> Result<bool, CheckerError> {
    if let Some(format) = args.format {
        config.report.format = format;
    }
    config.report.show_lexer_output |= args.lexemes;

    let file = if args.lines.is_empty() {
        let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
        FileReport::from_lines("<stdin>", lines.iter().map(String::as_str))
    } else {
        FileReport::from_lines("<args>", args.lines.iter().map(String::as_str))
    };
    let report = Report { files: vec![file] };

    let output = Formatter::new(config.report).format(&report)?;
    print!("{}", output);

    Ok(!report.has_errors())
}

fn run(cli: &Cli) -> Result<bool, CheckerError> {
    let config = load_config(&cli.config)?;
    match &cli.command {
        Commands::Run(args) => run_files(args, config),
        Commands::Check(args) => check_lines(args, config),
    }
}

fn main() {
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
