use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use help_explainer_core::{HelpBundle, validate_bundle};
use help_explainer_parser::bundle::{load_bundle, parse_help_dir, save_bundle};
use help_explainer_parser::output::{OutputFormat, format_command, format_report};
use help_explainer_parser::{ParserConfig, parse_help_text_with_report};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "help-explain")]
#[command(about = "Parse fixed-layout help text into explainer data")]
struct Cli {
    /// Parser configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log parser decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse help text from stdin.
    ParseStdin(ParseStdinArgs),
    /// Parse help text from a file.
    ParseFile(ParseFileArgs),
    /// Parse a directory of `<command>.txt` help dumps into a bundle file.
    ParseDir(ParseDirArgs),
    /// Validate one or more bundle JSON files.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Command name for the help text being parsed.
    #[arg(long)]
    command: String,
    /// Output both the parsed command and the parse report.
    #[arg(long)]
    with_report: bool,
    /// Output format (defaults to the configured format).
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Command name for the help text being parsed.
    #[arg(long)]
    command: String,
    /// Path to file containing help text.
    #[arg(long)]
    input: PathBuf,
    /// Output both the parsed command and the parse report.
    #[arg(long)]
    with_report: bool,
    /// Output format (defaults to the configured format).
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
struct ParseDirArgs {
    /// Directory containing help dumps.
    #[arg(long)]
    input: PathBuf,
    /// Output JSON bundle path.
    #[arg(long)]
    output: PathBuf,
    /// Optional bundle name metadata.
    #[arg(long)]
    name: Option<String>,
    /// Optional bundle description metadata.
    #[arg(long)]
    description: Option<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Bundle JSON files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config).and_then(|config| match cli.command {
        Command::ParseStdin(args) => run_parse_stdin(args, &config),
        Command::ParseFile(args) => run_parse_file(args, &config),
        Command::ParseDir(args) => run_parse_dir(args, &config),
        Command::Validate(args) => run_validate(args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<ParserConfig, String> {
    let Some(path) = path else {
        return Ok(ParserConfig::default());
    };
    let config = ParserConfig::load(&path)
        .map_err(|e| format!("Failed to load config '{}': {e}", path.display()))?;
    debug!(path = %path.display(), ?config, "Loaded parser config");
    Ok(config)
}

fn run_parse_stdin(args: ParseStdinArgs, config: &ParserConfig) -> Result<(), String> {
    let mut help_text = String::new();
    std::io::stdin()
        .read_to_string(&mut help_text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    run_parse_help_text(
        &args.command,
        &help_text,
        args.with_report,
        args.format.unwrap_or(config.output.format),
        config,
    )
}

fn run_parse_file(args: ParseFileArgs, config: &ParserConfig) -> Result<(), String> {
    let help_text = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    run_parse_help_text(
        &args.command,
        &help_text,
        args.with_report,
        args.format.unwrap_or(config.output.format),
        config,
    )
}

fn run_parse_help_text(
    command: &str,
    help_text: &str,
    with_report: bool,
    format: OutputFormat,
    config: &ParserConfig,
) -> Result<(), String> {
    let run = parse_help_text_with_report(help_text, command, config);

    if !with_report {
        println!("{}", format_command(&run.command, format)?);
        return Ok(());
    }

    #[derive(serde::Serialize)]
    struct ParseOutput<'a> {
        command: &'a help_explainer_core::Command,
        report: &'a help_explainer_parser::report::ParseReport,
    }

    let output = ParseOutput {
        command: &run.command,
        report: &run.report,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{yaml}");
        }
        OutputFormat::Markdown | OutputFormat::Table => {
            print!("{}", format_command(&run.command, format)?);
            print!("{}", format_report(&run.report, format)?);
        }
    }
    Ok(())
}

fn run_parse_dir(args: ParseDirArgs, config: &ParserConfig) -> Result<(), String> {
    let runs = parse_help_dir(&args.input, config)
        .map_err(|e| format!("Failed to parse '{}': {e}", args.input.display()))?;

    for run in runs.iter().filter(|run| !run.report.issues.is_empty()) {
        eprint!("{}", format_report(&run.report, OutputFormat::Table)?);
    }

    let mut bundle = HelpBundle::new(PACKAGE_VERSION, chrono::Utc::now().to_rfc3339());
    bundle.name = args.name;
    bundle.description = args.description;
    bundle.commands = runs.into_iter().map(|run| run.command).collect();

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }

    save_bundle(&bundle, &args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;

    println!(
        "Bundled {} command(s) into '{}'.",
        bundle.command_count(),
        args.output.display()
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut failures = 0usize;
    let mut commands = 0usize;

    for path in &args.inputs {
        let bundle = load_bundle(path)
            .map_err(|e| format!("Failed to load bundle '{}': {e}", path.display()))?;
        commands += bundle.command_count();

        for err in validate_bundle(&bundle) {
            eprintln!("{}: {err}", path.display());
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(format!("{failures} validation error(s) found"));
    }

    println!(
        "Validated {} bundle file(s) with {} command(s).",
        args.inputs.len(),
        commands
    );
    Ok(())
}
