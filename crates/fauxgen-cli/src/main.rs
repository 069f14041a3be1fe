mod config;
mod error;
mod logging;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fauxgen_core::{LocaleDocument, LocaleTag};
use fauxgen_generate::output::csv::write_samples_csv;
use fauxgen_generate::output::{Sample, write_samples_lines};
use fauxgen_generate::{Faker, GeneratorRegistry};
use fauxgen_locale::{IssueSeverity, LocaleStore, ValidationIssue, validate_store};
use serde_json::{Map, Value};

use config::{Settings, load_settings};
use error::{CliError, CliResult};
use logging::{LogFormat, init_logging};

#[derive(Parser, Debug)]
#[command(name = "fauxgen", version, about = "Locale-aware fake data generator")]
struct Cli {
    /// Settings file (defaults to ./fauxgen.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter, e.g. `info` or `fauxgen_locale=debug`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List generator ids with their params.
    List,
    /// Generate values for one generator id.
    Generate(GenerateArgs),
    /// Validate builtin and extra locale documents.
    Validate(ValidateArgs),
    /// Print the JSON Schema of a locale document.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Generator id, e.g. `address.zip_code`.
    id: String,
    #[arg(long)]
    locale: Option<String>,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// Generator param as `key=value`; repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,
    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Directory of extra locale documents.
    #[arg(long)]
    locales_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[arg(long)]
    locales_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Lines,
    Csv,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(
        cli.log_level.as_deref(),
        cli.log_format.unwrap_or(settings.log_format),
    )?;

    match cli.command {
        Command::List => run_list(),
        Command::Generate(args) => run_generate(args, &settings),
        Command::Validate(args) => run_validate(args, &settings),
        Command::Schema => run_schema(),
    }
}

fn run_list() -> CliResult<()> {
    let registry = GeneratorRegistry::new();
    let mut stdout = io::stdout().lock();
    for id in registry.generator_ids() {
        let Some(generator) = registry.generator(id) else {
            continue;
        };
        let params: Vec<String> = generator
            .params()
            .iter()
            .map(|spec| format!("{}:{}", spec.key, spec.kind.as_str()))
            .collect();
        if params.is_empty() {
            writeln!(stdout, "{id}")?;
        } else {
            writeln!(stdout, "{id} [{}]", params.join(", "))?;
        }
    }
    Ok(())
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> CliResult<()> {
    let locales_dir = args.locales_dir.as_deref().or(settings.locales_dir.as_deref());
    let store = Arc::new(build_store(settings, locales_dir)?.validated()?);

    let locale = args
        .locale
        .as_deref()
        .or(settings.locale.as_deref())
        .map(LocaleTag::parse)
        .transpose()?;
    let mut faker = match args.seed.or(settings.seed) {
        Some(seed) => Faker::seeded(store, seed),
        None => Faker::new(store),
    };
    if let Some(locale) = locale {
        faker.set_locale(locale);
    }

    let params = parse_params(&args.params)?;
    let registry = GeneratorRegistry::new();
    let samples = generate_samples(&registry, &mut faker, &args.id, args.count, params.as_ref())?;
    tracing::info!(event = "samples_generated", id = %args.id, count = samples.len());

    let writer: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        OutputFormat::Lines => write_samples_lines(writer, &samples)?,
        OutputFormat::Csv => {
            let bytes = write_samples_csv(writer, &samples)?;
            tracing::debug!(event = "csv_written", bytes = bytes);
        }
    }
    Ok(())
}

/// Samples grow with the output; `count` is never used to preallocate.
fn generate_samples(
    registry: &GeneratorRegistry,
    faker: &mut Faker,
    id: &str,
    count: usize,
    params: Option<&Value>,
) -> CliResult<Vec<Sample>> {
    let mut samples = Vec::new();
    for index in 0..count {
        let value = registry.generate(id, faker, params)?;
        samples.push(Sample { index, value });
    }
    Ok(samples)
}

fn run_validate(args: ValidateArgs, settings: &Settings) -> CliResult<()> {
    let locales_dir = args.locales_dir.as_deref().or(settings.locales_dir.as_deref());
    let store = build_store(settings, locales_dir)?;
    let report = validate_store(&store);

    let mut stdout = io::stdout().lock();
    for issue in report.errors.iter().chain(report.warnings.iter()) {
        writeln!(stdout, "{}", format_issue(issue))?;
    }
    writeln!(
        stdout,
        "{} locale(s), {} error(s), {} warning(s)",
        store.locales().count(),
        report.errors.len(),
        report.warnings.len()
    )?;

    if report.is_ok() {
        Ok(())
    } else {
        Err(CliError::Validation(report.errors.len()))
    }
}

fn run_schema() -> CliResult<()> {
    let schema = schemars::schema_for!(LocaleDocument);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn build_store(settings: &Settings, locales_dir: Option<&Path>) -> CliResult<LocaleStore> {
    let mut store = LocaleStore::from_builtin()?;
    store.set_default_locale(LocaleTag::parse(&settings.default_locale)?);
    if let Some(dir) = locales_dir {
        store.load_dir(dir)?;
    }
    Ok(store)
}

/// Parse `key=value` pairs into a params object. Unsigned integers become
/// numbers, everything else stays a string.
fn parse_params(raw: &[String]) -> CliResult<Option<Value>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut map = Map::new();
    for pair in raw {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::InvalidArgs(format!(
                "param '{pair}' must be KEY=VALUE"
            )));
        };
        let value = match value.parse::<u64>() {
            Ok(number) => Value::from(number),
            Err(_) => Value::from(value),
        };
        map.insert(key.trim().to_string(), value);
    }
    Ok(Some(Value::Object(map)))
}

fn format_issue(issue: &ValidationIssue) -> String {
    let severity = match issue.severity {
        IssueSeverity::Error => "error",
        IssueSeverity::Warning => "warning",
    };
    let mut line = format!("{severity} [{}] {}: {}", issue.code, issue.path, issue.message);
    if let Some(hint) = &issue.hint {
        line.push_str(&format!(" (hint: {hint})"));
    }
    line
}
