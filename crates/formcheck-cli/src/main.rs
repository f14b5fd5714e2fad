// crates/formcheck-cli/src/main.rs
// ============================================================================
// Module: formcheck CLI Entry Point
// Description: Command dispatcher for form validation utilities.
// Purpose: Provide a localized CLI over checksum, rules, messages, and config.
// Dependencies: clap, formcheck-config, formcheck-core, thiserror.
// ============================================================================

//! ## Overview
//! The formcheck CLI exposes the validation library from the shell: card
//! checksums, field rules, file constraints, message lookup, navigation
//! interpolation, and config validation. All user-facing strings are routed
//! through the i18n catalog; validation messages come from the core catalog
//! in the same locale.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use formcheck_cli::i18n::Locale;
use formcheck_cli::i18n::current_locale;
use formcheck_cli::i18n::set_locale;
use formcheck_cli::t;
use formcheck_config::ConfigError;
use formcheck_config::FormcheckConfig;
use formcheck_config::config_toml_example;
use formcheck_core::FieldRule;
use formcheck_core::FileMeta;
use formcheck_core::MessageParams;
use formcheck_core::PasswordStrength;
use formcheck_core::PostalCountry;
use formcheck_core::interpolate;
use formcheck_core::is_valid_checksum;
use formcheck_core::rules::check_file;
use formcheck_core::rules::first_violation;
use formcheck_core::rules::password_strength;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "FORMCHECK_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "formcheck", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `FORMCHECK_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Config file path (defaults to formcheck.toml or `FORMCHECK_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a card number against the Luhn checksum.
    Card(CardCommand),
    /// Resolve a validation message by key.
    Message(MessageCommand),
    /// Check a value against a pre-built field rule.
    Check(CheckCommand),
    /// Check file metadata against the configured upload limits.
    File(FileCommand),
    /// Substitute `{name}` tokens in a navigation template.
    Interpolate(InterpolateCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a formcheck configuration file.
    Validate,
    /// Print a canonical example configuration.
    Example,
}

/// Arguments for the card checksum command.
#[derive(Args, Debug)]
struct CardCommand {
    /// Card number; separators are ignored.
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    number: String,
}

/// Arguments for message lookup.
#[derive(Args, Debug)]
struct MessageCommand {
    /// Message key, flat (`required`) or dotted (`password.uppercase`).
    #[arg(value_name = "KEY")]
    key: String,
    /// Locale code (defaults to the CLI locale).
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,
    /// Numeric parameter for count messages.
    #[arg(long, value_name = "N", conflicts_with = "types")]
    count: Option<u64>,
    /// Comma-separated list parameter for list messages.
    #[arg(long, value_name = "A,B", value_delimiter = ',')]
    types: Vec<String>,
}

/// Arguments for a field rule check.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Rule to apply.
    #[arg(value_enum, value_name = "RULE")]
    kind: CheckKind,
    /// Value to check.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    value: String,
    /// Postal country (defaults to the configured country).
    #[arg(long, value_enum, value_name = "COUNTRY")]
    country: Option<CountryArg>,
}

/// Arguments for a file constraint check.
#[derive(Args, Debug)]
struct FileCommand {
    /// File name; empty means no file was selected.
    #[arg(value_name = "NAME")]
    name: String,
    /// File size in bytes.
    #[arg(long, value_name = "BYTES")]
    size: u64,
    /// MIME type reported for the file.
    #[arg(long = "type", value_name = "MIME")]
    mime_type: String,
}

/// Arguments for template interpolation.
#[derive(Args, Debug)]
struct InterpolateCommand {
    /// Template containing `{name}` tokens.
    #[arg(value_name = "TEMPLATE")]
    template: String,
    /// Substitution in `key=value` form; repeatable.
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,
}

/// Rules available to the check command.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum CheckKind {
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Postal code.
    Postal,
    /// Password against the configured policy.
    Password,
}

/// Supported postal countries.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum CountryArg {
    /// United States.
    Us,
    /// Canada.
    Ca,
    /// France.
    Fr,
    /// United Kingdom.
    #[value(alias = "gb")]
    Uk,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// French.
    Fr,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let loaded = FormcheckConfig::load_or_default(cli.config.as_deref());
    let fallback = loaded.as_ref().map_or(Locale::En, |config| config.locale.default);
    let locale = resolve_locale(cli.lang, env_lang.as_deref(), fallback)?;
    set_locale(locale);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Card(command) => command_card(&command),
        Commands::Interpolate(command) => command_interpolate(&command),
        Commands::Config {
            command,
        } => command_config(&command, cli.config.as_deref()),
        Commands::Message(command) => command_message(&command, &require_config(loaded)?),
        Commands::Check(command) => command_check(&command, &require_config(loaded)?),
        Commands::File(command) => command_file(&command, &require_config(loaded)?),
    }
}

/// Unwraps the loaded configuration into a localized error.
fn require_config(loaded: Result<FormcheckConfig, ConfigError>) -> CliResult<FormcheckConfig> {
    loaded.map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Validation Commands
// ============================================================================

/// Executes the card checksum command.
fn command_card(command: &CardCommand) -> CliResult<ExitCode> {
    if is_valid_checksum(&command.number) {
        write_stdout_line(&t!("card.valid"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        Ok(ExitCode::SUCCESS)
    } else {
        write_stdout_line(&t!("card.invalid"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        Ok(ExitCode::FAILURE)
    }
}

/// Executes the message lookup command. Unknown keys print an empty line.
fn command_message(command: &MessageCommand, config: &FormcheckConfig) -> CliResult<ExitCode> {
    let locale = command.locale.clone().unwrap_or_else(|| current_locale().as_str().to_string());
    let params = message_params(command.count, &command.types);
    let text = config.message_resolver().resolve_str(&command.key, &locale, &params);
    write_stdout_line(&text).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes a field rule check.
fn command_check(command: &CheckCommand, config: &FormcheckConfig) -> CliResult<ExitCode> {
    let rules = check_rules(command.kind, command.country, config);
    let code = match first_violation(&rules, &command.value) {
        Some(violation) => {
            let text = violation.render(&config.message_resolver(), current_locale());
            write_stdout_line(&text).map_err(|err| CliError::new(output_error("stdout", &err)))?;
            ExitCode::FAILURE
        }
        None => {
            write_stdout_line(&t!("check.ok"))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            ExitCode::SUCCESS
        }
    };
    if command.kind == CheckKind::Password {
        let policy = config.password.to_policy();
        let strength = strength_label(password_strength(&command.value, &policy));
        write_stdout_line(&t!("check.strength", strength = strength))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(code)
}

/// Executes a file constraint check.
fn command_file(command: &FileCommand, config: &FormcheckConfig) -> CliResult<ExitCode> {
    let file = FileMeta {
        name: command.name.clone(),
        size_bytes: command.size,
        mime_type: command.mime_type.clone(),
    };
    match check_file(&file, &config.file.to_constraints()) {
        Some(violation) => {
            let text = violation.render(&config.message_resolver(), current_locale());
            write_stdout_line(&text).map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::FAILURE)
        }
        None => {
            write_stdout_line(&t!("check.ok"))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes template interpolation.
fn command_interpolate(command: &InterpolateCommand) -> CliResult<ExitCode> {
    let vars = parse_vars(&command.vars)?;
    let pairs: Vec<(&str, &str)> =
        vars.iter().map(|(key, value)| (key.as_str(), value.as_str())).collect();
    write_stdout_line(&interpolate(&command.template, &pairs))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: &ConfigCommand, path: Option<&Path>) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => command_config_validate(path),
        ConfigCommand::Example => {
            let example = config_toml_example();
            write_stdout_line(example.trim_end())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes the config validation command.
fn command_config_validate(path: Option<&Path>) -> CliResult<ExitCode> {
    let _config = FormcheckConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Argument Helpers
// ============================================================================

/// Resolves the CLI locale from flags, environment, or the configured default.
fn resolve_locale(
    lang: Option<LangArg>,
    env_lang: Option<&str>,
    fallback: Locale,
) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(fallback)
}

/// Builds message parameters from the count and list flags.
fn message_params(count: Option<u64>, types: &[String]) -> MessageParams {
    match count {
        Some(count) => MessageParams::Number(count),
        None if !types.is_empty() => MessageParams::List(types.to_vec()),
        None => MessageParams::None,
    }
}

/// Returns the rule chain for a check, with `Required` first.
fn check_rules(
    kind: CheckKind,
    country: Option<CountryArg>,
    config: &FormcheckConfig,
) -> Vec<FieldRule> {
    let rule = match kind {
        CheckKind::Email => FieldRule::Email,
        CheckKind::Phone => FieldRule::Phone,
        CheckKind::Postal => FieldRule::PostalCode {
            country: country.map_or(config.postal.country, PostalCountry::from),
        },
        CheckKind::Password => FieldRule::Password {
            policy: config.password.to_policy(),
        },
    };
    vec![FieldRule::Required, rule]
}

/// Parses repeated `key=value` arguments.
fn parse_vars(raw: &[String]) -> CliResult<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| CliError::new(t!("interpolate.var.invalid", value = entry)))
        })
        .collect()
}

/// Returns the localized label for a password strength.
fn strength_label(strength: PasswordStrength) -> String {
    match strength {
        PasswordStrength::Weak => t!("strength.weak"),
        PasswordStrength::Fair => t!("strength.fair"),
        PasswordStrength::Strong => t!("strength.strong"),
    }
}

/// Converts CLI language selections into locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Fr => Self::Fr,
        }
    }
}

/// Converts CLI country selections into postal countries.
impl From<CountryArg> for PostalCountry {
    fn from(value: CountryArg) -> Self {
        match value {
            CountryArg::Us => Self::Us,
            CountryArg::Ca => Self::Ca,
            CountryArg::Fr => Self::Fr,
            CountryArg::Uk => Self::Uk,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
