//! Command-line interface for the icon-badge binary.
//!
//! Every subcommand reads a YAML badge configuration and either prints one of
//! its serialized forms, downloads the shield it describes, or runs the badge
//! executable with it.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
    time::Duration,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use icon_badge::{
    BadgeArguments, BadgeConfig, Error, ShieldConfig, ShieldsIoClient, load_config, run_badge,
    shield_io_error,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for badging app icons.
#[derive(Debug, Parser,)]
#[command(name = "icon-badge", version, about = "Badge app icons and render shields.io shields")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Print the arguments passed to the badge executable.
    Args(ArgsArgs,),
    /// Print the `label-message-color` identity of the shield.
    Identity(ConfigArgs,),
    /// Print the shields.io query string of the shield.
    Query(ConfigArgs,),
    /// Download the shield SVG from shields.io.
    Fetch(FetchArgs,),
    /// Run the badge executable with the configured settings.
    Run(RunArgs,),
}

#[derive(Debug, Args,)]
struct ConfigArgs
{
    /// Path to the YAML badge configuration.
    #[arg(long = "config", value_name = "PATH", env = "ICON_BADGE_CONFIG")]
    config: PathBuf,
}

#[derive(Debug, Args,)]
struct ArgsArgs
{
    #[command(flatten)]
    source: ConfigArgs,

    /// Output the process tokens as a JSON array.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args,)]
struct FetchArgs
{
    #[command(flatten)]
    source: ConfigArgs,

    /// File receiving the SVG; stdout when omitted.
    #[arg(long = "output", value_name = "FILE")]
    output: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
struct RunArgs
{
    #[command(flatten)]
    source: ConfigArgs,

    /// Badge executable to run instead of the one found on PATH.
    #[arg(long = "tool", value_name = "PATH")]
    tool: Option<PathBuf,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),),)
        .with_writer(io::stderr,)
        .init();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, network, tool and output errors.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    match cli.command {
        Command::Args(args,) => run_args(args,),
        Command::Identity(args,) => run_identity(args,),
        Command::Query(args,) => run_query(args,),
        Command::Fetch(args,) => run_fetch(args,).await,
        Command::Run(args,) => run_tool(args,),
    }
}

fn run_args(args: ArgsArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.source.config,)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_arguments(&mut handle, &config.to_arguments(), args.json,)
}

fn write_arguments<W: Write,>(writer: &mut W, arguments: &BadgeArguments, json: bool,) -> Result<(), Error,>
{
    if json {
        serde_json::to_writer(&mut *writer, arguments,)?;
        writeln!(writer).map_err(output_error,)
    } else {
        writeln!(writer, "{arguments}").map_err(output_error,)
    }
}

fn run_identity(args: ConfigArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.config,)?;
    write_line(&mut io::stdout().lock(), &require_shield(&config,)?.identity(),)
}

fn run_query(args: ConfigArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.config,)?;
    write_line(&mut io::stdout().lock(), &require_shield(&config,)?.to_query(),)
}

async fn run_fetch(args: FetchArgs,) -> Result<(), Error,>
{
    let config = load_config(&args.source.config,)?;
    let shield = require_shield(&config,)?;
    let client = shield_client(&config,)?;

    let svg = shield.fetch_with(&client,).await?;

    match args.output {
        Some(path,) => {
            fs::write(&path, &svg,).map_err(|source| shield_io_error(&path, source,),)?;
            info!(path = %path.display(), shield = %shield, "wrote shield");
            Ok((),)
        }
        None => write_line(&mut io::stdout().lock(), &svg,),
    }
}

fn run_tool(args: RunArgs,) -> Result<(), Error,>
{
    let mut config = load_config(&args.source.config,)?;
    if let Some(tool,) = args.tool {
        config.tool_path = Some(tool,);
    }
    run_badge(&config,)
}

fn require_shield(config: &BadgeConfig,) -> Result<&ShieldConfig, Error,>
{
    config
        .shield
        .as_ref()
        .ok_or_else(|| Error::validation("configuration has no shield section",),)
}

/// Builds the shields.io client, bounded by `shield_io_timeout` when it is
/// positive.
fn shield_client(config: &BadgeConfig,) -> Result<ShieldsIoClient, Error,>
{
    let builder = ShieldsIoClient::builder();
    let timeout = config
        .shield_io_timeout
        .and_then(|seconds| u64::try_from(seconds,).ok(),)
        .filter(|seconds| *seconds > 0,);

    match timeout {
        Some(seconds,) => builder.timeout(Duration::from_secs(seconds,),).build(),
        None => builder.build(),
    }
}

fn write_line<W: Write,>(writer: &mut W, line: &str,) -> Result<(), Error,>
{
    writeln!(writer, "{line}").map_err(output_error,)
}

fn output_error(source: io::Error,) -> Error
{
    Error::Output {
        source,
    }
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor, path::Path};

    use clap::Parser;
    use icon_badge::{BadgeConfig, Color, Error, ShieldConfig};
    use tempfile::tempdir;

    use super::{Cli, Command, require_shield, run_tool, write_arguments, write_line};

    fn output_of<F,>(write: F,) -> String
    where
        F: FnOnce(&mut Cursor<Vec<u8,>,>,) -> Result<(), Error,>,
    {
        let mut buffer = Cursor::new(Vec::new(),);
        write(&mut buffer,).expect("write should succeed",);
        String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",)
    }

    #[test]
    fn args_subcommand_parses_json_flag()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "args", "--config", "badge.yaml", "--json",],)
            .expect("failed to parse CLI",);

        match cli.command {
            Command::Args(args,) => {
                assert_eq!(args.source.config, Path::new("badge.yaml"));
                assert!(args.json);
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn fetch_subcommand_accepts_output()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "fetch",
            "--config",
            "badge.yaml",
            "--output",
            "shield.svg",
        ],)
        .expect("failed to parse CLI",);

        match cli.command {
            Command::Fetch(args,) => assert_eq!(args.output.as_deref(), Some(Path::new("shield.svg"))),
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn arguments_render_as_text_or_json()
    {
        let arguments = BadgeConfig {
            grayscale: true, ..BadgeConfig::default()
        }
        .to_arguments();

        let text = output_of(|buffer| write_arguments(buffer, &arguments, false,),);
        assert_eq!(text, "--badge_gravity SouthEast --grayscale\n");

        let json = output_of(|buffer| write_arguments(buffer, &arguments, true,),);
        assert_eq!(json, "[\"--badge_gravity\",\"SouthEast\",\"--grayscale\"]\n");
    }

    #[test]
    fn write_line_appends_newline()
    {
        let query = ShieldConfig::new("label", "message", Color::rgb(255, 105, 180,),).to_query();
        let output = output_of(|buffer| write_line(buffer, &query,),);
        assert_eq!(output, "label=label&message=message&color=ff69b4\n");
    }

    #[test]
    fn shield_commands_require_shield_section()
    {
        let error = require_shield(&BadgeConfig::default(),).expect_err("no shield",);
        match error {
            Error::Validation {
                message,
            } => assert_eq!(message, "configuration has no shield section"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_subcommand_uses_tool_override()
    {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("badge.yaml",);
        let recorded = temp.path().join("arguments.txt",);
        let tool = temp.path().join("fake-badge",);

        fs::write(&config_path, "dark: true\nglob: \"*.png\"\n",).expect("failed to write config",);
        fs::write(&tool, format!("#!/bin/sh\nprintf '%s ' \"$@\" > '{}'\n", recorded.display()),)
            .expect("failed to write tool",);
        let mut permissions = fs::metadata(&tool,).expect("metadata",).permissions();
        permissions.set_mode(0o755,);
        fs::set_permissions(&tool, permissions,).expect("set permissions",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "run",
            "--config",
            config_path.to_str().expect("utf8",),
            "--tool",
            tool.to_str().expect("utf8",),
        ],)
        .expect("failed to parse run command",);

        let args = match cli.command {
            Command::Run(arguments,) => arguments,
            other => panic!("unexpected command variant: {other:?}"),
        };

        run_tool(args,).expect("badge run failed",);

        let arguments = fs::read_to_string(&recorded,).expect("recorded arguments",);
        assert_eq!(arguments, "--dark --badge_gravity SouthEast --glob *.png ");
    }
}
