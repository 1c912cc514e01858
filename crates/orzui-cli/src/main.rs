//! OrzUI CLI - Add OrzUI components to your project

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use orzui_core::tui::{AddArgs, InitArgs};
use orzui_core::{LanguageMode, Style, Workspace, AVAILABLE_COMPONENTS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling log verbosity (falls back to RUST_LOG)
const LOG_ENV: &str = "ORZUI_LOG";

#[derive(Parser, Debug)]
#[command(name = "orzui")]
#[command(about = "CLI to add OrzUI components to your project")]
#[command(version)]
#[command(after_help = "Example usage:
  $ orzui init
  $ orzui add button
  $ orzui add --all")]
pub struct Args {
    /// Project directory to operate on (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize OrzUI in your project
    Init(CliInitArgs),
    /// Add components to your project
    #[command(after_help = "Examples:
  $ orzui add button
  $ orzui add --all
  $ orzui add button --overwrite")]
    Add(CliAddArgs),
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    #[arg(value_name = "COMPONENTS", help = components_help())]
    pub components: Vec<String>,

    /// Add all components
    #[arg(short, long)]
    pub all: bool,

    /// Overwrite existing components
    #[arg(short, long)]
    pub overwrite: bool,
}

fn components_help() -> String {
    format!("Components to add ({})", AVAILABLE_COMPONENTS.join(", "))
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            components: args.components,
            all: args.all,
            overwrite: args.overwrite,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Where to save components
    #[arg(long = "components-path")]
    pub components_path: Option<String>,

    /// Where to save utilities
    #[arg(long = "utils-path")]
    pub utils_path: Option<String>,

    /// Generate TypeScript components (.tsx)
    #[arg(long = "typescript", visible_alias = "ts", conflicts_with = "javascript")]
    pub typescript: bool,

    /// Generate JavaScript components (.jsx)
    #[arg(long = "javascript", visible_alias = "js")]
    pub javascript: bool,

    /// Style preference (default, new-york)
    #[arg(long, value_parser = parse_style)]
    pub style: Option<Style>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

fn parse_style(s: &str) -> Result<Style, String> {
    Style::parse(s).ok_or_else(|| {
        let known: Vec<&str> = Style::ALL.iter().map(Style::as_str).collect();
        format!("unknown style '{}' (expected one of: {})", s, known.join(", "))
    })
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        let language_mode = if args.javascript {
            Some(LanguageMode::Untyped)
        } else if args.typescript {
            Some(LanguageMode::Typed)
        } else {
            None
        };

        InitArgs {
            components_path: args.components_path,
            utils_path: args.utils_path,
            language_mode,
            style: args.style,
            yes: args.yes,
        }
    }
}

/// Initialize tracing on stderr so it never mixes with prompt output on stdout
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();
    let workspace =
        Workspace::from_cwd(args.cwd.as_deref()).context("Failed to resolve project directory")?;

    let result = match args.command {
        Some(Command::Init(init_args)) => orzui_core::run_init(&workspace, init_args.into()),
        Some(Command::Add(add_args)) => orzui_core::run_add(&workspace, add_args.into()),
        None => {
            // No subcommand provided, show help
            Args::command().print_help()?;
            return Ok(());
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
