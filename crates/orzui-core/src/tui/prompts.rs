//! Charm-style CLI prompts using cliclack

use crate::config::{LanguageMode, ProjectConfig, Style, DEFAULT_COMPONENTS_PATH, DEFAULT_UTILS_PATH};
use crate::init::{self, InitAnswers, InitReport};
use crate::selection::{self, ComponentPicker, NoPicker, Selection};
use crate::templates::{self, Component, MaterializationOutcome, Placed};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use colored::Colorize;

/// Display name used in intros and hints
const PRODUCT_NAME: &str = "OrzUI";

/// Command users run to invoke the CLI
const CLI_COMMAND: &str = "orzui";

/// CLI arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Components to add (empty: ask interactively)
    pub components: Vec<String>,

    /// Add every available component
    pub all: bool,

    /// Replace files that already exist
    pub overwrite: bool,
}

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Where component files go
    pub components_path: Option<String>,

    /// Where utility files go
    pub utils_path: Option<String>,

    /// Typed or untyped components
    pub language_mode: Option<LanguageMode>,

    /// Style preference
    pub style: Option<Style>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Multi-select prompt for choosing components
#[derive(Debug, Default)]
pub struct CliclackPicker;

impl ComponentPicker for CliclackPicker {
    fn pick(&mut self, available: &[&'static str]) -> Result<Vec<String>> {
        let mut multi = cliclack::multiselect("Select components to add");
        for name in available {
            multi = multi.item(*name, *name, "");
        }

        let selected: Vec<&'static str> = multi.required(false).interact()?;
        Ok(selected.into_iter().map(str::to_string).collect())
    }
}

/// Whether prompts can be shown (stderr is an interactive terminal)
fn is_interactive() -> bool {
    console::Term::stderr().is_term()
}

/// Run `add`: resolve the request, write the components and report the outcome
pub fn run_add(workspace: &Workspace, args: AddArgs) -> Result<()> {
    cliclack::intro(PRODUCT_NAME)?;

    let Some(config) = ProjectConfig::load(workspace.root())? else {
        cliclack::log::error(format!("{} is not initialized.", PRODUCT_NAME))?;
        cliclack::outro_cancel(format!(
            "Run the following command to initialize: {}",
            format!("{} init", CLI_COMMAND).bold()
        ))?;
        anyhow::bail!("{} is not initialized", PRODUCT_NAME);
    };

    let selection = if is_interactive() {
        selection::resolve_selection(&args.components, args.all, &mut CliclackPicker)?
    } else {
        selection::resolve_selection(&args.components, args.all, &mut NoPicker)?
    };

    let requested = match selection {
        Selection::Components(names) => names,
        Selection::Nothing => {
            cliclack::outro("No components selected.")?;
            return Ok(());
        }
    };

    let spinner = cliclack::spinner();
    spinner.start("Adding components...");

    let outcome = match templates::materialize(workspace, &requested, &config, args.overwrite) {
        Ok(outcome) => outcome,
        Err(e) => {
            spinner.error("Failed to add components.");
            return Err(e).context("Failed to add components");
        }
    };

    if outcome.is_rejected() {
        spinner.error("Nothing was added.");
        cliclack::log::error(format!(
            "Components not available: {}",
            outcome.invalid.join(", ")
        ))?;
        cliclack::log::info(format!(
            "Available components:\n{}",
            outcome.available().join(", ")
        ))?;
        cliclack::outro_cancel("Fix the component names and try again.")?;
        outcome.into_result()?;
        return Ok(());
    }

    spinner.stop(format!(
        "Processed {} component{}",
        requested_count(&outcome),
        plural(requested_count(&outcome))
    ));

    print_add_summary(&config, &outcome)?;

    Ok(())
}

fn requested_count(outcome: &MaterializationOutcome) -> usize {
    outcome.added.len() + outcome.skipped.len()
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn bullet_list(placed: &[Placed]) -> String {
    placed
        .iter()
        .map(|p| format!("  • {}", p.file_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_add_summary(config: &ProjectConfig, outcome: &MaterializationOutcome) -> Result<()> {
    if !outcome.added.is_empty() {
        cliclack::log::success(format!(
            "Successfully added {} component{}:\n{}",
            outcome.added.len(),
            plural(outcome.added.len()),
            bullet_list(&outcome.added)
        ))?;
    }

    if !outcome.skipped.is_empty() {
        let names: Vec<&str> = outcome.skipped.iter().map(|p| p.component.as_str()).collect();
        cliclack::log::warning(format!(
            "{} component{} skipped (already exists):\n{}\n\nUse --overwrite to overwrite existing components:\n  {}",
            outcome.skipped.len(),
            plural(outcome.skipped.len()),
            bullet_list(&outcome.skipped).dimmed(),
            format!("{} add {} --overwrite", CLI_COMMAND, names.join(" ")).bold()
        ))?;
    }

    cliclack::log::info(format!("Component location:\n{}", config.components_path))?;

    let example = outcome
        .added
        .first()
        .or_else(|| outcome.skipped.first())
        .map(|p| p.component)
        .unwrap_or(Component::Button);
    cliclack::log::info(format!(
        "Usage:\n{}",
        import_statement(&config.components_path, example)
    ))?;

    if outcome.added.is_empty() {
        cliclack::outro("Nothing new to add.")?;
    } else {
        cliclack::outro(format!(
            "Add more components: {} or {}",
            format!("{} add card input", CLI_COMMAND).bold(),
            format!("{} add --all", CLI_COMMAND).bold()
        ))?;
    }

    Ok(())
}

/// Import line for a component, mapping a leading `src/` onto the `@/` alias
fn import_statement(components_path: &str, component: Component) -> String {
    let trimmed = components_path.trim_start_matches("./").trim_matches('/');
    let module = trimmed.strip_prefix("src/").unwrap_or(trimmed);
    format!(
        "import {{ {} }} from '@/{}/{}'",
        component.export_name(),
        module,
        component.as_str()
    )
}

/// Run `init`: collect answers, write the project setup and print next steps
pub fn run_init(workspace: &Workspace, args: InitArgs) -> Result<()> {
    cliclack::intro(format!("{} Initialization", PRODUCT_NAME))?;

    let interactive = !args.yes && is_interactive();

    if init::is_initialized(workspace) && !args.yes {
        let overwrite = interactive
            && cliclack::confirm("Configuration already exists. Overwrite?")
                .initial_value(false)
                .interact()?;

        if !overwrite {
            cliclack::outro_cancel("Initialization cancelled.")?;
            return Ok(());
        }
    }

    let answers = collect_init_answers(&args, interactive)?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Setting up {}...", PRODUCT_NAME));

    let report = match init::initialize(workspace, answers) {
        Ok(report) => report,
        Err(e) => {
            spinner.error("Initialization failed.");
            return Err(e).context("Initialization failed");
        }
    };

    spinner.stop(format!("{} initialized successfully!", PRODUCT_NAME));

    print_init_summary(workspace, &report)?;

    Ok(())
}

fn collect_init_answers(args: &InitArgs, interactive: bool) -> Result<InitAnswers> {
    let defaults = InitAnswers::default();

    let components_path = match &args.components_path {
        Some(path) => path.clone(),
        None if interactive => cliclack::input("Where would you like to save your components?")
            .placeholder(DEFAULT_COMPONENTS_PATH)
            .default_input(DEFAULT_COMPONENTS_PATH)
            .interact()?,
        None => defaults.components_path,
    };

    if components_path.trim().is_empty() {
        anyhow::bail!("Initialization cancelled: components path is required.");
    }

    let utils_path = match &args.utils_path {
        Some(path) => path.clone(),
        None if interactive => cliclack::input("Where would you like to save your utilities?")
            .placeholder(DEFAULT_UTILS_PATH)
            .default_input(DEFAULT_UTILS_PATH)
            .interact()?,
        None => defaults.utils_path,
    };

    let language_mode = match args.language_mode {
        Some(mode) => mode,
        None if interactive => {
            let typescript: bool = cliclack::confirm("Are you using TypeScript?")
                .initial_value(true)
                .interact()?;
            LanguageMode::from_typescript_flag(typescript)
        }
        None => defaults.language_mode,
    };

    let style = match args.style {
        Some(style) => style,
        None if interactive => {
            let mut select = cliclack::select("Choose your style preference");
            for style in Style::ALL {
                select = select.item(style, style.display_name(), "");
            }
            select.initial_value(Style::Default).interact()?
        }
        None => defaults.style,
    };

    cliclack::log::info(format!(
        "Components: {}  Utilities: {}  Language: {}  Style: {}",
        components_path,
        utils_path,
        language_mode,
        style.display_name()
    ))?;

    Ok(InitAnswers {
        components_path,
        utils_path,
        language_mode,
        style,
    })
}

fn print_init_summary(workspace: &Workspace, report: &InitReport) -> Result<()> {
    let relative = |path: &std::path::Path| {
        path.strip_prefix(workspace.root())
            .unwrap_or(path)
            .display()
            .to_string()
    };

    cliclack::log::success(format!(
        "Created {} and {}",
        relative(&report.config_path),
        relative(&report.utility_path)
    ))?;

    if report.package_json_updated {
        cliclack::log::info("Added clsx and tailwind-merge to package.json")?;
    }

    let mut steps = Vec::new();
    if report.package_json_updated {
        steps.push("npm install".to_string());
    } else {
        steps.push("npm install clsx tailwind-merge".to_string());
    }
    steps.push(format!(
        "{} add button  (or {} add --all)",
        CLI_COMMAND, CLI_COMMAND
    ));

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
