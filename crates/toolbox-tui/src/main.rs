//! toolbox-tui - Interactive toolbox with a tool generator

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use toolbox_core::{
    Config, GenerationReport, Scaffolder, SessionContext, ToolName, ToolSpec, ToolType,
};

#[derive(Parser, Debug)]
#[command(name = "toolbox-tui")]
#[command(about = "Interactive toolbox with a tool generator for scaffolding new tools")]
#[command(version)]
pub struct Args {
    /// Configuration file (defaults to configs/toolbox.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory tools are generated under (overrides config and TOOLBOX_OUTPUT_DIR)
    #[arg(short, long = "output-dir", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Write diagnostics to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive toolbox (default)
    Tui,
    /// Generate a tool without the interactive wizard
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Tool type: cli, tui or web
    #[arg(short = 't', long = "type")]
    pub tool_type: ToolType,

    /// Tool name (lowercase letters, numbers and hyphens)
    #[arg(short, long)]
    pub name: String,

    /// One-line description of the tool
    #[arg(short, long)]
    pub description: String,
}

/// Layer configuration: file, then `TOOLBOX_*` variables from `env`, then flags
fn load_config<F>(args: &Args, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::load(args.config.as_deref())?;
    config.apply_env(env);

    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(file) = &args.log_file {
        config.log_file = Some(file.clone());
    }

    config.validate()?;
    Ok(config)
}

fn generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let name = ToolName::parse(&args.name)?;
    let spec = ToolSpec::new(args.tool_type, name, &args.description)?;

    let report = Scaffolder::new(config.output_dir.clone()).generate(&spec)?;

    println!(
        "{} {} tool: {}",
        "Generated".green().bold(),
        spec.tool_type(),
        spec.name()
    );
    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    println!();
    println!("  {}", "Files created".cyan());
    for path in &report.created {
        println!("  {} {}", "->".blue(), path.display());
    }
    print_next_steps(report);
}

fn print_next_steps(report: &GenerationReport) {
    println!();
    println!("  {}", "Next steps".cyan());
    for step in report.next_steps() {
        println!("    {}", step.dimmed());
    }
    println!();
}

fn print_session_summary(reports: &[GenerationReport]) {
    if reports.is_empty() {
        return;
    }

    println!();
    println!(
        "{} {} tool(s) generated",
        "✓".green().bold(),
        reports.len()
    );
    for report in reports {
        println!();
        println!("  {}", report.destination.display().to_string().bold());
        for path in &report.created {
            println!("    {} {}", "->".blue(), path.display());
        }
        print_next_steps(report);
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stdout().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stdout().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = load_config(&args, |key| std::env::var(key).ok())?;
    toolbox_core::logging::init(&config)?;

    match args.command {
        Some(Command::Generate(generate_args)) => generate(&config, generate_args),
        Some(Command::Tui) | None => {
            let context = SessionContext::new(config);
            let result = toolbox_core::run(context);

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stdout().show_cursor();

            let reports = result?;
            tracing::info!(generated = reports.len(), "session ended");
            print_session_summary(&reports);
            Ok(())
        }
    }
}
