//! Command-line interface for the cookbook toolchain
//!
//! Validates recipe sources and, when an output directory is given,
//! renders them into a book through the selected backend.

use anyhow::{Context, Result};
use clap::Parser;
use cookbook_loader::{LoadError, SourceLoader};
use cookbook_render::{RenderContext, RendererRegistry};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;

use config::CookbookConfig;

#[derive(Parser, Debug)]
#[command(name = "cookbook")]
#[command(version, about = "Validate recipe sources and render them into a book")]
struct Args {
    /// Output directory for rendered artifacts; omit to only validate
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Renderer backend, overriding the book manifest selection
    #[arg(short, long, value_name = "NAME")]
    renderer: Option<String>,

    /// Print the full cause chain on failure
    #[arg(short, long)]
    verbose: bool,

    /// Recipe files or directories to process
    #[arg(value_name = "INPUTS")]
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    // quick exit if there are no inputs
    if args.inputs.is_empty() {
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, args.verbose);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = CookbookConfig::load().context("failed to load configuration")?;
    let loader = SourceLoader::with_options(config.load_options());
    let mut library = loader.load(&args.inputs)?;

    let Some(output) = &args.output else {
        log::info!("validated {} recipe(s)", library.recipes.len());
        return Ok(());
    };

    let mut book = library
        .book
        .take()
        .context("no book manifest found among the inputs")?;
    if let Some(renderer) = &args.renderer {
        book.renderer = renderer.clone();
    }

    let registry = RendererRegistry::with_builtins();
    let renderer = registry.get(&book.renderer)?;
    log::info!("rendering with '{}'", renderer.name());
    renderer.render(&RenderContext {
        book: &book,
        recipes: &library.recipes,
        groups: &library.groups,
        output,
    })?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Print the failure. Source-located errors keep the original one-line
/// format; the cause chain is walked only in verbose mode.
fn report(err: &anyhow::Error, verbose: bool) {
    if err.downcast_ref::<LoadError>().is_some() {
        eprintln!("[!]: {}", err);
    } else {
        eprintln!("Error: {}", err);
    }
    if verbose {
        for cause in err.chain().skip(1) {
            eprintln!("caused by: {}", cause);
        }
    }
}
