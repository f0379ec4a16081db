use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use poincare::config::ViewOverrides;
use poincare::data::{load_table, LoadError};
use poincare::embedding::{delay_embed, EmbedError};
use poincare::export::{export_scene, ExportError};
use poincare::prompt::{InputKind, Prompter};
use poincare::scene::Scene;
use poincare::section::{compute_with, SectionConfig, SectionError};
use poincare::util::Timed;

/// Poincaré sections of delay-embedded attractors
#[derive(Parser, Debug)]
#[command(name = "poincare", version, about)]
struct Cli {
    /// Text file with x, y, z columns (or a signal column with --delay)
    input: Option<PathBuf>,

    /// Run without prompts; values not given below take their defaults
    #[arg(long)]
    headless: bool,

    /// Plane slope in y = a x + b (skips the plane prompt)
    #[arg(short, allow_hyphen_values = true)]
    a: Option<f64>,

    /// Plane intercept in y = a x + b (skips the plane prompt)
    #[arg(short, allow_hyphen_values = true)]
    b: Option<f64>,

    /// x axis label (skips its prompt)
    #[arg(long)]
    x_label: Option<String>,

    /// y axis label (skips its prompt)
    #[arg(long)]
    y_label: Option<String>,

    /// z axis label (skips its prompt)
    #[arg(long)]
    z_label: Option<String>,

    /// Delay-embed one column with this delay instead of reading three columns
    #[arg(long, value_name = "TAU")]
    delay: Option<usize>,

    /// Signal column used with --delay
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Export the scene to a file (.json or .json.gz)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Sample count above which the scan runs in parallel
    #[arg(long, value_name = "N")]
    parallel_threshold: Option<usize>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no input file given")]
    MissingInput,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = ViewOverrides::from_flags(
        cli.x_label.clone(),
        cli.y_label.clone(),
        cli.z_label.clone(),
        cli.a,
        cli.b,
    )?;
    let kind = match cli.delay {
        Some(_) => InputKind::Signal { column: cli.column },
        None => InputKind::Trajectory,
    };

    let stdin = io::stdin();
    let mut prompter = (!cli.headless).then(|| Prompter::new(stdin.lock(), io::stdout()));

    let path = match (cli.input.clone(), prompter.as_mut()) {
        (Some(path), _) => path,
        (None, Some(prompter)) => prompter.ask_path(kind)?.ok_or(CliError::MissingInput)?,
        (None, None) => return Err(CliError::MissingInput),
    };

    // Unusable data ends the session before the view questions.
    let table = load_table(&path)?;
    let embedded;
    let trajectory = match cli.delay {
        Some(tau) => {
            embedded = delay_embed(table.column(cli.column)?, tau)?;
            embedded.trajectory()?
        }
        None => table.trajectory()?,
    };

    let view = match prompter.as_mut() {
        Some(prompter) => prompter.ask_view(&overrides)?,
        None => overrides.resolve(),
    };
    log::info!(
        "trajectory: {} samples, plane {}",
        trajectory.len(),
        view.plane
    );

    let config = match cli.parallel_threshold {
        Some(parallel_threshold) => SectionConfig { parallel_threshold },
        None => SectionConfig::default(),
    };

    let output = {
        let _t = Timed::info("Section scan");
        compute_with(&trajectory, view.plane, config)?
    };

    println!();
    println!("Crossings through section: {}", output.crossings.len());
    if !output.diagnostics.is_clean() {
        println!(
            "Samples lying exactly on the plane (not counted): {}",
            output.diagnostics.on_plane_samples.len()
        );
    }

    let scene = Scene::build(&trajectory, &output, &view);
    if let Some(export_path) = cli.export {
        export_scene(&scene, &export_path)?;
        println!("Scene written to {}", export_path.display());
    }

    Ok(())
}
