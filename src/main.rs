//! Asset generator CLI
//!
//! Usage:
//!   cargo run                                  # Generate all three sprites in .
//!   cargo run -- generate --out-dir build      # Generate into build/
//!   cargo run -- generate --only ball,platform # Generate a subset
//!   cargo run -- verify                        # Check existing files
//!   cargo run -- list                          # Show the asset table

use arcanoid_assets::{
    AssetKind, GeneratorConfig, Result, completion_message, generate, verify_assets,
};
use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "arcanoid-assets",
    version,
    about = "Generate placeholder BMP sprites for Ultimate Arcanoid"
)]
struct Cli {
    /// TOML config file (CLI flags win over its values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the sprites and write them as BMP files (default)
    Generate(GenerateArgs),
    /// Check that generated files exist and have the right dimensions
    Verify(TargetArgs),
    /// Print the asset table
    List,
}

#[derive(Args, Debug, Default)]
struct TargetArgs {
    /// Output directory (default: current directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Comma-separated subset: platform, ball, background
    #[arg(long, value_delimiter = ',')]
    only: Vec<AssetKind>,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Skip creating the empty images/ directory
    #[arg(long, default_value_t = false)]
    no_images_dir: bool,

    /// Render sprites in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Also write assets.json
    #[arg(long, default_value_t = false)]
    manifest: bool,
}

/// Color codes only when the log stream is an interactive terminal.
fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(ansi_enabled(&std::io::stderr()))
        .with_target(false)
        .init();
}

fn apply_target(config: &mut GeneratorConfig, target: TargetArgs) {
    if let Some(dir) = target.out_dir {
        config.output_dir = dir;
    }
    if !target.only.is_empty() {
        config.assets = target.only;
    }
}

fn apply_generate(config: &mut GeneratorConfig, args: GenerateArgs) {
    apply_target(config, args.target);
    if args.no_images_dir {
        config.create_images_dir = false;
    }
    config.parallel |= args.parallel;
    config.manifest |= args.manifest;
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = GeneratorConfig::load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => {
            apply_generate(&mut config, args);
            let written = generate::run(&config)?;
            println!("{}", completion_message(&written));
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify(target) => {
            apply_target(&mut config, target);
            let reports = verify_assets(&config.output_dir, &config.selected_assets());
            for report in &reports {
                println!("{}: {}", report.path.display(), report.status);
            }
            let failed = reports.iter().filter(|r| !r.is_ok()).count();
            if failed == 0 {
                info!("All {} asset(s) verified", reports.len());
                Ok(ExitCode::SUCCESS)
            } else {
                error!("{} of {} asset(s) failed verification", failed, reports.len());
                Ok(ExitCode::FAILURE)
            }
        }
        Command::List => {
            for kind in config.selected_assets() {
                let (w, h) = kind.dimensions();
                println!(
                    "{:<11} {:<20} {:>4}x{:<4} {}",
                    kind.name(),
                    kind.file_name(),
                    w,
                    h,
                    kind.description()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
