//! ipf - Inverse pole figure colors for crystal directions

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ipf_core::{LaueClass, TrigonalMode};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "ipf")]
#[command(author, version, about = "Inverse pole figure colors for crystal directions")]
#[command(long_about = "
Colors crystal directions by their position in the fundamental sector of a
Laue class, so that symmetry-equivalent directions get the same color.

Classes may be given by name or Hermann-Mauguin symbol:
  triclinic (-1), monoclinic (2/m), orthorhombic (mmm),
  tetragonal-low (4/m), tetragonal-high (4/mmm),
  trigonal-low (-3), trigonal-high (-3m),
  hexagonal-low (6/m), hexagonal-high (6/mmm),
  cubic-low (m-3), cubic-high (m-3m)

Examples:
  ipf color m-3m 0 0 1                  # One direction
  ipf color 6/mmm 1 1 1 -f hex          # As #rrggbb
  ipf color -3 --input dirs.txt -m unambiguous
  cat dirs.txt | ipf color cubic-low -i - -f u8
  ipf reduce 4/mmm -0.3 0.8 -0.5        # Show the folded direction
  ipf classes                           # List all classes
  ipf patch hexagonal-high              # Show patch geometry
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Color directions for a Laue class
    #[command(visible_alias = "c")]
    Color(ColorArgs),

    /// Fold a direction into the fundamental sector
    #[command(visible_alias = "r")]
    Reduce(ReduceArgs),

    /// List the Laue classes
    Classes,

    /// Show the color patch of a Laue class
    Patch(PatchArgs),
}

/// Output encoding for colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Three floats in [0, 1]
    Float,
    /// Three integers in [0, 255]
    U8,
    /// #rrggbb
    Hex,
}

#[derive(Args)]
struct ColorArgs {
    /// Laue class name or symbol (e.g. cubic-high, m-3m)
    #[arg(allow_hyphen_values = true)]
    class: LaueClass,

    /// Direction components (normalized before coloring)
    #[arg(num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    direction: Vec<f64>,

    /// Read directions from a file, one "x y z" per line ("-" for stdin)
    #[arg(short, long, conflicts_with = "direction")]
    input: Option<PathBuf>,

    /// Coloring of the -3 class: jump-free, unambiguous
    #[arg(short, long, default_value = "jump-free")]
    mode: TrigonalMode,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Float)]
    format: OutputFormat,
}

#[derive(Args)]
struct ReduceArgs {
    /// Laue class name or symbol
    #[arg(allow_hyphen_values = true)]
    class: LaueClass,

    /// Direction components (normalized before folding)
    #[arg(num_args = 3, required = true, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    direction: Vec<f64>,
}

#[derive(Args)]
struct PatchArgs {
    /// Laue class name or symbol
    #[arg(allow_hyphen_values = true)]
    class: LaueClass,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Color(args) => commands::color::run(args, cli.verbose),
        Commands::Reduce(args) => commands::reduce::run(args, cli.verbose),
        Commands::Classes => commands::classes::run(cli.verbose),
        Commands::Patch(args) => commands::patch::run(args, cli.verbose),
    }
}
