use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sample_pdfs::generate::{self, GeneratorConfig, Selection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Generates the recipe and poem sample PDFs.
///
/// Without arguments both kinds are written to `recipes/` and `poems/` in the
/// working directory.
#[derive(Parser)]
#[command(author, version, about = "Generate sample PDF fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory that receives the `recipes/` and `poems/` folders.
    #[arg(long, short = 'o', default_value = ".", global = true)]
    output_dir: PathBuf,

    /// Seed for the variant picks; omit for a fresh random run.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Generate both recipes and poems.
    #[command(name = "all")]
    All,

    /// Generate recipe PDFs only.
    #[command(name = "recipes", aliases = ["recipe"])]
    Recipes,

    /// Generate poem PDFs only.
    #[command(name = "poems", aliases = ["poem"])]
    Poems,
}

impl From<Commands> for Selection {
    fn from(command: Commands) -> Self {
        match command {
            Commands::All => Selection::All,
            Commands::Recipes => Selection::Recipes,
            Commands::Poems => Selection::Poems,
        }
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "sample_pdfs=debug,info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let selection = cli.command.map(Selection::from).unwrap_or_default();
    let config = GeneratorConfig::new()
        .with_output_root(cli.output_dir)
        .with_selection(selection);

    let summary = match cli.seed {
        Some(seed) => generate::run(&config, &mut StdRng::seed_from_u64(seed))?,
        None => generate::run(&config, &mut rand::thread_rng())?,
    };
    log::debug!("Wrote {} documents in total", summary.total());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
