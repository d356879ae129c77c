// Command line driver: generates trees and reports on them.

use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use treecheck::config::{Config, Shape};
use treecheck::paths;

#[derive(Parser)]
#[command(name = "treecheck")]
#[command(about = "Generate binary trees and check their properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a tree and report which properties it has
    Validate {
        #[command(flatten)]
        tree: TreeArgs,

        /// Smallest value a search tree may hold (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        value_low: Option<i32>,

        /// Largest value a search tree may hold (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        value_high: Option<i32>,

        /// The height must be strictly greater than this
        #[arg(long, allow_negative_numbers = true)]
        height_low: Option<isize>,

        /// The height must be strictly less than this
        #[arg(long, allow_negative_numbers = true)]
        height_high: Option<isize>,
    },

    /// Generate a tree and print its root-to-leaf paths with a given number of edges
    Paths {
        #[command(flatten)]
        tree: TreeArgs,

        /// Fewest edges a printed path may have
        #[arg(long, default_value_t = 0)]
        min_len: usize,

        /// Most edges a printed path may have
        #[arg(long, default_value_t = usize::MAX)]
        max_len: usize,
    },
}

/// Where the configuration comes from and how to override its generator.
#[derive(Args)]
struct TreeArgs {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of nodes to generate
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Seed for reproducible trees
    #[arg(short, long)]
    seed: Option<u64>,

    /// Shape of the generated tree
    #[arg(long, value_enum)]
    shape: Option<Shape>,
}

impl TreeArgs {
    /// Loads the config file, if any, and applies the command line on top.
    fn config(&self) -> treecheck::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(size) = self.size {
            config.generator.size = size;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(shape) = self.shape {
            config.generator.shape = shape;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(": ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
            tracing::error!(error = %message, "treecheck failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> treecheck::Result<()> {
    match command {
        Command::Validate {
            tree,
            value_low,
            value_high,
            height_low,
            height_high,
        } => {
            let mut config = tree.config()?;
            let bounds = &mut config.bounds;
            bounds.value_low = value_low.unwrap_or(bounds.value_low);
            bounds.value_high = value_high.unwrap_or(bounds.value_high);
            bounds.height_low = height_low.unwrap_or(bounds.height_low);
            bounds.height_high = height_high.unwrap_or(bounds.height_high);

            let generated = config.generator.build()?;
            tracing::info!(nodes = generated.len(), bounds = ?config.bounds, "validating tree");

            println!("{}", config.validator().inspect(&generated));
        }
        Command::Paths {
            tree,
            min_len,
            max_len,
        } => {
            let config = tree.config()?;
            let generated = config.generator.build()?;

            let found = paths::with_length_between(&generated, min_len, max_len);
            tracing::info!(found = found.len(), min_len, max_len, "searched root-to-leaf paths");

            for path in &found {
                let values = path.iter().map(|v| v.to_string()).collect::<Vec<_>>();
                println!("{}", values.join(" -> "));
            }
        }
    }

    Ok(())
}
