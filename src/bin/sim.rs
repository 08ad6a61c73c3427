use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fleetsim::export::{write_records, Format};
use fleetsim::{
    generate_records, init_logging, run_evaluation, FleetConfig, GridConfig, SimConfig,
    StrategyKind, DEFAULT_FLEET, DEFAULT_HEIGHT, DEFAULT_OVERLAY_PROBABILITY, DEFAULT_WIDTH,
    MAX_PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Ship lengths, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FLEET)]
    ships: Vec<usize>,
    /// Let ships of one fleet share cells
    #[arg(long)]
    allow_overlap: bool,
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
    max_attempts: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl BoardArgs {
    fn grid(&self) -> anyhow::Result<GridConfig> {
        Ok(GridConfig::new(self.width, self.height)?)
    }

    fn fleet(&self) -> FleetConfig {
        FleetConfig::new(self.ships.clone())
            .with_overlap(self.allow_overlap)
            .with_max_attempts(self.max_attempts)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use rand::Rng;
            rand::rng().random()
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Measure how many shots a strategy needs to sink a fleet.
    Evaluate {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, value_enum, default_value_t = StrategyKind::RandomSeek)]
        strategy: StrategyKind,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 1)]
        players: usize,
        #[arg(long, default_value_t = 4)]
        workers: usize,
        /// Print the full report as JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },
    /// Generate training records for a predictive model.
    Generate {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Probability that a cell is revealed in the observed overlay
        #[arg(long, default_value_t = DEFAULT_OVERLAY_PROBABILITY)]
        overlay: f64,
        #[arg(long, value_enum, default_value_t = Format::Jsonl)]
        format: Format,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            board,
            strategy,
            games,
            players,
            workers,
            json,
        } => {
            let config = SimConfig {
                grid: board.grid()?,
                fleet: board.fleet(),
                strategy,
                games,
                players_per_game: players,
                seed: board.seed(),
                workers,
            };
            log::info!("seed {}", config.seed);
            let report = run_evaluation(config).await?;
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else if let Some(s) = report.summary {
                println!(
                    "{:?}: average game length {:.2} +- {:.2} (min {}, max {}, {} players, {} anomalies)",
                    report.strategy, s.mean, s.std_dev, s.min, s.max, s.count, report.anomalies
                );
            }
        }
        Commands::Generate {
            board,
            count,
            overlay,
            format,
            out,
        } => {
            anyhow::ensure!(
                (0.0..=1.0).contains(&overlay),
                "overlay probability must be within [0, 1]"
            );
            let mut rng = SmallRng::seed_from_u64(board.seed());
            let records = generate_records(board.grid()?, &board.fleet(), count, overlay, &mut rng)?;
            log::info!("generated {} records", records.len());
            let writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("cannot create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            write_records(writer, &records, format)?;
        }
    }
    Ok(())
}
