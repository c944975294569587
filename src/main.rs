use std::path::PathBuf;
use std::process;

use clap::Parser;
use genword::{
    config::{self, RunConfig},
    evolution::{EvolutionLauncherBuilder, EvolutionResult, LogLevel, StandardLauncher},
    rng::RandomNumberGenerator,
    target::Dictionary,
};
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Evolves random words until one matches the mystery word", long_about = None)]
struct Cli {
    /// JSON file with run parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file mapping word lengths to mystery words
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    #[arg(long)]
    word_length: Option<usize>,

    #[arg(long)]
    population_size: Option<usize>,

    #[arg(long)]
    threshold: Option<usize>,

    #[arg(long)]
    max_generations: Option<usize>,

    #[arg(long)]
    time_budget_secs: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Log every generation and every scored candidate
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> genword::Result<RunConfig> {
        let mut run = match &self.config {
            Some(path) => RunConfig::load_from_file(path)?,
            None => RunConfig::default(),
        };
        if let Some(value) = self.word_length {
            run.word_length = value;
        }
        if let Some(value) = self.population_size {
            run.population_size = value;
        }
        if let Some(value) = self.threshold {
            run.selection_threshold = value;
        }
        if let Some(value) = self.max_generations {
            run.max_generations = value;
        }
        if self.time_budget_secs.is_some() {
            run.time_budget_secs = self.time_budget_secs;
        }
        if self.seed.is_some() {
            run.seed = self.seed;
        }
        if self.verbose {
            run.log_level = LogLevel::Verbose;
        }
        Ok(run)
    }

    fn max_level(&self) -> Level {
        if self.verbose {
            Level::TRACE
        } else {
            Level::INFO
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.max_level())
        .init();

    let run = cli.run_config().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let options = run.to_options().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let dictionary = match &cli.dictionary {
        Some(path) => {
            info!("Loading dictionary: {}", path.display());
            config::load_dictionary(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => Dictionary::new(),
    };

    let mut rng = match run.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let launcher: StandardLauncher = EvolutionLauncherBuilder::new()
        .with_dictionary(dictionary)
        .build();

    match launcher.evolve(&options, &mut rng) {
        Ok(EvolutionResult::Solved {
            solution,
            generation,
        }) => {
            println!("Found '{}' at generation {}", solution, generation);
        }
        Ok(EvolutionResult::Exhausted {
            best,
            generations,
            reason,
        }) => {
            println!(
                "No solution within budget ({:?}) after {} generations; best '{}' scored {}/{}",
                reason,
                generations,
                best,
                best.score(),
                best.len()
            );
            process::exit(2);
        }
        Err(e) => {
            error!("Search failed: {}", e);
            process::exit(1);
        }
    }
}
