use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use scramble_rs::builder::RandomFormulaBuilder;
use scramble_rs::pipeline::{de_morgan_iteration_with, simplify, substitute_arrows, IterationConfig};
use scramble_rs::sat::{count_models, is_equiv, is_sat, is_taut};

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Pipeline {
    Simplify,
    Arrows,
    DeMorgan,
}

/// Build a random formula and rewrite it with one of the pipelines.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of variables.
    #[arg(short, long, default_value_t = 3, value_parser = RangedU64ValueParser::<usize>::new().range(1..=31))]
    variables: usize,

    /// Number of operators in the random formula.
    #[arg(short, long, default_value_t = 6)]
    operators: usize,

    /// Random seed.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Rewrite pipeline to run.
    #[arg(short, long, value_enum, default_value_t = Pipeline::DeMorgan)]
    pipeline: Pipeline,

    /// Rounds of the De Morgan pipeline.
    #[arg(long, default_value_t = 5)]
    rounds: usize,

    /// Per-node expansion probability of the De Morgan pipeline, in [0, 1).
    #[arg(long, default_value_t = 0.5, value_parser = parse_probability)]
    probability: f64,

    /// Print debug logs.
    #[arg(long)]
    debug: bool,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("probability must be in [0, 1), but is {}", p))
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let builder = RandomFormulaBuilder::new(args.variables);
    let f = builder.build(args.operators, &mut rng);
    println!("f = {}", f);
    println!("  sat = {}, taut = {}, models = {}", is_sat(&f), is_taut(&f), count_models(&f));

    let g = match args.pipeline {
        Pipeline::Simplify => simplify(f.clone()),
        Pipeline::Arrows => substitute_arrows(f.clone()),
        Pipeline::DeMorgan => {
            let config = IterationConfig::new(args.rounds, args.probability);
            de_morgan_iteration_with(f.clone(), &config, &mut rng)
        }
    };
    println!("g = {}", g);
    println!("  size {} -> {}, depth {} -> {}", f.size(), g.size(), f.depth(), g.depth());
    println!("  equivalent = {}", is_equiv(&f, &g));

    Ok(())
}
