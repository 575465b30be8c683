//! Demo: the three ways a RandomStateSample can be seeded.
//!
//! Set `RANDOM_STATE_SEED` to replace the default seed of 1234 and
//! `RUST_LOG=debug` to see how each random state is resolved.

use std::env::VarError;
use std::process::ExitCode;

use log::error;
use random_state::{RandomState, RandomStateError, RandomStateSample};

/// Seed used when `RANDOM_STATE_SEED` is not set.
const DEFAULT_SEED: i64 = 1234;

/// One line, eight decimals, sign column kept for positives.
fn format_draws(draws: &[f64]) -> String {
    let cells: Vec<String> = draws.iter().map(|v| format!("{:>11.8}", v)).collect();
    format!("[{}]", cells.join(" "))
}

/// Interprets the raw `RANDOM_STATE_SEED` lookup.
fn seed_from_var(var: Result<String, VarError>) -> Result<RandomState, RandomStateError> {
    match var {
        Ok(raw) => raw.parse(),
        Err(VarError::NotPresent) => Ok(RandomState::Seed(DEFAULT_SEED)),
        Err(VarError::NotUnicode(raw)) => Err(RandomStateError::InvalidRandomState(
            raw.to_string_lossy().into_owned(),
        )),
    }
}

fn run() -> Result<(), RandomStateError> {
    let seed = seed_from_var(std::env::var("RANDOM_STATE_SEED"))?;

    let mut m = RandomStateSample::new(seed.clone());
    println!("seed = {} @ init\n {}", seed, format_draws(&m.run(None)?));

    let mut m = RandomStateSample::default();
    println!(
        "seed = {} @ run\n {}",
        seed,
        format_draws(&m.run(Some(&seed))?)
    );

    let mut m = RandomStateSample::default();
    println!("seed = None\n {}", format_draws(&m.run(None)?));

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
