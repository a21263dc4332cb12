use chrono::Utc;
use question_selector::config::Config;
use question_selector::error::SelectionError;
use question_selector::logging::{init_tracing, LogConfig};
use question_selector::selection::{run_selection, SelectionRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&LogConfig::from(&config));

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "Selection failed");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), SelectionError> {
    config.weights.validate()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.request_path.clone());
    tracing::info!(%path, seed = ?config.seed, "Loading selection request");
    let request = SelectionRequest::load(&path)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let response = run_selection(&request, &config.weights, Utc::now(), &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
