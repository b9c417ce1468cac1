use quarry::config::Config;
use quarry::shell;
use quarry::startup::{build_engine, init_logging, resolve_config_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    let _ = dotenvy::dotenv();

    // Load config (priority: QUARRY_CONFIG env var > ./quarry.toml > defaults)
    let config = Config::load(resolve_config_path().as_deref())?;

    // Initialize logging
    init_logging(&config);

    // Load corpus, analyze, build index
    let (engine, corpus) = build_engine(&config)?;

    // Interactive query loop until EOF or `quit`
    shell::run(&engine, &corpus, &config)?;

    Ok(())
}
