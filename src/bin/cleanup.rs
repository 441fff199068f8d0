use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};

use mentozy_maintenance::config::ServiceConfig;
use mentozy_maintenance::db::RestClient;
use mentozy_maintenance::util::envfile::write_env_template;
use mentozy_maintenance::workflow;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Utility subcommand: generate an env template
    if args.get(1).map(String::as_str) == Some("env-template") {
        let path = args
            .get(2)
            .cloned()
            .unwrap_or_else(|| ".env.template".to_string());
        write_env_template(&path)?;
        println!("Wrote {}. Copy to .env.local and edit values as needed.", path);
        return Ok(());
    }

    let env_path = args.get(1).cloned().unwrap_or_else(|| ".env.local".to_string());
    let cfg = ServiceConfig::from_env_file(&env_path)
        .with_context(|| format!("loading credentials from {env_path}"))?;
    let client = RestClient::new(&cfg)?;

    info!("Scrubbing placeholder rows at {}", cfg.url);
    workflow::cleanup::run(&client).await;
    info!("Cleanup complete.");
    Ok(())
}
