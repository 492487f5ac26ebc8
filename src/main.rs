use clap::Parser;
use school_ranker::utils::{logger, validation::Validate};
use school_ranker::{
    CliConfig, EtlEngine, GoogleMapsClient, LocalStorage, OpenDataClient, RankerError,
    RunOutcome, SchoolPipeline,
};

fn exit_with(e: &RankerError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting school-ranker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.resolve().unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    tracing::info!("📍 Origin: {}", config.search.origin);
    tracing::info!("🔎 Looking for {}", config.search.criteria().describe());
    tracing::info!("📁 Export target: {}", config.export_path());

    let source = OpenDataClient::new(&config.source).unwrap_or_else(|e| exit_with(&e));
    let resolver = config
        .api_key()
        .and_then(|key| GoogleMapsClient::new(&config.resolver, key))
        .unwrap_or_else(|e| exit_with(&e));
    let storage = LocalStorage::new(config.output.path.clone());

    let pipeline = SchoolPipeline::new(source, resolver, storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(RunOutcome::NoCenters { fetched }) => {
            tracing::info!("Finished: none of the {} fetched records matched", fetched);
        }
        Ok(RunOutcome::Exported(summary)) => {
            tracing::info!(
                "✅ Ranked {} of {} candidate schools ({} fetched)",
                summary.ranked,
                summary.candidates,
                summary.fetched
            );
            if !summary.dropped.is_empty() {
                tracing::warn!(
                    "⚠️ {} destinations could not be resolved",
                    summary.dropped.len()
                );
            }
            tracing::info!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
