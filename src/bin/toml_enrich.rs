use anyhow::Context;
use clap::Parser;
use halal_city_etl::config::toml_config::TomlConfig;
use halal_city_etl::core::{ConfigProvider, Pipeline};
use halal_city_etl::utils::error::ErrorSeverity;
use halal_city_etl::utils::{logger, validation::Validate};
use halal_city_etl::{EnrichmentPipeline, EtlEngine, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-enrich")]
#[command(about = "City enrichment driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "enrich-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override worker count from config
    #[arg(long)]
    workers: Option<usize>,

    /// Enrich in memory and report, without writing any output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if config.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based city enrichment");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 命令列覆蓋
    if let Some(workers) = args.workers {
        config.transform.workers = Some(workers);
        tracing::info!("🔧 Workers overridden to: {}", workers);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = EnrichmentPipeline::from_config(LocalStorage::current_dir(), config)
        .await
        .context("Failed to load reference data")?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return perform_dry_run(&pipeline).await;
    }

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✅ Enrichment completed successfully!");
            println!(
                "✅ Enriched {} cities ({} errors)",
                summary.stats.total_enriched, summary.stats.total_errors
            );
            println!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Enrichment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {}", config.input_path());
    println!("  Source label: {}", config.source_label());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!("  Workers: {}", config.workers());

    if let Some(max_records) = config.max_records() {
        println!("  Max Records: {}", max_records);
    }
    if !config.reference_overrides().is_empty() {
        println!(
            "  Reference overrides: {}",
            config.reference_overrides().join(", ")
        );
    }
    if let Some(bundle) = config.bundle_filename() {
        println!("  Bundle: {} (ZIP)", bundle);
    }
    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(pipeline: &EnrichmentPipeline<LocalStorage, TomlConfig>) -> anyhow::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!("  Reference countries: {}", pipeline.reference().len());

    let records = pipeline.extract().await.context("Failed to read input dataset")?;
    println!("  Records to process: {}", records.len());

    let result = pipeline.transform(records).await?;
    println!("  Would enrich: {}", result.stats.total_enriched);
    println!("  Would reject: {}", result.stats.total_errors);

    if !result.stats.by_region.is_empty() {
        println!();
        println!("🌍 By region:");
        for (region, count) in &result.stats.by_region {
            println!("  {}: {}", region, count);
        }
    }

    if let Some(top) = result.cities.first() {
        println!();
        println!(
            "🏆 Top city: {} ({}) halal {} / overall {}",
            top.name, top.country, top.scores.halal, top.scores.overall
        );
    }

    for error in result.errors.iter().take(5) {
        println!("  ⚠️ {}: {}", error.city, error.error);
    }

    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}
