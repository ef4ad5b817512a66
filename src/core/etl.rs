use crate::core::Pipeline;
use crate::domain::model::BatchStats;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    pub stats: BatchStats,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let mut monitor = RunMonitor::new(self.monitor_enabled);
        tracing::info!("🚀 Starting city enrichment run");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} raw city records", records.len());
        monitor.finish_phase("extract");

        // Transform
        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "🧮 Enriched {} cities ({} errors)",
            result.stats.total_enriched,
            result.stats.total_errors
        );
        for (region, count) in &result.stats.by_region {
            tracing::debug!("  {}: {}", region, count);
        }
        monitor.finish_phase("transform");

        // Load
        let stats = result.stats.clone();
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Artifact saved to: {}", output_path);
        monitor.finish_phase("load");

        monitor.log_final_stats();

        Ok(RunSummary { output_path, stats })
    }
}
