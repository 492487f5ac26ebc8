use crate::config::RankerConfig;
use crate::core::ranking::RankingEngine;
use crate::core::{DistanceResolver, Pipeline, RankedReport, RecordSource, SchoolRecord, Storage};
use crate::output::{format_report, render_csv, should_use_colors};
use crate::utils::error::Result;

/// Open-data records in, duration-ranked CSV out.
pub struct SchoolPipeline<R: RecordSource, D: DistanceResolver, S: Storage> {
    pub(crate) source: R,
    pub(crate) resolver: D,
    pub(crate) storage: S,
    pub(crate) config: RankerConfig,
}

impl<R: RecordSource, D: DistanceResolver, S: Storage> SchoolPipeline<R, D, S> {
    pub fn new(source: R, resolver: D, storage: S, config: RankerConfig) -> Self {
        Self {
            source,
            resolver,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<R: RecordSource, D: DistanceResolver, S: Storage> Pipeline for SchoolPipeline<R, D, S> {
    async fn extract(&self) -> Result<Vec<SchoolRecord>> {
        tracing::info!(
            "🚀 Fetching up to {} school records",
            self.config.source.limit
        );
        self.source.fetch_records(self.config.source.limit).await
    }

    async fn transform(&self, records: Vec<SchoolRecord>) -> Result<RankedReport> {
        let criteria = self.config.search.criteria();
        let candidates = criteria.apply(&records);
        tracing::info!(
            "🔧 {} of {} records are {}",
            candidates.len(),
            records.len(),
            criteria.describe()
        );

        if candidates.is_empty() {
            return Ok(RankedReport::default());
        }

        let engine = RankingEngine::new(&self.resolver, &self.config.search.origin);
        let report = engine.run(&candidates).await;

        tracing::info!(
            "✅ Ranked {} schools ({} dropped)",
            report.schools.len(),
            report.dropped.len()
        );
        Ok(report)
    }

    async fn load(&self, report: &RankedReport) -> Result<String> {
        let use_colors = self
            .config
            .output
            .colors
            .unwrap_or_else(should_use_colors);

        if !report.is_empty() {
            println!("{}", format_report(report, use_colors));
        }

        let csv = render_csv(&report.schools)?;
        let output_path = self
            .storage
            .write_file(&self.config.output.filename, &csv)
            .await?;

        tracing::info!("💾 Exported {} rows to {}", report.schools.len(), output_path);
        Ok(output_path)
    }
}
