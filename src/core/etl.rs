use crate::core::Pipeline;
use crate::output::NO_CENTERS_MESSAGE;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub candidates: usize,
    pub ranked: usize,
    pub dropped: Vec<String>,
    pub output_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing survived the filters; no export was written.
    NoCenters { fetched: usize },
    Exported(RunSummary),
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting school ranking...");

        let records = self.pipeline.extract().await?;
        let fetched = records.len();
        tracing::info!("Extracted {} records", fetched);

        let report = self.pipeline.transform(records).await?;
        if !report.has_candidates() {
            tracing::warn!("No records matched the filters");
            println!("{}", NO_CENTERS_MESSAGE);
            return Ok(RunOutcome::NoCenters { fetched });
        }

        let output_path = self.pipeline.load(&report).await?;
        println!("Results exported to '{}'", output_path);

        Ok(RunOutcome::Exported(RunSummary {
            fetched,
            candidates: report.candidates,
            ranked: report.schools.len(),
            dropped: report.dropped,
            output_path,
        }))
    }
}
