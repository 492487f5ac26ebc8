use crate::domain::model::{Coordinates, RankedReport, SchoolRecord, Travel};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Open-data endpoint serving the raw school dataset.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// A non-success HTTP status yields `Ok(vec![])`; only transport and
    /// decoding failures are errors.
    async fn fetch_records(&self, limit: usize) -> Result<Vec<SchoolRecord>>;
}

/// Driving distance between two free-form addresses.
#[async_trait]
pub trait DistanceResolver: Send + Sync {
    async fn resolve(&self, origin: &str, destination: &str) -> Result<Travel>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the service knows no location for `address`.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SchoolRecord>>;
    async fn transform(&self, records: Vec<SchoolRecord>) -> Result<RankedReport>;
    async fn load(&self, report: &RankedReport) -> Result<String>;
}
