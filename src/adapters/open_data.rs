use crate::config::SourceConfig;
use crate::domain::model::SchoolRecord;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// CKAN `datastore_search` client for the regional school dataset.
pub struct OpenDataClient {
    client: Client,
    endpoint: String,
    resource_id: String,
}

impl OpenDataClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            resource_id: config.resource_id.clone(),
        })
    }

    fn decode_records(body: &serde_json::Value) -> Vec<SchoolRecord> {
        let Some(items) = body
            .pointer("/result/records")
            .and_then(serde_json::Value::as_array)
        else {
            tracing::warn!("Response has no result.records list, treating as empty");
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                serde_json::from_value::<SchoolRecord>(item.clone())
                    .map_err(|e| tracing::warn!("Skipping record #{}: {}", index, e))
                    .ok()
            })
            .collect()
    }
}

#[async_trait]
impl RecordSource for OpenDataClient {
    async fn fetch_records(&self, limit: usize) -> Result<Vec<SchoolRecord>> {
        tracing::debug!(
            "Making API request to: {} (resource_id={}, limit={})",
            self.endpoint,
            self.resource_id,
            limit
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("resource_id", self.resource_id.clone()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            tracing::error!("❌ Error fetching school records: HTTP {}", response.status());
            return Ok(Vec::new());
        }

        let body: serde_json::Value = response.json().await?;
        let records = Self::decode_records(&body);
        tracing::info!("📊 Received {} school records", records.len());
        Ok(records)
    }
}
