use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::json;

use crate::error::IndexError;
use crate::model::RecipeRecord;

/// Search sink collaborator. The contract is small: clear prior state once
/// before a run, then accept records in emission order, each record being
/// idempotent to re-submit.
#[async_trait]
pub trait RecipeSink: Send + Sync {
    /// Clears whatever a previous run left behind
    async fn prepare(&self) -> Result<(), IndexError>;

    /// Persists one record
    async fn submit(&self, record: &RecipeRecord) -> Result<(), IndexError>;
}

/// MeiliSearch implementation of [`RecipeSink`] over its REST API
pub struct MeiliSink {
    client: Client,
    base_url: String,
    index_uid: String,
}

impl MeiliSink {
    /// Connects to a MeiliSearch instance and gets or creates the index.
    ///
    /// # Errors
    /// Returns [`IndexError::SinkUnavailable`] when no instance answers the
    /// health check on `base_url` - this is fatal and not retried.
    pub async fn connect(base_url: &str, index_uid: &str) -> Result<Self, IndexError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::new();

        let health = client.get(format!("{base_url}/health")).send().await;
        match health {
            Ok(response) if response.status().is_success() => {}
            _ => return Err(IndexError::SinkUnavailable(base_url)),
        }

        let sink = MeiliSink {
            client,
            base_url,
            index_uid: index_uid.to_string(),
        };
        sink.ensure_index().await?;
        Ok(sink)
    }

    async fn ensure_index(&self) -> Result<(), IndexError> {
        let url = format!("{}/indexes/{}", self.base_url, self.index_uid);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            debug!("index {} already exists", self.index_uid);
            return Ok(());
        }

        debug!("creating index {}", self.index_uid);
        let response = self
            .client
            .post(format!("{}/indexes", self.base_url))
            .json(&json!({
                "uid": self.index_uid,
                "primaryKey": "recipe_id",
            }))
            .send()
            .await?;

        Self::check(response).await.map(|_| ())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, IndexError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(IndexError::SinkRejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RecipeSink for MeiliSink {
    async fn prepare(&self) -> Result<(), IndexError> {
        let url = format!(
            "{}/indexes/{}/documents",
            self.base_url, self.index_uid
        );
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await.map(|_| ())
    }

    async fn submit(&self, record: &RecipeRecord) -> Result<(), IndexError> {
        let url = format!(
            "{}/indexes/{}/documents",
            self.base_url, self.index_uid
        );
        // MeiliSearch upserts on the primary key, so re-submission is
        // idempotent per record
        let response = self.client.post(&url).json(&[record]).send().await?;
        Self::check(response).await.map(|_| ())
    }
}
