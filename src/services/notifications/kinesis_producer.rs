//! Kinesis notification producer implementation.
//!
//! Puts each notification as a single record on an AWS Kinesis stream, using
//! the notification id as partition key.

use super::error::{ProducerError, ProducerResult};
use super::normalizer::Normalizer;
use super::producer::NotificationProducer;
use crate::config::KinesisSettings;
use crate::models::Notification;
use anyhow::Context;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_kinesis::Client;
use aws_sdk_kinesis::config::Region;
use aws_sdk_kinesis::primitives::Blob;

const PRODUCER_NAME: &str = "kinesis";

/// Kinesis notification producer
///
/// Records with different ids may land on different shards, so no ordering
/// holds across notifications.
///
/// # Example
/// ```ignore
/// let settings = KinesisSettings {
///     region: "us-east-1".to_string(),
///     stream: "notifications".to_string(),
///     endpoint_url: None,
/// };
/// let producer = KinesisProducer::connect(&settings, Normalizer::default()).await?;
/// producer.send(Notification::system_announcement("Title", "Body")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct KinesisProducer {
    client: Client,
    stream_name: String,
    normalizer: Normalizer,
}

impl KinesisProducer {
    /// Resolves the AWS configuration and creates the stream client
    ///
    /// Credentials come from the usual AWS sources (environment, profile,
    /// instance metadata, ...).
    ///
    /// # Errors
    /// `ProducerError::Connection` if no credentials can be resolved
    pub async fn connect(
        settings: &KinesisSettings,
        normalizer: Normalizer,
    ) -> ProducerResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));
        if let Some(endpoint) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        let credentials = sdk_config
            .credentials_provider()
            .context("no AWS credentials provider configured")
            .map_err(|e| ProducerError::connection(PRODUCER_NAME, e))?;
        credentials
            .provide_credentials()
            .await
            .context("failed to create AWS session")
            .map_err(|e| ProducerError::connection(PRODUCER_NAME, e))?;

        tracing::info!(
            region = %settings.region,
            stream = %settings.stream,
            "Kinesis producer connected"
        );

        Ok(Self::from_client(
            Client::new(&sdk_config),
            settings.stream.clone(),
            normalizer,
        ))
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client, stream_name: String, normalizer: Normalizer) -> Self {
        Self {
            client,
            stream_name,
            normalizer,
        }
    }

    /// Target stream
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}

#[async_trait]
impl NotificationProducer for KinesisProducer {
    /// Puts the notification on the stream, keyed by its id
    async fn send(&self, notification: Notification) -> ProducerResult<()> {
        let (notification, payload) = self.normalizer.encode(PRODUCER_NAME, notification)?;

        let output = self
            .client
            .put_record()
            .stream_name(&self.stream_name)
            .partition_key(&notification.id)
            .data(Blob::new(payload))
            .send()
            .await
            .map_err(|e| e.into_service_error())
            .context("failed to put record to Kinesis")
            .map_err(|e| ProducerError::transport(PRODUCER_NAME, e))?;

        tracing::debug!(
            id = %notification.id,
            stream = %self.stream_name,
            ?output,
            "Notification put to Kinesis"
        );

        Ok(())
    }

    /// The SDK client pools its own connections; nothing to release
    async fn close(&self) -> ProducerResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        PRODUCER_NAME
    }
}
