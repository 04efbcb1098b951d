//! Kafka notification producer implementation.
//!
//! Publishes notifications to a single topic through an `rdkafka`
//! `FutureProducer` and waits for the broker acknowledgement of every message.

use super::error::{ProducerError, ProducerResult};
use super::normalizer::Normalizer;
use super::producer::NotificationProducer;
use crate::config::KafkaSettings;
use crate::models::Notification;
use anyhow::Context;
use async_trait::async_trait;
use rdkafka::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use std::time::Duration;

const PRODUCER_NAME: &str = "kafka";

/// Kafka notification producer
///
/// Messages carry no key, so the partitioner spreads them across the topic.
///
/// # Example
/// ```ignore
/// let settings = KafkaSettings {
///     brokers: vec!["localhost:9092".to_string()],
///     topic: "notifications".to_string(),
///     ..Default::default()
/// };
/// let producer = KafkaProducer::connect(&settings, Normalizer::default()).await?;
/// producer.send(Notification::system_announcement("Title", "Body")).await?;
/// producer.close().await?;
/// ```
pub struct KafkaProducer {
    producer: FutureProducer,
    topic: String,
    normalizer: Normalizer,
    flush_timeout: Duration,
}

impl KafkaProducer {
    /// Creates the producer and verifies that the brokers are reachable
    ///
    /// Broker contact is checked by fetching the topic metadata within
    /// `connect_timeout_ms`.
    ///
    /// # Errors
    /// `ProducerError::Connection` if the client cannot be created or the
    /// brokers do not answer in time
    pub async fn connect(settings: &KafkaSettings, normalizer: Normalizer) -> ProducerResult<Self> {
        if settings.brokers.is_empty() {
            return Err(ProducerError::connection(
                PRODUCER_NAME,
                anyhow::anyhow!("at least one broker address is required"),
            ));
        }

        let producer: FutureProducer = Self::client_config(settings)
            .create()
            .context("failed to create Kafka producer")
            .map_err(|e| ProducerError::connection(PRODUCER_NAME, e))?;

        let probe = producer.clone();
        let topic = settings.topic.clone();
        let timeout = Duration::from_millis(settings.connect_timeout_ms);
        tokio::task::spawn_blocking(move || {
            probe
                .client()
                .fetch_metadata(Some(topic.as_str()), Timeout::After(timeout))
                .map(|_| ())
        })
        .await
        .context("broker probe task failed")
        .and_then(|result| {
            result.with_context(|| {
                format!("failed to reach brokers {}", settings.brokers.join(","))
            })
        })
        .map_err(|e| ProducerError::connection(PRODUCER_NAME, e))?;

        tracing::info!(
            brokers = %settings.brokers.join(","),
            topic = %settings.topic,
            "Kafka producer connected"
        );

        Ok(Self {
            producer,
            topic: settings.topic.clone(),
            normalizer,
            flush_timeout: Duration::from_millis(settings.message_timeout_ms),
        })
    }

    /// Builds the librdkafka client configuration
    fn client_config(settings: &KafkaSettings) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", settings.brokers.join(","))
            .set("acks", &settings.acks)
            .set("message.timeout.ms", settings.message_timeout_ms.to_string());
        config
    }
}

#[async_trait]
impl NotificationProducer for KafkaProducer {
    /// Sends a notification to the configured topic
    ///
    /// Completes once the broker acknowledged the message or the delivery
    /// failed.
    async fn send(&self, notification: Notification) -> ProducerResult<()> {
        let (notification, payload) = self.normalizer.encode(PRODUCER_NAME, notification)?;

        let record = FutureRecord::<(), _>::to(&self.topic).payload(&payload);
        let delivery = self
            .producer
            .send(record, Timeout::Never)
            .await
            .map_err(|(e, _)| e)
            .context("failed to send message")
            .map_err(|e| ProducerError::transport(PRODUCER_NAME, e))?;

        tracing::debug!(
            id = %notification.id,
            topic = %self.topic,
            ?delivery,
            "Notification delivered to Kafka"
        );

        Ok(())
    }

    /// Flushes messages still queued in the client
    async fn close(&self) -> ProducerResult<()> {
        let producer = self.producer.clone();
        let timeout = self.flush_timeout;
        tokio::task::spawn_blocking(move || producer.flush(Timeout::After(timeout)))
            .await
            .context("flush task failed")
            .and_then(|result| result.context("failed to flush Kafka producer"))
            .map_err(|e| ProducerError::transport(PRODUCER_NAME, e))?;

        tracing::info!(topic = %self.topic, "Kafka producer closed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        PRODUCER_NAME
    }
}
