//! Producer factory for the configured broker.

use super::error::ProducerResult;
use super::kafka_producer::KafkaProducer;
use super::kinesis_producer::KinesisProducer;
use super::normalizer::Normalizer;
use super::producer::NotificationProducer;
use crate::config::{BrokerKind, BrokerSettings};
use std::sync::Arc;

/// Create the producer selected by `settings.kind`
///
/// # Errors
/// `ProducerError::Connection` if the backend cannot be reached
pub async fn create_producer(
    settings: &BrokerSettings,
) -> ProducerResult<Arc<dyn NotificationProducer>> {
    let normalizer = Normalizer::with_strategy(settings.id_strategy);

    let producer: Arc<dyn NotificationProducer> = match settings.kind {
        BrokerKind::Kafka => Arc::new(KafkaProducer::connect(&settings.kafka, normalizer).await?),
        BrokerKind::Kinesis => {
            Arc::new(KinesisProducer::connect(&settings.kinesis, normalizer).await?)
        }
    };

    Ok(producer)
}
