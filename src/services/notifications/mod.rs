//! Notification publishing with pluggable producers.
//!
//! The core trait `NotificationProducer` hides the message transport behind a
//! uniform `send`/`close` interface. Kafka and Kinesis implementations are
//! provided; `create_producer` picks one from configuration.

mod error;
mod factory;
mod kafka_producer;
mod kinesis_producer;
mod normalizer;
mod producer;
#[cfg(test)]
pub(crate) mod testing;

pub mod notification_service;

pub use error::{ProducerError, ProducerResult};
pub use factory::create_producer;
pub use kafka_producer::KafkaProducer;
pub use kinesis_producer::KinesisProducer;
pub use normalizer::{
    Clock, IdGenerator, IdStrategy, NanosIdGenerator, Normalizer, SystemClock, UuidIdGenerator,
};
pub use notification_service::NotificationService;
pub use producer::NotificationProducer;
