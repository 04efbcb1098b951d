//! Core notification producer trait.
//!
//! This module provides the abstraction over message transports, allowing
//! the service layer to publish notifications without knowing which broker
//! sits behind it.

use super::error::ProducerResult;
use crate::models::Notification;
use async_trait::async_trait;

/// Trait for notification producers (Kafka, Kinesis, ...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All producers must be Send + Sync so they can be shared behind an `Arc`.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct StdoutProducer {
///     normalizer: Normalizer,
/// }
///
/// #[async_trait]
/// impl NotificationProducer for StdoutProducer {
///     async fn send(&self, notification: Notification) -> ProducerResult<()> {
///         let (_, payload) = self.normalizer.encode(self.name(), notification)?;
///         println!("{}", String::from_utf8_lossy(&payload));
///         Ok(())
///     }
///
///     async fn close(&self) -> ProducerResult<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "stdout"
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationProducer: Send + Sync {
    /// Publishes a notification
    ///
    /// Missing `id` and `timestamp` are filled in before serialization. The
    /// returned future completes once the transport reports the outcome.
    /// No retry is attempted.
    ///
    /// # Errors
    /// `ProducerError::Transport` when serialization or the transport call fails
    async fn send(&self, notification: Notification) -> ProducerResult<()>;

    /// Releases transport resources
    ///
    /// Call once at shutdown, after the last `send`.
    async fn close(&self) -> ProducerResult<()>;

    /// Returns the producer name for logging/debugging
    fn name(&self) -> &'static str;
}
