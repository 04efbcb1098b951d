//! Notification service for business logic.
//!
//! Builds notifications for the supported use cases and hands them to the
//! injected producer.

use super::error::ProducerResult;
use super::producer::NotificationProducer;
use crate::models::Notification;
use std::sync::Arc;

/// Notification service publishing through one producer
#[derive(Clone)]
pub struct NotificationService {
    producer: Arc<dyn NotificationProducer>,
}

impl NotificationService {
    /// Creates a new NotificationService
    ///
    /// # Arguments
    /// * `producer` - Producer every notification is sent through
    pub fn new(producer: Arc<dyn NotificationProducer>) -> Self {
        Self { producer }
    }

    /// Broadcasts a system announcement to all users
    ///
    /// # Arguments
    /// * `title` - Announcement title
    /// * `message` - Announcement body
    ///
    /// # Returns
    /// The producer's result, unmodified
    pub async fn broadcast_system_announcement(
        &self,
        title: &str,
        message: &str,
    ) -> ProducerResult<()> {
        let notification = Notification::system_announcement(title, message);
        self.producer.send(notification).await
    }

    /// Sends a notification of the given type to specific targets
    ///
    /// # Arguments
    /// * `kind` - Notification type, e.g. "marketing"
    /// * `title` - Notification title
    /// * `message` - Notification body
    /// * `targets` - Audience identifiers, may be empty
    ///
    /// # Returns
    /// The producer's result, unmodified
    pub async fn send_targeted_notification(
        &self,
        kind: &str,
        title: &str,
        message: &str,
        targets: Vec<String>,
    ) -> ProducerResult<()> {
        let notification = Notification::new(kind, title, message, targets);
        self.producer.send(notification).await
    }

    /// The producer this service publishes through
    pub fn producer(&self) -> &Arc<dyn NotificationProducer> {
        &self.producer
    }
}
