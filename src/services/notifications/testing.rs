//! In-memory producer for tests.

use super::error::{ProducerError, ProducerResult};
use super::producer::NotificationProducer;
use crate::models::Notification;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Producer that records notifications and optionally fails every send
#[derive(Default)]
pub struct RecordingProducer {
    pub sent: Mutex<Vec<Notification>>,
    pub fail_with: Option<&'static str>,
    closed: AtomicUsize,
}

impl RecordingProducer {
    pub fn failing(reason: &'static str) -> Self {
        Self {
            fail_with: Some(reason),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationProducer for RecordingProducer {
    async fn send(&self, notification: Notification) -> ProducerResult<()> {
        self.sent.lock().unwrap().push(notification);
        match self.fail_with {
            Some(reason) => Err(ProducerError::transport("recording", anyhow::anyhow!(reason))),
            None => Ok(()),
        }
    }

    async fn close(&self) -> ProducerResult<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
