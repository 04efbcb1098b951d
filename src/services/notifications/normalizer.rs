//! Pre-send normalization of notifications.
//!
//! Producers never stamp notifications themselves. They run every outgoing
//! notification through a `Normalizer`, which fills in a missing id and
//! timestamp from an injected clock and id generator, then serializes it.

use super::error::{ProducerError, ProducerResult};
use crate::models::Notification;
use anyhow::Context;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Source of notification ids
pub trait IdGenerator: Send + Sync {
    /// Returns a new id; `now` is the timestamp the notification is stamped with
    fn next_id(&self, now: Timestamp) -> String;
}

/// Ids derived from the Unix time in nanoseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct NanosIdGenerator;

impl IdGenerator for NanosIdGenerator {
    fn next_id(&self, now: Timestamp) -> String {
        now.as_nanosecond().to_string()
    }
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, _now: Timestamp) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Id generation strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Nanos,
    Uuid,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Nanos => "nanos",
            IdStrategy::Uuid => "uuid",
        }
    }

    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Nanos => Arc::new(NanosIdGenerator),
            IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        }
    }
}

/// Fills in missing notification metadata and produces the wire payload
#[derive(Clone)]
pub struct Normalizer {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Normalizer {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Normalizer using the system clock and the given id strategy
    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self::new(Arc::new(SystemClock), strategy.generator())
    }

    /// Sets `id` and `timestamp` when the caller left them unset
    ///
    /// Values already present are kept as they are.
    pub fn normalize(&self, mut notification: Notification) -> Notification {
        if notification.id.is_empty() || notification.timestamp.is_none() {
            let now = self.clock.now();
            if notification.id.is_empty() {
                notification.id = self.ids.next_id(now);
            }
            if notification.timestamp.is_none() {
                notification.timestamp = Some(now);
            }
        }
        notification
    }

    /// Normalizes the notification and serializes it to JSON
    ///
    /// # Errors
    /// Returns `ProducerError::Transport` attributed to `producer` when
    /// serialization fails.
    pub fn encode(
        &self,
        producer: &'static str,
        notification: Notification,
    ) -> ProducerResult<(Notification, Vec<u8>)> {
        let notification = self.normalize(notification);
        let payload = notification
            .to_json_bytes()
            .context("failed to marshal notification")
            .map_err(|e| ProducerError::transport(producer, e))?;
        Ok((notification, payload))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_strategy(IdStrategy::default())
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}
