//! Announce and send command handlers
//!
//! Unlike `demo`, a failed send is returned so the process exits non-zero.

use tracing::info;

use crate::error::AppResult;
use crate::services::NotificationService;

/// Handler for the announce and send commands
pub struct PublishCommandHandler {
    service: NotificationService,
}

impl PublishCommandHandler {
    pub fn new(service: NotificationService) -> Self {
        Self { service }
    }

    /// Broadcast one system announcement
    pub async fn announce(&self, title: &str, message: &str) -> AppResult<()> {
        self.service
            .broadcast_system_announcement(title, message)
            .await?;
        info!(title, "Sent system announcement");
        Ok(())
    }

    /// Send one notification to the given targets
    pub async fn send(
        &self,
        kind: &str,
        title: &str,
        message: &str,
        targets: Vec<String>,
    ) -> AppResult<()> {
        let target_count = targets.len();
        self.service
            .send_targeted_notification(kind, title, message, targets)
            .await?;
        info!(kind, title, target_count, "Sent targeted notification");
        Ok(())
    }
}
