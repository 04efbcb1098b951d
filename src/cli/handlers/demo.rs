//! Demo command handler
//!
//! Sends one system announcement and one targeted notification.

use tracing::{error, info};

use crate::error::{AppResult, error_chain};
use crate::services::NotificationService;

pub const ANNOUNCEMENT_TITLE: &str = "System Update";
pub const ANNOUNCEMENT_MESSAGE: &str =
    "Our app is undergoing maintenance. Expected downtime: 30 minutes.";

pub const OFFER_TYPE: &str = "marketing";
pub const OFFER_TITLE: &str = "Special Offer!";
pub const OFFER_MESSAGE: &str = "50% off all premium features this weekend!";
pub const OFFER_TARGETS: [&str; 2] = ["premium_users", "active_users"];

/// Handler for the demo command
pub struct DemoCommandHandler {
    service: NotificationService,
}

impl DemoCommandHandler {
    pub fn new(service: NotificationService) -> Self {
        Self { service }
    }

    /// Send both demo notifications
    ///
    /// A failed send is logged and the second send is still attempted.
    /// Always returns `Ok(())`.
    pub async fn execute(&self) -> AppResult<()> {
        match self
            .service
            .broadcast_system_announcement(ANNOUNCEMENT_TITLE, ANNOUNCEMENT_MESSAGE)
            .await
        {
            Ok(()) => info!("Sent system announcement"),
            Err(e) => error!(error = %error_chain(&e), "Failed to broadcast system announcement"),
        }

        let targets = OFFER_TARGETS.iter().map(|t| t.to_string()).collect();
        match self
            .service
            .send_targeted_notification(OFFER_TYPE, OFFER_TITLE, OFFER_MESSAGE, targets)
            .await
        {
            Ok(()) => info!(kind = OFFER_TYPE, "Sent targeted notification"),
            Err(e) => error!(error = %error_chain(&e), "Failed to send targeted notification"),
        }

        Ok(())
    }
}
