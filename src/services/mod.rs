//! Service layer for business logic operations.
//!
//! Services build domain messages and hand them to the transport layer.

pub mod notifications;

pub use notifications::NotificationService;
