mod notification;

pub use notification::{ALL_USERS_TARGET, Notification, SYSTEM_NOTIFICATION_TYPE};
