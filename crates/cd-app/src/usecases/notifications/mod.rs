//! Notification use cases.

mod broadcast_notification;
mod list_notifications;
mod mark_notification_read;

pub use broadcast_notification::BroadcastNotification;
pub use list_notifications::ListNotifications;
pub use mark_notification_read::MarkNotificationRead;
