//! Built-in seed data shown when the config file provides none

use crate::types::{Channel, Notification, NotificationKind};

/// Default channel list
pub fn default_channels() -> Vec<Channel> {
    vec![
        Channel::new("1", "general", "Dev Community")
            .with_connected(true)
            .with_messages_count(1243)
            .with_last_message("Hey everyone! New update is live"),
        Channel::new("2", "announcements", "Gaming Hub")
            .with_connected(true)
            .with_messages_count(567)
            .with_last_message("Server maintenance tonight"),
        Channel::new("3", "random", "Friends")
            .with_connected(false)
            .with_messages_count(89),
    ]
}

/// Default notification feed
pub fn default_notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            "general",
            "New feature release announcement",
            "2 min ago",
            NotificationKind::Message,
        ),
        Notification::new(
            "2",
            "announcements",
            "Server maintenance scheduled",
            "15 min ago",
            NotificationKind::Mention,
        ),
        Notification::new(
            "3",
            "general",
            "Image uploaded: screenshot.png",
            "1 hour ago",
            NotificationKind::Media,
        ),
    ]
}
