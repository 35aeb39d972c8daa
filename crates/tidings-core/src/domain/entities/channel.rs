use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ChannelId;

/// A delivery channel such as email or SMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: ChannelId,
    pub title: String,
    pub enabled: bool,
}

impl NotificationChannel {
    pub fn new(id: ChannelId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            enabled: true,
        }
    }
}
