// notify-backend/src/domain/notification_trigger.rs

use migration::notifiable::Trigger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 通知を発火させる条件
///
/// The legacy "any outcome" trigger no longer exists; it was split into
/// `Success` and `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTrigger {
    Start,
    Success,
    Error,
}

impl NotificationTrigger {
    /// 文字列からNotificationTriggerに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" | "started" => Some(Self::Start),
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Start, Self::Success, Self::Error]
    }
}

impl From<NotificationTrigger> for Trigger {
    fn from(trigger: NotificationTrigger) -> Self {
        match trigger {
            NotificationTrigger::Start => Trigger::Start,
            NotificationTrigger::Success => Trigger::Success,
            NotificationTrigger::Error => Trigger::Error,
        }
    }
}

impl fmt::Display for NotificationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
