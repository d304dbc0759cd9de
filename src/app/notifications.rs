use super::action::Action;
use crate::domain::services::NotificationService;
use tokio::sync::mpsc;

/// Delivers notifications to the UI through the action channel.
pub struct ChannelNotifications {
    tx: mpsc::Sender<Action>,
}

impl ChannelNotifications {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx }
    }
}

impl NotificationService for ChannelNotifications {
    fn error(&self, message: String) {
        tracing::warn!("notification: {message}");
        let _ = self.tx.try_send(Action::ErrorOccurred(message));
    }

    fn info(&self, message: String) {
        let _ = self.tx.try_send(Action::StatusMessage(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_becomes_action() {
        let (tx, mut rx) = mpsc::channel(1);
        ChannelNotifications::new(tx).error("install failed".to_string());
        assert_eq!(
            rx.recv().await,
            Some(Action::ErrorOccurred("install failed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_info_becomes_status_message() {
        let (tx, mut rx) = mpsc::channel(1);
        ChannelNotifications::new(tx).info("installed".to_string());
        assert_eq!(
            rx.recv().await,
            Some(Action::StatusMessage("installed".to_string()))
        );
    }
}
