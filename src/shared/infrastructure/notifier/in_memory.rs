use crate::shared::infrastructure::notifier::{Notification, Notifier};
use tokio::sync::Mutex;

/// Collects notifications in arrival order. The shell drains it as the toast feed.
#[derive(Default)]
pub struct InMemoryNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Notification> {
        self.entries.lock().await.clone()
    }

    pub async fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().await)
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) {
        self.entries.lock().await.push(notification);
    }
}
