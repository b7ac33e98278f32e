use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Notification, QuizOutput};

#[derive(Clone)]
pub struct MockQuizOutput {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn flush(&mut self) -> Vec<Notification> {
        std::mem::replace(&mut *self.notifications.write(), Vec::new())
    }

    pub fn contains(&self, notification: &Notification) -> bool {
        self.notifications.read().iter().any(|n| n == notification)
    }
}

impl QuizOutput for MockQuizOutput {
    fn notify(&self, notification: &Notification) {
        self.notifications.write().push(notification.clone());
    }
}
