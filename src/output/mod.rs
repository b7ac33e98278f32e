#[cfg(test)]
pub mod mock;

/// User-facing notifications emitted by the engine, rendered by the
/// presentation layer (as toasts in the reference UI).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notification {
    QuizComplete {
        correct: u32,
        total: u32,
        percentage: u32,
        category: String,
    },
}

/// Side-effect sink for engine notifications. Implementations must not
/// block; the engine fires and forgets.
pub trait QuizOutput {
    fn notify(&self, notification: &Notification);
}

/// Discards all notifications.
pub struct NullQuizOutput;

impl QuizOutput for NullQuizOutput {
    fn notify(&self, _notification: &Notification) {}
}
