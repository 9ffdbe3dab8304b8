use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Options revealed by the select loading demo once its timer fires.
pub const SELECT_DEMO_OPTIONS: [&str; 5] = ["Visal", "John", "Alice", "Michael", "Sok"];

/// Value that becomes available after a simulated network delay.
///
/// Dropping the handle aborts the pending timer, so no value is published
/// once the owner is torn down.
#[derive(Debug)]
pub struct DelayedLoad<T> {
    receiver: watch::Receiver<Option<T>>,
    timer: JoinHandle<()>,
}

impl<T> DelayedLoad<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Starts the timer. Must be called inside a tokio runtime.
    #[must_use]
    pub fn spawn(delay: Duration, value: T) -> Self {
        let (sender, receiver) = watch::channel(None);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receivers may already be gone; nothing left to notify then.
            let _ = sender.send(Some(value));
        });
        Self { receiver, timer }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.receiver.borrow().is_none()
    }

    #[must_use]
    pub fn current(&self) -> Option<T> {
        (*self.receiver.borrow()).clone()
    }

    /// Waits for the value. Returns `None` if the timer was cancelled.
    pub async fn wait(&mut self) -> Option<T> {
        match self.receiver.wait_for(Option::is_some).await {
            Ok(value) => (*value).clone(),
            Err(_) => None,
        }
    }

    pub fn cancel(&self) {
        self.timer.abort();
    }
}

impl<T> Drop for DelayedLoad<T> {
    fn drop(&mut self) {
        if !self.timer.is_finished() {
            debug!("cancelling pending delayed load");
            self.timer.abort();
        }
    }
}

/// Select options arriving after `delay`.
#[must_use]
pub fn select_demo_options(delay: Duration) -> DelayedLoad<Vec<String>> {
    DelayedLoad::spawn(
        delay,
        SELECT_DEMO_OPTIONS.iter().map(|s| (*s).to_owned()).collect(),
    )
}
