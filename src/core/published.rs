//! # Published Values
//!
//! A tiny observable: one writer publishes, any number of subscribers read.
//!
//! Subscribers see the latest value as soon as they subscribe and are woken
//! for every later publish. Delivery is "most recent value, at least once":
//! a slow subscriber may miss intermediate values but never the last one.
//! There is no buffering and no back-pressure. Dropping a [`Subscriber`]
//! unsubscribes it.

use tokio::sync::watch;

pub struct Published<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Published<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Stores `value` and notifies every subscriber, even if nobody is
    /// listening or the value equals the previous one.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }

    pub fn latest(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it. Publishing from
    /// inside `f` deadlocks.
    pub fn with_latest<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> Subscriber<T> {
        // The current value is already marked as seen; read it with `latest()`.
        Subscriber {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

pub struct Subscriber<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> Subscriber<T> {
    /// The most recently published value.
    pub fn latest(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Returns the new value if something was published since the last read.
    /// Never blocks; suited to polling from a render loop.
    pub fn try_next(&mut self) -> Option<T> {
        match self.receiver.has_changed() {
            Ok(true) => Some(self.latest()),
            _ => None,
        }
    }

    /// Waits for the next publish. Returns `None` once the publisher is gone.
    pub async fn next(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.latest())
    }
}
