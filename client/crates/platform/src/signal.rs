//! Back-navigation signal hub
//!
//! The host forwards every platform `hardwareBackPress` event to
//! [`BackSignalHub::dispatch`]. Handlers are asked newest-first and the first
//! one returning `true` suppresses the default navigation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Platform event name forwarded to the hub
pub const HARDWARE_BACK_PRESS: &str = "hardwareBackPress";

/// Back handler; returns `true` to suppress the default navigation
pub type BackHandler = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    handlers: Vec<(u64, BackHandler)>,
}

/// Fan-out point for back-navigation signals
#[derive(Clone, Default)]
pub struct BackSignalHub {
    inner: Arc<Mutex<HubInner>>,
}

impl BackSignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(inner: &Mutex<HubInner>) -> MutexGuard<'_, HubInner> {
        inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a handler until the returned [`Subscription`] is released
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        let handler: BackHandler = Arc::new(handler);
        let mut inner = Self::lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, handler));
        tracing::debug!(
            event = HARDWARE_BACK_PRESS,
            subscription_id = id,
            subscribers = inner.handlers.len(),
            "Back handler subscribed"
        );

        Subscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver one back signal
    ///
    /// ## Returns
    /// `true` if a handler suppressed the default navigation
    pub fn dispatch(&self) -> bool {
        // Snapshot so handlers may subscribe or release while running.
        let handlers: Vec<BackHandler> = Self::lock(&self.inner)
            .handlers
            .iter()
            .rev()
            .map(|(_, h)| h.clone())
            .collect();

        let suppressed = handlers.iter().any(|handler| handler());
        tracing::debug!(event = HARDWARE_BACK_PRESS, suppressed, "Back signal dispatched");
        suppressed
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        Self::lock(&self.inner).handlers.len()
    }
}

/// Registration in a [`BackSignalHub`]; unsubscribes on drop
#[must_use = "dropping a Subscription immediately unsubscribes the handler"]
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
}

impl Subscription {
    /// Unsubscribe now
    pub fn release(self) {
        drop(self);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        let mut inner = BackSignalHub::lock(&hub);
        inner.handlers.retain(|(id, _)| *id != self.id);
        tracing::debug!(
            event = HARDWARE_BACK_PRESS,
            subscription_id = self.id,
            subscribers = inner.handlers.len(),
            "Back handler released"
        );
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_no_subscribers_does_not_suppress() {
        let hub = BackSignalHub::new();
        assert!(!hub.dispatch());
    }

    #[test]
    fn test_newest_handler_runs_first_and_stops_dispatch() {
        let hub = BackSignalHub::new();
        let older_calls = Arc::new(AtomicUsize::new(0));

        let counter = older_calls.clone();
        let _older = hub.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let _newer = hub.subscribe(|| true);

        assert!(hub.dispatch());
        assert_eq!(older_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_falls_through_to_older_handler() {
        let hub = BackSignalHub::new();
        let older_calls = Arc::new(AtomicUsize::new(0));

        let counter = older_calls.clone();
        let _older = hub.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let _newer = hub.subscribe(|| false);

        assert!(hub.dispatch());
        assert_eq!(older_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_unsubscribes() {
        let hub = BackSignalHub::new();
        let sub = hub.subscribe(|| true);
        assert_eq!(hub.subscriber_count(), 1);

        sub.release();
        assert_eq!(hub.subscriber_count(), 0);
        assert!(!hub.dispatch());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let hub = BackSignalHub::new();
        {
            let _sub = hub.subscribe(|| true);
            assert_eq!(hub.subscriber_count(), 1);
        }
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = BackSignalHub::new();
        let sub = hub.subscribe(|| true);
        drop(hub);
        sub.release();
    }
}
