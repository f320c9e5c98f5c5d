//! Synchronous event bus.
//!
//! Handlers run on the publishing thread, in subscription order, before
//! `publish` returns. The handler list is snapshotted first, so a handler
//! may subscribe or unsubscribe; such changes apply from the next publish.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Which events a subscriber receives.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events in any of these categories
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Arc<dyn Fn(AppEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Publish/subscribe hub shared by an editor session and its observers.
pub struct EventBus {
    subscriptions: RwLock<Vec<Subscription>>,
    next_id: AtomicU64,
    /// Most recent events, oldest first; `None` when history is off
    history: Option<Mutex<VecDeque<AppEvent>>>,
    history_capacity: usize,
}

impl EventBus {
    /// A bus without history.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            history: None,
            history_capacity: 0,
        }
    }

    /// A bus that keeps the last `capacity` published events.
    pub fn with_history(capacity: usize) -> Self {
        Self {
            history: Some(Mutex::new(VecDeque::with_capacity(capacity))),
            history_capacity: capacity,
            ..Self::new()
        }
    }

    /// Delivers `event` to every matching subscriber.
    ///
    /// Returns the number of handlers called.
    pub fn publish(&self, event: AppEvent) -> usize {
        tracing::trace!("Publishing event: {}", event.description());

        if let Some(history) = &self.history {
            let mut history = history.lock();
            if self.history_capacity > 0 {
                if history.len() == self.history_capacity {
                    history.pop_front();
                }
                history.push_back(event.clone());
            }
        }

        let handlers: Vec<Handler> = self
            .subscriptions
            .read()
            .iter()
            .filter(|s| s.filter.matches(&event))
            .map(|s| Arc::clone(&s.handler))
            .collect();

        for handler in &handlers {
            handler(event.clone());
        }
        handlers.len()
    }

    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions.write().push(Subscription {
            id,
            filter,
            handler: Arc::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Retained events, oldest first. Empty when history is off.
    pub fn history(&self) -> Vec<AppEvent> {
        self.history
            .as_ref()
            .map(|h| h.lock().iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("history_capacity", &self.history_capacity)
            .finish()
    }
}

static EVENT_BUS: OnceLock<Arc<EventBus>> = OnceLock::new();

/// Process-wide bus, created on first use.
pub fn event_bus() -> Arc<EventBus> {
    EVENT_BUS
        .get_or_init(|| Arc::new(EventBus::new()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::{LayoutEvent, SelectionEvent};
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_event_delivery() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        bus.subscribe(EventFilter::All, move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared)), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared)), 0);
    }

    #[test]
    fn test_delivery_follows_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..4 {
            let order = order.clone();
            bus.subscribe(EventFilter::All, move |_| order.lock().push(n));
        }

        bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared));
        assert_eq!(*order.lock(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let layout_count = Arc::new(AtomicUsize::new(0));
        let selection_count = Arc::new(AtomicUsize::new(0));

        let lc = layout_count.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Layout]),
            move |_| {
                lc.fetch_add(1, Ordering::SeqCst);
            },
        );

        let sc = selection_count.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Selection]),
            move |_| {
                sc.fetch_add(1, Ordering::SeqCst);
            },
        );

        bus.publish(AppEvent::Layout(LayoutEvent::SeatAdded {
            id: 1,
            label: "A1".to_string(),
        }));
        bus.publish(AppEvent::Selection(SelectionEvent::Cleared));
        bus.publish(AppEvent::Selection(SelectionEvent::Changed { ids: vec![1, 2] }));

        assert_eq!(layout_count.load(Ordering::SeqCst), 1);
        assert_eq!(selection_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handler_can_unsubscribe_itself() {
        let bus = Arc::new(EventBus::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let own_id: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let id = {
            let bus_inner = Arc::clone(&bus);
            let calls = calls.clone();
            let own_id = own_id.clone();
            bus.subscribe(EventFilter::All, move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                if let Some(id) = own_id.lock().take() {
                    bus_inner.unsubscribe(id);
                }
            })
        };
        *own_id.lock() = Some(id);

        assert_eq!(bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared)), 1);
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared)), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_can_subscribe_during_publish() {
        let bus = Arc::new(EventBus::new());
        let added = Arc::new(AtomicUsize::new(0));

        {
            let bus_inner = Arc::clone(&bus);
            let added = added.clone();
            bus.subscribe(
                EventFilter::Categories(vec![EventCategory::Layout]),
                move |_| {
                    if added.fetch_add(1, Ordering::SeqCst) == 0 {
                        bus_inner.subscribe(EventFilter::All, |_| {});
                    }
                },
            );
        }

        // The new subscriber only sees later events.
        assert_eq!(bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared)), 1);
        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared)), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let bus = EventBus::with_history(5);

        for id in 0..10 {
            bus.publish(AppEvent::Layout(LayoutEvent::SeatsRemoved { ids: vec![id] }));
        }

        let history = bus.history();
        assert_eq!(history.len(), 5);
        assert_eq!(
            history[0],
            AppEvent::Layout(LayoutEvent::SeatsRemoved { ids: vec![5] })
        );
    }

    #[test]
    fn test_history_off_by_default() {
        let bus = EventBus::new();
        bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared));
        assert!(bus.history().is_empty());

        let bus = EventBus::with_history(0);
        bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared));
        assert!(bus.history().is_empty());
    }

    #[test]
    fn test_filter_matches() {
        let event = AppEvent::Layout(LayoutEvent::CanvasCleared);

        assert!(EventFilter::All.matches(&event));
        assert!(EventFilter::Categories(vec![EventCategory::Layout]).matches(&event));
        assert!(!EventFilter::Categories(vec![EventCategory::Storage]).matches(&event));
    }
}
