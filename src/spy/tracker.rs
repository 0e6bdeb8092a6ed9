//! Active heading tracking.

use super::{HeadingPosition, HeadingPositionProvider};

/// Pick the active heading id.
///
/// Starting from `previous`, every heading whose top edge is above
/// `threshold` (`top - threshold < 0`) replaces the candidate, so the last
/// qualifying heading in document order wins. Slots that are not elements
/// and headings with a non-finite top are skipped. With no qualifying
/// heading the previous id is kept.
pub fn compute_active<I>(headings: I, previous: Option<&str>, threshold: f64) -> Option<String>
where
    I: IntoIterator<Item = Option<HeadingPosition>>,
{
    let mut candidate = previous.map(str::to_owned);

    for heading in headings.into_iter().flatten() {
        if !heading.top.is_finite() {
            continue;
        }
        if heading.top - threshold < 0.0 {
            candidate = heading.id;
        }
    }

    candidate
}

/// Handle returned by [`ScrollSpy::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(Option<&str>)>;

/// Owner of the active heading state for one page view.
pub struct ScrollSpy {
    threshold: f64,
    active: Option<String>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl ScrollSpy {
    pub const DEFAULT_THRESHOLD: f64 = 150.0;

    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: None,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Register a callback invoked with the new id whenever it changes.
    pub fn subscribe(&mut self, f: impl FnMut(Option<&str>) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns `false` if the subscriber was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Drop every subscriber.
    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Recompute the active heading from `provider` and publish it.
    pub fn recompute(&mut self, provider: &dyn HeadingPositionProvider) -> Option<&str> {
        let next = compute_active(
            provider.headings_in_order(),
            self.active.as_deref(),
            self.threshold,
        );
        self.publish(next);
        self.active()
    }

    fn publish(&mut self, next: Option<String>) {
        if next == self.active {
            return;
        }
        self.active = next;
        let active = self.active.as_deref();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(active);
        }
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl std::fmt::Debug for ScrollSpy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSpy")
            .field("threshold", &self.threshold)
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
