//! One page view: scroll listeners, deferred timers and teardown.

use super::{HeadingPositionProvider, ScrollSpy, SubscriberId, Throttle, VisibilityGate};
use crate::config::CatalogConfig;
use crate::layout::fallback::{FallbackCheck, LoadOutcome, MarkerProbe, PendingCheck, Redirect};
use std::time::Instant;

/// Handle of a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    Visibility,
    ScrollSpy,
}

/// Observable result of feeding the view an event.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ActiveChanged(Option<String>),
    VisibilityChanged(bool),
    Redirect(Redirect),
}

/// State of one page view, from mount to teardown.
///
/// The base layout registers the visibility listener on creation. The
/// scroll-spy listener exists only while the table of contents is mounted.
/// After [`teardown`](Self::teardown) every event is ignored.
pub struct PageView<P> {
    provider: P,
    spy: ScrollSpy,
    throttle: Throttle,
    gate: VisibilityGate,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    fallbacks: Vec<PendingCheck>,
    torn_down: bool,
}

impl<P: HeadingPositionProvider> PageView<P> {
    pub fn new(provider: P, catalog: &CatalogConfig) -> Self {
        let mut view = Self {
            provider,
            spy: ScrollSpy::new(catalog.active_threshold),
            throttle: Throttle::new(catalog.throttle_interval()),
            gate: VisibilityGate::new(catalog.reveal_offset),
            listeners: Vec::new(),
            next_listener: 0,
            fallbacks: Vec::new(),
            torn_down: false,
        };
        view.listen(Listener::Visibility);
        view
    }

    // ------------------------------------------------------------------------
    // accessors
    // ------------------------------------------------------------------------

    #[inline]
    pub fn active(&self) -> Option<&str> {
        self.spy.active()
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.gate.visible()
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Follow active heading changes. See [`ScrollSpy::subscribe`].
    pub fn subscribe(&mut self, f: impl FnMut(Option<&str>) + 'static) -> SubscriberId {
        self.spy.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.spy.unsubscribe(id)
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.fallbacks.len() + usize::from(self.throttle.is_pending())
    }

    #[inline]
    pub fn is_catalog_mounted(&self) -> bool {
        self.has_listener(Listener::ScrollSpy)
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.fallbacks
            .iter()
            .map(|pending| pending.due)
            .chain(self.throttle.deadline())
            .min()
    }

    // ------------------------------------------------------------------------
    // lifecycle
    // ------------------------------------------------------------------------

    /// Mount the table of contents: register the scroll-spy listener and run
    /// it once, even inside the throttle window of an earlier mount. Returns
    /// `None` if it was already mounted.
    pub fn mount_catalog(&mut self, now: Instant) -> Option<ListenerId> {
        if self.torn_down || self.is_catalog_mounted() {
            return None;
        }
        let id = self.listen(Listener::ScrollSpy);
        self.throttle.record(now);
        self.spy.recompute(&self.provider);
        Some(id)
    }

    /// Unmount the table of contents, dropping its listener and any pending
    /// trailing recomputation.
    pub fn unmount_catalog(&mut self) {
        self.listeners.retain(|(_, l)| *l != Listener::ScrollSpy);
        self.throttle.cancel();
    }

    /// Release every listener, subscriber and timer.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        self.spy.clear_subscribers();
        self.throttle.cancel();
        self.fallbacks.clear();
        self.torn_down = true;
    }

    // ------------------------------------------------------------------------
    // events
    // ------------------------------------------------------------------------

    /// Window scrolled to `scroll_y` at `now`.
    pub fn scroll(&mut self, scroll_y: f64, now: Instant) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }

        self.provider.scrolled(scroll_y);

        for index in 0..self.listeners.len() {
            match self.listeners[index].1 {
                Listener::Visibility => {
                    let before = self.gate.visible();
                    let after = self.gate.observe(scroll_y);
                    if before != after {
                        events.push(ViewEvent::VisibilityChanged(after));
                    }
                }
                Listener::ScrollSpy => {
                    if self.throttle.trigger_at(now) {
                        self.recompute_into(&mut events);
                    }
                }
            }
        }

        events
    }

    /// Schedule a deferred marker check.
    pub fn schedule_fallback(&mut self, check: FallbackCheck, now: Instant) {
        if !self.torn_down {
            self.fallbacks.push(check.schedule(now));
        }
    }

    /// Apply an explicit load outcome to every pending check.
    ///
    /// `Loaded` cancels them; `Failed` redirects to the first check's target.
    pub fn report_load(&mut self, outcome: LoadOutcome) -> Option<Redirect> {
        let pending = std::mem::take(&mut self.fallbacks);
        pending
            .first()
            .and_then(|first| first.check.resolve_outcome(outcome))
    }

    /// Run due timers: the trailing scroll-spy run and fallback checks.
    pub fn tick(&mut self, now: Instant, probe: &dyn MarkerProbe) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }

        if self.is_catalog_mounted() && self.throttle.poll(now) {
            self.recompute_into(&mut events);
        }

        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.fallbacks)
            .into_iter()
            .partition(|pending| pending.is_due(now));
        self.fallbacks = waiting;

        events.extend(
            due.iter()
                .filter_map(|pending| pending.check.resolve(probe))
                .map(ViewEvent::Redirect),
        );

        events
    }

    // ------------------------------------------------------------------------
    // internals
    // ------------------------------------------------------------------------

    fn listen(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.iter().any(|(_, l)| *l == listener)
    }

    fn recompute_into(&mut self, events: &mut Vec<ViewEvent>) {
        let before = self.spy.active().map(str::to_owned);
        let after = self.spy.recompute(&self.provider).map(str::to_owned);
        if before != after {
            events.push(ViewEvent::ActiveChanged(after));
        }
    }
}

#[cfg(test)]
mod tests;
