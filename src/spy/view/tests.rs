use super::*;
use crate::config::SiteConfig;
use crate::spy::DocumentLayout;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn layout() -> DocumentLayout {
    DocumentLayout::new([
        (Some("a".into()), 100.0),
        (Some("b".into()), 600.0),
        (Some("c".into()), 1200.0),
    ])
}

fn view() -> PageView<DocumentLayout> {
    PageView::new(layout(), &SiteConfig::default().catalog)
}

#[test]
fn test_new_view_registers_visibility_only() {
    let view = view();
    assert_eq!(view.listener_count(), 1);
    assert!(!view.is_catalog_mounted());
    assert!(!view.visible());
    assert_eq!(view.active(), None);
}

#[test]
fn test_mount_catalog_computes_immediately() {
    let mut view = view();
    let t0 = Instant::now();

    assert!(view.mount_catalog(t0).is_some());
    assert_eq!(view.active(), Some("a"));
    assert_eq!(view.listener_count(), 2);

    // second mount is a no-op
    assert!(view.mount_catalog(t0).is_none());
    assert_eq!(view.listener_count(), 2);
}

#[test]
fn test_scroll_burst_collapses_into_trailing_run() {
    let mut view = view();
    let t0 = Instant::now();
    view.mount_catalog(t0);

    let events = view.scroll(500.0, t0 + ms(10));
    assert_eq!(events, vec![ViewEvent::VisibilityChanged(true)]);
    assert_eq!(view.active(), Some("a"));
    assert_eq!(view.next_deadline(), Some(t0 + ms(200)));

    // nothing due yet
    assert!(view.tick(t0 + ms(150), &true).is_empty());

    let events = view.tick(t0 + ms(200), &true);
    assert_eq!(events, vec![ViewEvent::ActiveChanged(Some("b".into()))]);
    assert_eq!(view.pending_timers(), 0);
}

#[test]
fn test_scroll_after_interval_runs_leading_edge() {
    let mut view = view();
    let t0 = Instant::now();
    view.mount_catalog(t0);

    let events = view.scroll(1100.0, t0 + ms(300));
    assert_eq!(
        events,
        vec![
            ViewEvent::VisibilityChanged(true),
            ViewEvent::ActiveChanged(Some("c".into())),
        ]
    );

    // back above the reveal offset
    let events = view.scroll(0.0, t0 + ms(600));
    assert_eq!(
        events,
        vec![
            ViewEvent::VisibilityChanged(false),
            ViewEvent::ActiveChanged(Some("a".into())),
        ]
    );
}

#[test]
fn test_scroll_without_catalog_only_toggles_visibility() {
    let mut view = view();
    let t0 = Instant::now();

    let events = view.scroll(1100.0, t0);
    assert_eq!(events, vec![ViewEvent::VisibilityChanged(true)]);
    assert_eq!(view.active(), None);
    assert_eq!(view.next_deadline(), None);
}

#[test]
fn test_unmount_catalog_drops_trailing_run() {
    let mut view = view();
    let t0 = Instant::now();
    view.mount_catalog(t0);
    view.scroll(700.0, t0 + ms(50));
    assert_eq!(view.pending_timers(), 1);

    view.unmount_catalog();
    assert_eq!(view.pending_timers(), 0);
    assert!(view.tick(t0 + ms(400), &true).is_empty());
    assert_eq!(view.active(), Some("a"));
}

#[test]
fn test_remount_inside_window_computes_immediately() {
    let mut view = view();
    let t0 = Instant::now();
    view.mount_catalog(t0);
    view.unmount_catalog();

    view.scroll(700.0, t0 + ms(50));
    assert!(view.mount_catalog(t0 + ms(100)).is_some());
    assert_eq!(view.active(), Some("b"));
    assert_eq!(view.pending_timers(), 0);

    // the remount opened a fresh window
    view.scroll(1100.0, t0 + ms(150));
    assert_eq!(view.active(), Some("b"));
    assert_eq!(view.next_deadline(), Some(t0 + ms(300)));
}

#[test]
fn test_fallback_redirects_when_marker_missing() {
    let config = SiteConfig::default();
    let mut view = view();
    let t0 = Instant::now();
    view.schedule_fallback(FallbackCheck::missing_post(&config), t0);

    assert!(view.tick(t0 + ms(7999), &false).is_empty());
    let events = view.tick(t0 + ms(8000), &false);
    assert_eq!(
        events,
        vec![ViewEvent::Redirect(Redirect {
            target: "/404".into()
        })]
    );
    // fires once
    assert!(view.tick(t0 + ms(9000), &false).is_empty());
}

#[test]
fn test_fallback_stays_when_marker_present() {
    let config = SiteConfig::default();
    let mut view = view();
    let t0 = Instant::now();
    view.schedule_fallback(FallbackCheck::not_found(&config), t0);

    assert!(view.tick(t0 + ms(3000), &true).is_empty());
    assert_eq!(view.pending_timers(), 0);
}

#[test]
fn test_report_load_short_circuits_fallback() {
    let config = SiteConfig::default();
    let t0 = Instant::now();

    let mut loaded = view();
    loaded.schedule_fallback(FallbackCheck::missing_post(&config), t0);
    assert_eq!(loaded.report_load(LoadOutcome::Loaded), None);
    assert!(loaded.tick(t0 + ms(10_000), &false).is_empty());

    let mut failed = view();
    failed.schedule_fallback(FallbackCheck::missing_post(&config), t0);
    assert_eq!(
        failed.report_load(LoadOutcome::Failed),
        Some(Redirect {
            target: "/404".into()
        })
    );
    assert_eq!(failed.pending_timers(), 0);
}

#[test]
fn test_teardown_releases_everything() {
    let config = SiteConfig::default();
    let mut view = view();
    let t0 = Instant::now();
    view.mount_catalog(t0);
    view.scroll(700.0, t0 + ms(20));
    view.schedule_fallback(FallbackCheck::missing_post(&config), t0);
    assert_eq!(view.pending_timers(), 2);

    view.teardown();
    assert!(view.is_torn_down());
    assert_eq!(view.listener_count(), 0);
    assert_eq!(view.pending_timers(), 0);
    assert_eq!(view.next_deadline(), None);

    assert!(view.scroll(1100.0, t0 + ms(500)).is_empty());
    assert!(view.tick(t0 + ms(10_000), &false).is_empty());
    assert!(view.mount_catalog(t0 + ms(10_000)).is_none());
    assert_eq!(view.active(), Some("a"));
}

#[test]
fn test_subscribers_follow_view_updates() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut view = view();
    view.subscribe(move |id| sink.borrow_mut().push(id.map(str::to_owned)));

    let t0 = Instant::now();
    view.mount_catalog(t0);
    view.scroll(650.0, t0 + ms(250));
    view.scroll(660.0, t0 + ms(500));

    assert_eq!(
        *seen.borrow(),
        vec![Some("a".to_string()), Some("b".to_string())]
    );
}

#[test]
fn test_teardown_drops_subscribers() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let mut view = view();
    let id = view.subscribe(move |_| counter.set(counter.get() + 1));
    view.mount_catalog(Instant::now());
    assert_eq!(calls.get(), 1);
    assert_eq!(Rc::strong_count(&calls), 2);

    view.teardown();
    assert_eq!(view.spy.subscriber_count(), 0);
    assert_eq!(Rc::strong_count(&calls), 1);
    assert!(!view.unsubscribe(id));
}
