// File: crates/rtchart-core/tests/reactive.rs
// Purpose: Mount/teardown subscriptions, resize vs theme recompute scope, data replacement.

mod support;

use rtchart_core::reactive::Topic;
use rtchart_core::{Chart, ChartOptions, Notification, PointerEvent, PointerSample, Recompute, ThemeDescriptor};
use support::{samples_at_minutes, FakeHost};

fn chart() -> Chart {
    let mut c = Chart::new(ChartOptions::default(), ThemeDescriptor::light());
    c.set_samples(&samples_at_minutes(&[0, 1, 2, 3], 100.0));
    c
}

#[test]
fn mount_measures_and_subscribes_then_teardown_releases() {
    let mut host = FakeHost::new(800.0, ThemeDescriptor::dark());
    let mut c = chart();
    c.mount(&mut host);
    assert!(c.is_mounted());
    assert_eq!(c.width(), 800.0);
    assert!(c.theme().dark);
    let topics = host.active.iter().map(|(_, t)| *t).collect::<Vec<_>>();
    assert_eq!(topics, vec![Topic::Resize, Topic::Theme]);

    c.unmount(&mut host);
    assert!(!c.is_mounted());
    assert!(host.active.is_empty());
    assert_eq!(host.released.len(), 2);

    c.unmount(&mut host);
    assert_eq!(host.released.len(), 2);
}

#[test]
fn remount_does_not_leak_subscriptions() {
    let mut host = FakeHost::new(800.0, ThemeDescriptor::light());
    let mut c = chart();
    c.mount(&mut host);
    c.mount(&mut host);
    assert_eq!(host.active.len(), 2);
}

#[test]
fn resize_recomputes_geometry_once_per_distinct_width() {
    let mut c = chart();
    let before = c.geometry_passes();
    assert_eq!(c.notify(Notification::Resized(640.0)), Recompute::Geometry);
    assert_eq!(c.notify(Notification::Resized(640.0)), Recompute::Nothing);
    assert_eq!(c.geometry_passes(), before + 1);
    assert_eq!(c.geometry().points.last().map(|p| p.x), Some(640.0 - 48.0));
}

#[test]
fn theme_change_only_touches_colours() {
    let mut c = chart();
    c.resize(640.0);
    let geometry = c.geometry().clone();
    let passes = c.geometry_passes();
    let old_palette = c.palette().clone();

    assert_eq!(c.notify(Notification::ThemeChanged(ThemeDescriptor::dark())), Recompute::Palette);
    assert_eq!(c.notify(Notification::ThemeChanged(ThemeDescriptor::dark())), Recompute::Nothing);
    assert_eq!(c.geometry_passes(), passes);
    assert_eq!(c.geometry(), &geometry);
    assert_ne!(c.palette(), &old_palette);
    assert_eq!(c.palette_passes(), 2);
}

#[test]
fn recompute_drops_stale_hover() {
    let mut c = chart();
    c.resize(1_000.0);
    c.pointer(PointerEvent::Move(PointerSample::mouse(48.0, 100.0)));
    assert!(c.hover().is_hovering());
    c.resize(900.0);
    assert!(!c.hover().is_hovering());
}

#[test]
fn replacing_samples_handles_unsorted_and_empty_input() {
    let mut c = chart();
    c.resize(640.0);
    let mut shuffled = samples_at_minutes(&[3, 0, 2, 1], 100.0);
    shuffled.swap(0, 1);
    c.set_samples(&shuffled);
    let ts = c.samples().iter().map(|s| s.timestamp_ms).collect::<Vec<_>>();
    assert!(ts.windows(2).all(|w| w[0] <= w[1]));

    c.set_samples(&[]);
    let list = c.draw_list();
    assert!(list.shapes.is_empty());
    assert_eq!(list.empty.map(|e| e.message), Some("No response time data".to_string()));
}
