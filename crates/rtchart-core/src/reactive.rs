// File: crates/rtchart-core/src/reactive.rs
// Summary: Host signal seam (container width, theme) and subscription bookkeeping.

use crate::theme::ThemeDescriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Container width changed.
    Resize,
    /// Colours should be re-read.
    Theme,
}

/// What the host delivers after a subscribed signal fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notification {
    Resized(f32),
    ThemeChanged(ThemeDescriptor),
}

/// Which outputs a notification invalidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recompute {
    Nothing,
    /// Scales, gaps, paths and labels.
    Geometry,
    /// Stroke, fill and text colours only.
    Palette,
}

/// The host environment a chart is mounted into.
pub trait ChartHost {
    /// Current container width in device-independent pixels (0 when unmeasured).
    fn container_width(&self) -> f32;
    fn theme(&self) -> ThemeDescriptor;
    fn subscribe(&mut self, topic: Topic) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Subscriptions held while mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Subscriptions {
    pub resize: Option<SubscriptionId>,
    pub theme: Option<SubscriptionId>,
}

impl Subscriptions {
    pub fn is_active(&self) -> bool { self.resize.is_some() || self.theme.is_some() }

    pub fn acquire(host: &mut dyn ChartHost) -> Self {
        Self { resize: Some(host.subscribe(Topic::Resize)), theme: Some(host.subscribe(Topic::Theme)) }
    }

    /// Release everything still held. Safe to call twice.
    pub fn release(&mut self, host: &mut dyn ChartHost) {
        for id in [self.resize.take(), self.theme.take()].into_iter().flatten() {
            host.unsubscribe(id);
        }
    }
}
