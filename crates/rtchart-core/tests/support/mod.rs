// File: crates/rtchart-core/tests/support/mod.rs
// Purpose: Shared fixtures for integration tests (timestamps, sample builders, fake host).

#![allow(dead_code)]

use rtchart_core::reactive::{ChartHost, SubscriptionId, Topic};
use rtchart_core::{ChartOptions, Sample, ThemeDescriptor};

/// 2024-01-01T10:00:00Z
pub const BASE_MS: i64 = 1_704_103_200_000;
pub const MINUTE: i64 = 60_000;

/// Container width whose plot area is exactly `plot_w` wide with default insets.
pub fn width_for_plot(plot_w: f32) -> f32 {
    plot_w + ChartOptions::default().insets.hsum()
}

pub fn samples_at_minutes(mins: &[i64], value: f64) -> Vec<Sample> {
    mins.iter().map(|m| Sample::new(BASE_MS + m * MINUTE, value)).collect()
}

pub fn utc_options() -> ChartOptions {
    ChartOptions { utc_offset_minutes: 0, ..ChartOptions::default() }
}

/// Host double that records subscriptions.
pub struct FakeHost {
    pub width: f32,
    pub theme: ThemeDescriptor,
    pub next_id: u64,
    pub active: Vec<(SubscriptionId, Topic)>,
    pub released: Vec<SubscriptionId>,
}

impl FakeHost {
    pub fn new(width: f32, theme: ThemeDescriptor) -> Self {
        Self { width, theme, next_id: 1, active: Vec::new(), released: Vec::new() }
    }
}

impl ChartHost for FakeHost {
    fn container_width(&self) -> f32 { self.width }
    fn theme(&self) -> ThemeDescriptor { self.theme }
    fn subscribe(&mut self, topic: Topic) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.active.push((id, topic));
        id
    }
    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.retain(|(a, _)| *a != id);
        self.released.push(id);
    }
}
