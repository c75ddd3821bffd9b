// File: crates/rtchart-core/tests/options.rs
// Purpose: ChartOptions construction and label zone handling.

use chrono::{Local, Offset};
use rtchart_core::ChartOptions;

#[test]
fn local_offset_options_keep_every_other_default() {
    let local = ChartOptions::with_local_offset();
    let defaults = ChartOptions::default();
    assert_eq!(ChartOptions { utc_offset_minutes: 0, ..local.clone() }, defaults);
    assert_eq!(local.offset().local_minus_utc() % 60, 0);
    let now = Local::now().offset().fix().local_minus_utc();
    assert_eq!(local.utc_offset_minutes, now / 60);
}

#[test]
fn out_of_range_offset_falls_back_to_utc() {
    let opts = ChartOptions { utc_offset_minutes: 48 * 60, ..ChartOptions::default() };
    assert_eq!(opts.offset().local_minus_utc(), 0);
    let ist = ChartOptions { utc_offset_minutes: 330, ..ChartOptions::default() };
    assert_eq!(ist.offset().local_minus_utc(), 330 * 60);
}
