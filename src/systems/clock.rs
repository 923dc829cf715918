//! Clock overlay system
//!
//! Refreshes the date/time label once per second. The refresh timer is
//! independent of the orbital tick and shares no state with the rotation
//! logic.

use bevy::prelude::*;
use chrono::{Local, NaiveDateTime};

use crate::components::ClockLabel;
use crate::config::CLOCK_FORMAT;
use crate::resources::ClockRefresh;

/// Write the current local date/time into the clock label
pub fn refresh_clock_label(
    time: Res<Time>,
    mut refresh: ResMut<ClockRefresh>,
    mut labels: Query<&mut Text, With<ClockLabel>>,
) {
    if !refresh.timer.tick(time.delta()).just_finished() {
        return;
    }

    let text = format_clock(Local::now().naive_local());
    for mut label in labels.iter_mut() {
        label.0.clone_from(&text);
    }
}

/// Format a timestamp the way the label displays it
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format(CLOCK_FORMAT).to_string()
}
